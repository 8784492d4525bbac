pub mod categories;
pub mod events;
pub mod local_govs;
