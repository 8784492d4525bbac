mod local_gov;

pub use local_gov::LocalGov;
