mod event_handler;

pub use event_handler::*;
