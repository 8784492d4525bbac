mod event;

pub use event::{Event, EventDetail, EventDetailRow};
