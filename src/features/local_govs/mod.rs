//! Local governments hosting events.
//!
//! Rows are loaded by the external crawler and only ever read here,
//! always resolved through the event detail query.

pub mod models;

pub use models::LocalGov;
