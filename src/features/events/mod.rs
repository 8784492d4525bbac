//! Event catalog feature.
//!
//! Read-only access to events loaded by the external crawler.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/events` | Page of all events, newest first |
//! | GET | `/api/events/search?keyword=` | Page of events whose title contains `keyword` |
//! | GET | `/api/events/categories/{category_id}` | Page of events in one category |
//! | GET | `/api/events/{event_id}` | Event detail with local government and category |
//!
//! List endpoints accept `page` (0-based, default 0) and `size`
//! (default 5, max 100).

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{EventRepository, PgEventRepository};
pub use services::EventService;
