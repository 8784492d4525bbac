use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::events::handlers;
use crate::features::events::services::EventService;

/// Create routes for the events feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<EventService>) -> Router {
    Router::new()
        .route("/api/events", get(handlers::list_events))
        // Static segments must stay ahead of {event_id}
        .route("/api/events/search", get(handlers::search_events))
        .route(
            "/api/events/categories/{category_id}",
            get(handlers::list_events_by_category),
        )
        .route("/api/events/{event_id}", get(handlers::get_event))
        .with_state(service)
}
