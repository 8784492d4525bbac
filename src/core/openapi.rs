use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::events::{dtos as events_dtos, handlers as events_handlers};
use crate::shared::types::{ApiResponse, Meta, PageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Events
        events_handlers::list_events,
        events_handlers::search_events,
        events_handlers::list_events_by_category,
        events_handlers::get_event,
        // Categories
        categories_handlers::list_categories,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Events
            events_dtos::EventListResponseDto,
            events_dtos::EventDetailResponseDto,
            PageResponse<events_dtos::EventListResponseDto>,
            ApiResponse<PageResponse<events_dtos::EventListResponseDto>>,
            ApiResponse<events_dtos::EventDetailResponseDto>,
            // Categories
            categories_dtos::CategoryResponseDto,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
        )
    ),
    tags(
        (name = "events", description = "Local government events (public, read-only)"),
        (name = "categories", description = "Event categories (public, read-only)"),
    ),
    info(
        title = "Event Catalog API",
        version = "0.1.0",
        description = "API documentation for the event catalog",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
