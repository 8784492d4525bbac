use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppPath, AppQuery};
use crate::features::events::dtos::{
    EventDetailResponseDto, EventListResponseDto, EventSearchQuery,
};
use crate::features::events::services::EventService;
use crate::shared::types::{ApiResponse, PageResponse, PaginationQuery};

/// List all events, newest first
#[utoipa::path(
    get,
    path = "/api/events",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of events", body = ApiResponse<PageResponse<EventListResponseDto>>),
        (status = 400, description = "Invalid pagination parameters")
    ),
    tag = "events"
)]
pub async fn list_events(
    State(service): State<Arc<EventService>>,
    AppQuery(pagination): AppQuery<PaginationQuery>,
) -> Result<Json<ApiResponse<PageResponse<EventListResponseDto>>>> {
    let page = service
        .list_events(pagination.into_page_request()?)
        .await?;
    Ok(Json(ApiResponse::success(Some(page.into()), None, None)))
}

/// Search events by title
///
/// Case-sensitive substring match on the title. Without `keyword` every event is listed.
#[utoipa::path(
    get,
    path = "/api/events/search",
    params(EventSearchQuery, PaginationQuery),
    responses(
        (status = 200, description = "Page of matching events", body = ApiResponse<PageResponse<EventListResponseDto>>),
        (status = 400, description = "Malformed keyword or pagination parameters")
    ),
    tag = "events"
)]
pub async fn search_events(
    State(service): State<Arc<EventService>>,
    AppQuery(search): AppQuery<EventSearchQuery>,
    AppQuery(pagination): AppQuery<PaginationQuery>,
) -> Result<Json<ApiResponse<PageResponse<EventListResponseDto>>>> {
    search
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let request = pagination.into_page_request()?;

    let page = match search.keyword.as_deref() {
        Some(keyword) => service.search_events(keyword, request).await?,
        None => service.list_events(request).await?,
    };
    Ok(Json(ApiResponse::success(Some(page.into()), None, None)))
}

/// List events of a category
#[utoipa::path(
    get,
    path = "/api/events/categories/{category_id}",
    params(
        ("category_id" = i64, Path, description = "Category id"),
        PaginationQuery
    ),
    responses(
        (status = 200, description = "Page of events in the category", body = ApiResponse<PageResponse<EventListResponseDto>>),
        (status = 400, description = "Invalid id or pagination parameters"),
        (status = 404, description = "Category not found")
    ),
    tag = "events"
)]
pub async fn list_events_by_category(
    State(service): State<Arc<EventService>>,
    AppPath(category_id): AppPath<i64>,
    AppQuery(pagination): AppQuery<PaginationQuery>,
) -> Result<Json<ApiResponse<PageResponse<EventListResponseDto>>>> {
    let page = service
        .list_events_by_category(category_id, pagination.into_page_request()?)
        .await?;
    Ok(Json(ApiResponse::success(Some(page.into()), None, None)))
}

/// Get event detail
#[utoipa::path(
    get,
    path = "/api/events/{event_id}",
    params(
        ("event_id" = i64, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Event details", body = ApiResponse<EventDetailResponseDto>),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(service): State<Arc<EventService>>,
    AppPath(event_id): AppPath<i64>,
) -> Result<Json<ApiResponse<EventDetailResponseDto>>> {
    let event = service.get_event_detail(event_id).await?;
    Ok(Json(ApiResponse::success(Some(event), None, None)))
}
