use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::repositories::CategoryRepository;
use crate::features::events::dtos::{EventDetailResponseDto, EventListResponseDto};
use crate::features::events::repositories::EventRepository;
use crate::shared::types::{Page, PageRequest};

/// Service for browsing the event catalog
pub struct EventService {
    events: Arc<dyn EventRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl EventService {
    pub fn new(events: Arc<dyn EventRepository>, categories: Arc<dyn CategoryRepository>) -> Self {
        Self { events, categories }
    }

    /// List every event, newest first
    pub async fn list_events(&self, request: PageRequest) -> Result<Page<EventListResponseDto>> {
        tracing::info!(
            "Listing events: page={}, size={}",
            request.page,
            request.size
        );

        let page = self.events.find_all(request).await?;
        tracing::info!("Found {} events in total", page.total_count);

        Ok(page.map(Into::into))
    }

    /// Search events whose title contains `keyword`.
    ///
    /// An empty keyword is a substring of every title and therefore matches all events.
    pub async fn search_events(
        &self,
        keyword: &str,
        request: PageRequest,
    ) -> Result<Page<EventListResponseDto>> {
        tracing::info!(
            "Searching events: keyword={:?}, page={}, size={}",
            keyword,
            request.page,
            request.size
        );

        let page = self
            .events
            .find_by_title_containing(keyword, request)
            .await?;
        tracing::info!("Search for {:?} matched {} events", keyword, page.total_count);

        Ok(page.map(Into::into))
    }

    /// List events of one category. Fails with NotFound for an unknown category.
    pub async fn list_events_by_category(
        &self,
        category_id: i64,
        request: PageRequest,
    ) -> Result<Page<EventListResponseDto>> {
        if !self.categories.exists_by_id(category_id).await? {
            tracing::warn!("Category {} not found", category_id);
            return Err(AppError::NotFound(format!(
                "Category with id {} not found",
                category_id
            )));
        }

        let page = self
            .events
            .find_by_category_id(category_id, request)
            .await?;
        tracing::info!(
            "Category {} has {} events",
            category_id,
            page.total_count
        );

        Ok(page.map(Into::into))
    }

    /// Get a single event with local government and category resolved
    pub async fn get_event_detail(&self, id: i64) -> Result<EventDetailResponseDto> {
        let detail = self.events.find_detail_by_id(id).await?.ok_or_else(|| {
            tracing::warn!("Event {} not found", id);
            AppError::NotFound(format!("Event with id {} not found", id))
        })?;

        tracing::info!("Fetched event detail {}", id);
        Ok(detail.into())
    }
}
