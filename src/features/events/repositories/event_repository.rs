use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::events::models::{Event, EventDetail, EventDetailRow};
use crate::shared::types::{Page, PageRequest};

/// Read access to events. Every list is ordered newest first
/// (`created_at DESC`, then `id DESC` so pages never overlap).
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn find_all(&self, request: PageRequest) -> Result<Page<Event>>;

    /// Events whose title contains `keyword` (case-sensitive)
    async fn find_by_title_containing(
        &self,
        keyword: &str,
        request: PageRequest,
    ) -> Result<Page<Event>>;

    async fn find_by_category_id(
        &self,
        category_id: i64,
        request: PageRequest,
    ) -> Result<Page<Event>>;

    /// Event with local government and category joined in one query
    async fn find_detail_by_id(&self, id: i64) -> Result<Option<EventDetail>>;
}

/// Escape `LIKE` metacharacters so the keyword matches literally
pub fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

const EVENT_COLUMNS: &str = "id, local_gov_id, category_id, title, address, start_date, end_date, \
     start_time, end_time, url, spot, fee, host, inquiry, description, created_at";

pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn find_all(&self, request: PageRequest) -> Result<Page<Event>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count events: {:?}", e);
                AppError::Database(e)
            })?;

        let query = format!(
            r#"
            SELECT {}
            FROM events
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
            EVENT_COLUMNS
        );

        let events: Vec<Event> = sqlx::query_as(&query)
            .bind(request.limit())
            .bind(request.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list events: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(Page::new(events, total, request))
    }

    async fn find_by_title_containing(
        &self,
        keyword: &str,
        request: PageRequest,
    ) -> Result<Page<Event>> {
        let pattern = format!("%{}%", escape_like(keyword));

        let total: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM events WHERE title LIKE $1 ESCAPE '\'"#)
                .bind(&pattern)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to count events matching {:?}: {:?}", keyword, e);
                    AppError::Database(e)
                })?;

        let query = format!(
            r#"
            SELECT {}
            FROM events
            WHERE title LIKE $1 ESCAPE '\'
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
            EVENT_COLUMNS
        );

        let events: Vec<Event> = sqlx::query_as(&query)
            .bind(&pattern)
            .bind(request.limit())
            .bind(request.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to search events by {:?}: {:?}", keyword, e);
                AppError::Database(e)
            })?;

        Ok(Page::new(events, total, request))
    }

    async fn find_by_category_id(
        &self,
        category_id: i64,
        request: PageRequest,
    ) -> Result<Page<Event>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events WHERE category_id = $1")
            .bind(category_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to count events for category {}: {:?}",
                    category_id,
                    e
                );
                AppError::Database(e)
            })?;

        let query = format!(
            r#"
            SELECT {}
            FROM events
            WHERE category_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
            EVENT_COLUMNS
        );

        let events: Vec<Event> = sqlx::query_as(&query)
            .bind(category_id)
            .bind(request.limit())
            .bind(request.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to list events for category {}: {:?}",
                    category_id,
                    e
                );
                AppError::Database(e)
            })?;

        Ok(Page::new(events, total, request))
    }

    async fn find_detail_by_id(&self, id: i64) -> Result<Option<EventDetail>> {
        let row: Option<EventDetailRow> = sqlx::query_as(
            r#"
            SELECT e.id, e.local_gov_id, e.category_id, e.title, e.address,
                   e.start_date, e.end_date, e.start_time, e.end_time,
                   e.url, e.spot, e.fee, e.host, e.inquiry, e.description, e.created_at,
                   lg.district AS local_district,
                   lg.name AS local_name,
                   lg.phone AS local_phone,
                   lg.email AS local_email,
                   c.name AS category_name
            FROM events e
            JOIN local_govs lg ON lg.id = e.local_gov_id
            JOIN events_categories c ON c.id = e.category_id
            WHERE e.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch event detail {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(row.map(Into::into))
    }
}
