use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::features::categories::models::Category;
use crate::features::local_govs::models::LocalGov;

/// Database model for an event row
#[derive(Debug, Clone, FromRow, Serialize, PartialEq, Eq)]
pub struct Event {
    pub id: i64,
    pub local_gov_id: i16,
    pub category_id: i64,
    pub title: String,
    pub address: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub url: Option<String>,
    pub spot: Option<String>,
    pub fee: Option<String>,
    pub host: Option<String>,
    pub inquiry: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Event with its local government and category resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetail {
    pub event: Event,
    pub local_gov: LocalGov,
    pub category: Category,
}

/// Flat row produced by the three-table detail join
#[derive(Debug, Clone, FromRow)]
pub struct EventDetailRow {
    #[sqlx(flatten)]
    pub event: Event,
    pub local_district: String,
    pub local_name: Option<String>,
    pub local_phone: Option<String>,
    pub local_email: Option<String>,
    pub category_name: String,
}

impl From<EventDetailRow> for EventDetail {
    fn from(row: EventDetailRow) -> Self {
        let local_gov = LocalGov {
            id: row.event.local_gov_id,
            district: row.local_district,
            name: row.local_name,
            phone: row.local_phone,
            email: row.local_email,
        };
        let category = Category {
            id: row.event.category_id,
            name: row.category_name,
        };
        Self {
            event: row.event,
            local_gov,
            category,
        }
    }
}
