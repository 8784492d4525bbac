use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::events::models::{Event, EventDetail};

/// Query parameters for title search
#[derive(Debug, Clone, Default, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct EventSearchQuery {
    /// Substring to look for in event titles (case-sensitive).
    /// Missing lists every event, empty matches every event.
    #[param(example = "서울")]
    #[validate(length(max = 255, message = "keyword must not exceed 255 characters"))]
    pub keyword: Option<String>,
}

/// Summary of an event used by list endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventListResponseDto {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub inquiry: Option<String>,
}

impl From<Event> for EventListResponseDto {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            address: event.address,
            start_date: event.start_date,
            end_date: event.end_date,
            start_time: event.start_time,
            end_time: event.end_time,
            inquiry: event.inquiry,
        }
    }
}

/// Full event with local government and category denormalized
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventDetailResponseDto {
    pub id: i64,
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
    pub local_id: i16,
    pub local_district: String,
    pub local_name: Option<String>,
    pub local_phone: Option<String>,
    pub local_email: Option<String>,
    pub category_id: i64,
    pub category_name: String,
}

impl From<EventDetail> for EventDetailResponseDto {
    fn from(detail: EventDetail) -> Self {
        let EventDetail {
            event,
            local_gov,
            category,
        } = detail;

        Self {
            id: event.id,
            title: event.title,
            address: event.address,
            start_date: event.start_date,
            end_date: event.end_date,
            start_time: event.start_time,
            end_time: event.end_time,
            url: event.url,
            spot: event.spot,
            fee: event.fee,
            host: event.host,
            inquiry: event.inquiry,
            description: event.description,
            created_at: event.created_at,
            local_id: local_gov.id,
            local_district: local_gov.district,
            local_name: local_gov.name,
            local_phone: local_gov.phone,
            local_email: local_gov.email,
            category_id: category.id,
            category_name: category.name,
        }
    }
}
