use serde::Serialize;
use sqlx::FromRow;

/// Database model for an event category
#[derive(Debug, Clone, FromRow, Serialize, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}
