use serde::Serialize;
use sqlx::FromRow;

/// Local government (region) that hosts events
#[derive(Debug, Clone, FromRow, Serialize, PartialEq, Eq)]
pub struct LocalGov {
    pub id: i16,
    pub district: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}
