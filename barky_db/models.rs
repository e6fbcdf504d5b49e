use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, FromRow, Clone)]
pub struct Bookmark {
    pub id: i64,
    pub sku: String,
    pub name: String,
    pub url: String,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub edited_at: DateTime<Utc>,
    pub position: i32,
}
