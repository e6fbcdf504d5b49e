use chrono::{DateTime, Utc};
use rand::Rng;

use crate::models::{bookmark::Bookmark, service::Service};

#[derive(Default, Clone)]
pub struct BookmarkFactoryOptions<'a> {
    pub id: Option<i64>,
    pub name: Option<&'a str>,
    pub url: Option<&'a str>,
    pub category: Option<&'a str>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Default, Clone)]
pub struct ServiceFactoryOptions<'a> {
    pub sku: Option<&'a str>,
    pub bookmarks: Option<Vec<Bookmark>>,
}

pub fn bookmark_factory(options: BookmarkFactoryOptions) -> Bookmark {
    let id = options
        .id
        .unwrap_or_else(|| rand::thread_rng().r#gen::<u32>() as i64);
    let default_url = format!("http://www.example.com/{id}");
    let created_at = options.created_at.unwrap_or_else(Utc::now);

    Bookmark::from_parts(
        id,
        options.name.unwrap_or("test").to_string(),
        options.url.map_or(default_url, |s| s.to_string()),
        options.category.map(|s| s.to_string()),
        created_at,
        created_at,
    )
}

pub fn service_factory(options: ServiceFactoryOptions) -> Service {
    let default_sku: String = format!("service_{}", rand::thread_rng().r#gen::<u32>());

    Service::from_parts(
        options.sku.map_or(default_sku, |s| s.to_string()),
        options.bookmarks.unwrap_or_default(),
    )
}
