use barky_domain::models::Service;

use crate::cqrs::Query;

/// Fetch a service by sku.
pub struct GetService {
    pub sku: String,
}

impl Query for GetService {
    type Output = Option<Service>;
}

/// Fetch the service owning a bookmark.
pub struct GetServiceByBookmark {
    pub bookmark_id: i64,
}

impl Query for GetServiceByBookmark {
    type Output = Option<Service>;
}
