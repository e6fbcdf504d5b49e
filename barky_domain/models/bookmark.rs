use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use barky_core::ValidationError;

/// A saved link. Owned by exactly one [`Service`](super::Service).
///
/// Name and url are fixed at creation: there are no setters, the only way
/// to obtain a different bookmark is to build a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    id: i64,
    name: String,
    url: String,
    category: Option<String>,
    created_at: DateTime<Utc>,
    edited_at: DateTime<Utc>,
}

impl Bookmark {
    /// Creates a validated bookmark.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        url: impl Into<String>,
        category: Option<String>,
        created_at: DateTime<Utc>,
        edited_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let url = url.into();

        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        validate_url(&url)?;
        if edited_at < created_at {
            return Err(ValidationError::EditedBeforeCreated);
        }

        Ok(Self {
            id,
            name,
            url,
            category: category.filter(|c| !c.trim().is_empty()),
            created_at,
            edited_at,
        })
    }

    /// Rebuilds a bookmark from persisted state, skipping validation.
    pub fn from_parts(
        id: i64,
        name: String,
        url: String,
        category: Option<String>,
        created_at: DateTime<Utc>,
        edited_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            url,
            category,
            created_at,
            edited_at,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn edited_at(&self) -> DateTime<Utc> {
        self.edited_at
    }

    /// Two bookmarks are the same when they share the id or point to the same url.
    pub fn is_same_as(&self, other: &Bookmark) -> bool {
        self.id == other.id || self.url == other.url
    }
}

/// Parses an ISO-8601 timestamp.
///
/// Accepts RFC 3339 (with offset) and naive date-times, which are taken as UTC.
pub fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<Utc>, ValidationError> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
        .map_err(|_| ValidationError::InvalidTimestamp {
            field,
            value: value.to_string(),
        })
}

fn validate_url(url: &str) -> Result<(), ValidationError> {
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"));

    match rest {
        Some(host) if !host.is_empty() && !url.chars().any(char::is_whitespace) => Ok(()),
        _ => Err(ValidationError::InvalidUrl(url.to_string())),
    }
}
