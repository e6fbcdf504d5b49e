use serde::Deserialize;

use barky_core::ValidationError;
use barky_domain::models::{Bookmark, bookmark::parse_timestamp};

use crate::cqrs::Command;

/// Adds a bookmark to the service named after it.
/// Timestamps are ISO-8601 strings as sent by clients.
#[derive(Debug, Clone, Deserialize)]
pub struct AddBookmark {
    pub id: i64,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub category: Option<String>,
    pub created: String,
    pub edited: String,
}

impl AddBookmark {
    /// Sku of the service this bookmark belongs to.
    pub fn sku(&self) -> &str {
        &self.name
    }

    pub fn to_bookmark(&self) -> Result<Bookmark, ValidationError> {
        let created_at = parse_timestamp("created", &self.created)?;
        let edited_at = parse_timestamp("edited", &self.edited)?;

        Bookmark::new(
            self.id,
            self.name.clone(),
            self.url.clone(),
            self.category.clone(),
            created_at,
            edited_at,
        )
    }
}

impl Command for AddBookmark {
    fn validate(&self) -> Result<(), ValidationError> {
        self.to_bookmark().map(|_| ())
    }
}
