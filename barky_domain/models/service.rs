use serde::{Deserialize, Serialize};

use barky_core::ValidationError;

use crate::{events::DomainEvent, models::bookmark::Bookmark};

/// Aggregate root grouping bookmarks under a sku.
///
/// Bookmarks are only reachable and mutated through their service. Every
/// mutation records a [`DomainEvent`] which stays on the aggregate until the
/// unit of work collects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    sku: String,
    bookmarks: Vec<Bookmark>,
    #[serde(skip)]
    events: Vec<DomainEvent>,
}

impl Service {
    pub fn new(sku: impl Into<String>) -> Result<Self, ValidationError> {
        let sku = sku.into();
        if sku.trim().is_empty() {
            return Err(ValidationError::EmptySku);
        }

        Ok(Self {
            sku,
            bookmarks: Vec::new(),
            events: Vec::new(),
        })
    }

    /// Rebuilds a service from persisted state. No events are recorded.
    pub fn from_parts(sku: String, bookmarks: Vec<Bookmark>) -> Self {
        Self {
            sku,
            bookmarks,
            events: Vec::new(),
        }
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn bookmark(&self, id: i64) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.id() == id)
    }

    pub fn contains_bookmark(&self, id: i64) -> bool {
        self.bookmark(id).is_some()
    }

    /// Adds a bookmark unless an equivalent one is already present.
    ///
    /// Returns `true` when the bookmark was attached. Duplicates leave the
    /// collection untouched and record `DuplicateBookmarkIgnored` instead.
    pub fn add_bookmark(&mut self, bookmark: Bookmark) -> bool {
        if let Some(existing) = self.bookmarks.iter().find(|b| b.is_same_as(&bookmark)) {
            self.events.push(DomainEvent::DuplicateBookmarkIgnored {
                sku: self.sku.clone(),
                bookmark_id: existing.id(),
                url: bookmark.url().to_string(),
            });
            return false;
        }

        self.events.push(DomainEvent::BookmarkAdded {
            sku: self.sku.clone(),
            bookmark_id: bookmark.id(),
            name: bookmark.name().to_string(),
            url: bookmark.url().to_string(),
        });
        self.bookmarks.push(bookmark);
        true
    }

    pub fn pending_events(&self) -> &[DomainEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }
}
