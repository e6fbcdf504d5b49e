use serde::{Deserialize, Serialize};

/// Facts recorded by aggregates while a command is handled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    BookmarkAdded {
        sku: String,
        bookmark_id: i64,
        name: String,
        url: String,
    },
    DuplicateBookmarkIgnored {
        sku: String,
        bookmark_id: i64,
        url: String,
    },
}

/// Discriminant used to route events to their handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    BookmarkAdded,
    DuplicateBookmarkIgnored,
}

impl DomainEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            DomainEvent::BookmarkAdded { .. } => EventKind::BookmarkAdded,
            DomainEvent::DuplicateBookmarkIgnored { .. } => EventKind::DuplicateBookmarkIgnored,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn sku(&self) -> &str {
        match self {
            DomainEvent::BookmarkAdded { sku, .. } => sku,
            DomainEvent::DuplicateBookmarkIgnored { sku, .. } => sku,
        }
    }
}

impl EventKind {
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::BookmarkAdded => "bookmark_added",
            EventKind::DuplicateBookmarkIgnored => "duplicate_bookmark_ignored",
        }
    }
}
