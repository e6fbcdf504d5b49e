use thiserror::Error;

/// Errors for malformed command data. Raised before any unit of work is opened.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Bookmark name cannot be empty")]
    EmptyName,

    #[error("Invalid bookmark URL '{0}'")]
    InvalidUrl(String),

    #[error("Invalid {field} timestamp '{value}'")]
    InvalidTimestamp { field: &'static str, value: String },

    #[error("Bookmark cannot be edited before it was created")]
    EditedBeforeCreated,

    #[error("Service sku cannot be empty")]
    EmptySku,
}
