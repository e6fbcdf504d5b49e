use thiserror::Error;

/// Errors for app logic (dispatch, handlers, collaborators).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No command handler registered for {0}")]
    NoCommandHandler(&'static str),

    #[error("No query handler registered for {0}")]
    NoQueryHandler(&'static str),

    #[error("A command handler is already registered for {0}")]
    CommandHandlerAlreadyRegistered(&'static str),

    #[error("A query handler is already registered for {0}")]
    QueryHandlerAlreadyRegistered(&'static str),

    #[error("Bookmark with ID {id} already belongs to service '{sku}'")]
    BookmarkIdTaken { id: i64, sku: String },

    #[error("Notification to '{destination}' failed: {reason}")]
    Notification { destination: String, reason: String },

    #[error("Publishing event '{event}' failed: {reason}")]
    Publish { event: &'static str, reason: String },
}
