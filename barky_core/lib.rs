use thiserror::Error;

pub mod app_error;
pub mod db_error;
pub mod validation_error;

pub use app_error::AppError;
pub use db_error::DbError;
pub use validation_error::ValidationError;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    App(#[from] AppError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("An unknown error occurred: {0}")]
    Unknown(String),
}

impl ApplicationError {
    /// True when the error was raised before any state could be touched.
    pub fn is_validation(&self) -> bool {
        matches!(self, ApplicationError::Validation(_))
    }
}

impl From<anyhow::Error> for ApplicationError {
    fn from(err: anyhow::Error) -> Self {
        ApplicationError::Unknown(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_errors_display_transparently() {
        let err: ApplicationError = ValidationError::EmptyName.into();
        assert_eq!(err.to_string(), "Bookmark name cannot be empty");
        assert!(err.is_validation());

        let err: ApplicationError = DbError::Transaction("boom".to_string()).into();
        assert_eq!(err.to_string(), "Transaction error: boom");
        assert!(!err.is_validation());
    }

    #[test]
    fn test_anyhow_becomes_unknown() {
        let err: ApplicationError = anyhow::anyhow!("something odd").into();
        match err {
            ApplicationError::Unknown(msg) => assert_eq!(msg, "something odd"),
            e => panic!("Expected Unknown error, got: {:?}", e),
        }
    }
}
