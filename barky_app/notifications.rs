use async_trait::async_trait;

use barky_core::ApplicationError;

/// Side channel for user-facing messages, decoupled from persistence.
///
/// Delivery failures are reported to the caller, who decides whether to log
/// them; they never undo a committed unit of work.
#[async_trait]
pub trait Notifications: Send + Sync {
    async fn send(&self, destination: &str, message: &str) -> Result<(), ApplicationError>;
}

/// Emits notifications as structured log records on the `notifications` target.
#[derive(Debug, Default, Clone)]
pub struct TracingNotifications;

impl TracingNotifications {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifications for TracingNotifications {
    async fn send(&self, destination: &str, message: &str) -> Result<(), ApplicationError> {
        tracing::info!(target: "notifications", destination, message, "Notification sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_tracing_notifications_never_fail() {
        let notifications = TracingNotifications::new();
        assert!(notifications.send("bookmarks", "hello").await.is_ok());
    }
}
