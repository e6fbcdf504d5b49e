use std::sync::Arc;

use barky_app::context::Publish;
use barky_core::ApplicationError;
use barky_domain::events::DomainEvent;

/// Publishes events as JSON log records on the `events` target.
pub fn tracing_publisher() -> Publish {
    Arc::new(|event: &DomainEvent| -> Result<(), ApplicationError> {
        let payload = serde_json::to_string(event)?;
        tracing::info!(target: "events", event = event.name(), %payload, "Event published");
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_publisher_accepts_events() {
        let publish = tracing_publisher();
        let event = DomainEvent::BookmarkAdded {
            sku: "test".to_string(),
            bookmark_id: 0,
            name: "test".to_string(),
            url: "http://www.example.com".to_string(),
        };
        assert!(publish(&event).is_ok());
    }
}
