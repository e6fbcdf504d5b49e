use async_trait::async_trait;

use barky_core::{AppError, ApplicationError};
use barky_domain::events::DomainEvent;

use crate::{context::HandlerContext, cqrs::EventHandler, uow::UnitOfWork};

/// Forwards new bookmarks to the external publish callback.
pub struct PublishBookmarkAddedHandler {}

impl PublishBookmarkAddedHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl EventHandler for PublishBookmarkAddedHandler {
    fn name(&self) -> &'static str {
        "publish_bookmark_added"
    }

    async fn handle(
        &self,
        event: &DomainEvent,
        _uow: &Box<dyn UnitOfWork<'_> + '_>,
        ctx: &HandlerContext,
    ) -> Result<(), ApplicationError> {
        (ctx.publish)(event).map_err(|e| {
            AppError::Publish {
                event: event.name(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        config::Config,
        test_utils::tests::{FakeNotifications, InMemoryUnitOfWorkProvider, RecordingPublisher},
        uow::UnitOfWorkProvider,
    };

    fn event() -> DomainEvent {
        DomainEvent::BookmarkAdded {
            sku: "test".to_string(),
            bookmark_id: 1,
            name: "test".to_string(),
            url: "http://www.example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_forwards_event() {
        let publisher = RecordingPublisher::new();
        let ctx = HandlerContext::new(
            Arc::new(Config::default()),
            Arc::new(FakeNotifications::new()),
            publisher.publish(),
        );
        let provider = InMemoryUnitOfWorkProvider::new();
        let uow = provider.begin().await.unwrap();

        PublishBookmarkAddedHandler::new()
            .handle(&event(), &uow, &ctx)
            .await
            .unwrap();

        assert_eq!(publisher.published(), vec![event()]);
    }

    #[tokio::test]
    async fn test_wraps_publish_failures() {
        let ctx = HandlerContext::new(
            Arc::new(Config::default()),
            Arc::new(FakeNotifications::new()),
            Arc::new(|_: &DomainEvent| -> Result<(), ApplicationError> {
                Err(ApplicationError::Infrastructure("broker down".into()))
            }),
        );
        let provider = InMemoryUnitOfWorkProvider::new();
        let uow = provider.begin().await.unwrap();

        let result = PublishBookmarkAddedHandler::new()
            .handle(&event(), &uow, &ctx)
            .await;

        match result.unwrap_err() {
            ApplicationError::App(AppError::Publish { event, reason }) => {
                assert_eq!(event, "bookmark_added");
                assert!(reason.contains("broker down"));
            }
            e => panic!("Expected Publish error, got: {:?}", e),
        }
    }
}
