use async_trait::async_trait;

use barky_core::ApplicationError;
use barky_domain::events::DomainEvent;

use crate::{context::HandlerContext, cqrs::EventHandler, uow::UnitOfWork};

/// Confirms a new bookmark to the configured destination.
pub struct NotifyBookmarkAddedHandler {}

impl NotifyBookmarkAddedHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl EventHandler for NotifyBookmarkAddedHandler {
    fn name(&self) -> &'static str {
        "notify_bookmark_added"
    }

    async fn handle(
        &self,
        event: &DomainEvent,
        _uow: &Box<dyn UnitOfWork<'_> + '_>,
        ctx: &HandlerContext,
    ) -> Result<(), ApplicationError> {
        let DomainEvent::BookmarkAdded { sku, name, .. } = event else {
            return Ok(());
        };

        ctx.notifications
            .send(
                &ctx.config.notify_destination,
                &format!("Bookmark '{name}' added to '{sku}'"),
            )
            .await
    }
}
