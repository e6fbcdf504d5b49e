use async_trait::async_trait;

use barky_core::ApplicationError;
use barky_domain::events::DomainEvent;

use crate::{context::HandlerContext, cqrs::EventHandler, uow::UnitOfWork};

/// Tells the user a bookmark was already saved.
pub struct NotifyDuplicateBookmarkHandler {}

impl NotifyDuplicateBookmarkHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl EventHandler for NotifyDuplicateBookmarkHandler {
    fn name(&self) -> &'static str {
        "notify_duplicate_bookmark"
    }

    async fn handle(
        &self,
        event: &DomainEvent,
        _uow: &Box<dyn UnitOfWork<'_> + '_>,
        ctx: &HandlerContext,
    ) -> Result<(), ApplicationError> {
        let DomainEvent::DuplicateBookmarkIgnored { sku, url, .. } = event else {
            return Ok(());
        };

        ctx.notifications
            .send(
                &ctx.config.notify_destination,
                &format!("'{url}' is already bookmarked under '{sku}'"),
            )
            .await
    }
}
