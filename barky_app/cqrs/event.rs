use async_trait::async_trait;
use barky_core::ApplicationError;
use barky_domain::events::DomainEvent;

use crate::{context::HandlerContext, uow::UnitOfWork};

/// A trait for handlers reacting to domain events.
/// Each invocation gets its own Unit of Work; events recorded there are
/// published after it commits. Failures are isolated per handler.
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Name used when reporting failures.
    fn name(&self) -> &'static str;

    async fn handle(
        &self,
        event: &DomainEvent,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        ctx: &HandlerContext,
    ) -> Result<(), ApplicationError>;
}
