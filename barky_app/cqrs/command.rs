use async_trait::async_trait;
use barky_core::{ApplicationError, ValidationError};

use crate::{context::HandlerContext, uow::UnitOfWork};

/// A marker trait for Command structs.
/// Commands are operations that change the state of the system.
pub trait Command: Send + Sync + 'static {
    /// Checks the command data before any Unit of Work is opened.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// A trait for handlers that execute Commands.
/// It receives the command and a Unit of Work (&Box<dyn UnitOfWork...>) to use.
/// It should NOT manage the transaction lifecycle (commit/rollback);
/// that is the job of the MessageBus.
#[async_trait]
pub trait CommandHandler<C: Command>: Send + Sync {
    async fn handle(
        &self,
        cmd: C,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        ctx: &HandlerContext,
    ) -> Result<(), ApplicationError>;
}
