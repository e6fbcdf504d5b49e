use std::sync::Arc;

use barky_core::ApplicationError;
use barky_domain::events::DomainEvent;

use crate::repository::ServiceRepository;

/// A Unit of Work (UoW) works as a provider for repositories
/// that all operate within a single transaction.
///
/// Dropping a UoW without calling `commit` discards its changes.
#[async_trait::async_trait]
pub trait UnitOfWork<'a>: Send + Sync {
    fn services(&self) -> Arc<dyn ServiceRepository + 'a>;

    /// Drains the events recorded on aggregates touched by this UoW.
    fn collect_new_events(&self) -> Vec<DomainEvent> {
        self.services().collect_new_events()
    }

    // Transaction control methods
    // Consume self to ensure the UoW is not used after commit/rollback
    async fn commit(self: Box<Self>) -> Result<(), ApplicationError>;
    async fn rollback(self: Box<Self>) -> Result<(), ApplicationError>;
}

/// A factory for creating Unit of Work instances.
#[async_trait::async_trait]
pub trait UnitOfWorkProvider: Send + Sync {
    /// Prepares the backing store (schema, migrations). No-op by default.
    async fn initialize(&self) -> Result<(), ApplicationError> {
        Ok(())
    }

    /// Begin a new Unit of Work (transaction).
    async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError>;
}
