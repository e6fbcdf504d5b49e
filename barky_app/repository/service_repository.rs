use barky_core::ApplicationError;
use barky_domain::{events::DomainEvent, models::Service};

/// Collection-like access to `Service` aggregates within one unit of work.
#[async_trait::async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Registers a service for persistence, replacing any previous state with the same sku.
    /// The service is visible to `get` right away, before commit. Its pending
    /// events move into the unit of work, to be drained by `collect_new_events`.
    async fn add(&self, service: &mut Service) -> Result<(), ApplicationError>;

    /// Finds a service by sku. Absence is `None`, not an error.
    async fn get(&self, sku: &str) -> Result<Option<Service>, ApplicationError>;

    /// Finds the service owning the bookmark with the given id.
    async fn get_by_bookmark_id(&self, bookmark_id: i64)
    -> Result<Option<Service>, ApplicationError>;

    /// Drains the events recorded on services registered with `add`.
    fn collect_new_events(&self) -> Vec<DomainEvent>;
}
