use std::sync::Arc;

use barky_core::ApplicationError;
use barky_domain::events::DomainEvent;

use crate::{config::Config, notifications::Notifications};

/// Callback used to propagate events outside of the process.
pub type Publish = Arc<dyn Fn(&DomainEvent) -> Result<(), ApplicationError> + Send + Sync>;

/// Collaborators injected into every command, query and event handler.
#[derive(Clone)]
pub struct HandlerContext {
    pub config: Arc<Config>,
    pub notifications: Arc<dyn Notifications>,
    pub publish: Publish,
}

impl HandlerContext {
    pub fn new(config: Arc<Config>, notifications: Arc<dyn Notifications>, publish: Publish) -> Self {
        Self {
            config,
            notifications,
            publish,
        }
    }
}
