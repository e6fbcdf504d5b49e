use std::sync::Arc;

use barky_core::ApplicationError;
use barky_domain::events::EventKind;

use crate::{
    command_handlers::AddBookmarkCommandHandler,
    config::Config,
    context::{HandlerContext, Publish},
    cqrs::{
        commands::AddBookmark,
        queries::{GetService, GetServiceByBookmark},
    },
    event_handlers::{
        NotifyBookmarkAddedHandler, NotifyDuplicateBookmarkHandler, PublishBookmarkAddedHandler,
    },
    handler_registry::HandlerRegistry,
    message_bus::MessageBus,
    notifications::Notifications,
    queries_handlers::{GetServiceByBookmarkHandler, GetServiceHandler},
    uow::UnitOfWorkProvider,
};

pub struct BootstrapOptions {
    /// Runs `UnitOfWorkProvider::initialize` before wiring the bus.
    pub start_store: bool,
    pub uow_provider: Arc<dyn UnitOfWorkProvider>,
    pub notifications: Arc<dyn Notifications>,
    pub publish: Publish,
    pub config: Arc<Config>,
}

/// Wires every handler into a ready-to-use `MessageBus`.
pub async fn bootstrap(options: BootstrapOptions) -> Result<MessageBus, ApplicationError> {
    let BootstrapOptions {
        start_store,
        uow_provider,
        notifications,
        publish,
        config,
    } = options;

    if start_store {
        uow_provider.initialize().await?;
        tracing::info!("Store initialized");
    }

    let mut registry = HandlerRegistry::new();

    registry.register_command::<AddBookmark, _>(AddBookmarkCommandHandler::new())?;

    registry.register_query::<GetService, _>(GetServiceHandler::new())?;
    registry.register_query::<GetServiceByBookmark, _>(GetServiceByBookmarkHandler::new())?;

    registry.subscribe(EventKind::BookmarkAdded, NotifyBookmarkAddedHandler::new());
    registry.subscribe(EventKind::BookmarkAdded, PublishBookmarkAddedHandler::new());
    registry.subscribe(
        EventKind::DuplicateBookmarkIgnored,
        NotifyDuplicateBookmarkHandler::new(),
    );

    let context = HandlerContext::new(config, notifications, publish);
    Ok(MessageBus::new(registry, uow_provider, context))
}
