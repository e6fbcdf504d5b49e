use std::{
    any::{Any, TypeId, type_name},
    collections::HashMap,
    sync::Arc,
};

use barky_core::{AppError, ApplicationError};
use barky_domain::events::EventKind;

use crate::cqrs::{Command, CommandHandler, EventHandler, Query, QueryHandler};

type ErasedHandler = Box<dyn Any + Send + Sync>;

/// Explicit mapping from messages to their handlers, built once at bootstrap
/// and handed to the `MessageBus`.
///
/// - every command type has exactly one handler;
/// - every query type has exactly one handler;
/// - every event kind has zero or more handlers, kept in registration order.
#[derive(Default)]
pub struct HandlerRegistry {
    // TypeId::of::<C>() -> Arc<dyn CommandHandler<C>>
    commands: HashMap<TypeId, ErasedHandler>,
    // TypeId::of::<Q>() -> Arc<dyn QueryHandler<Q>>
    queries: HashMap<TypeId, ErasedHandler>,
    events: HashMap<EventKind, Vec<Arc<dyn EventHandler>>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_command<C, H>(&mut self, handler: H) -> Result<(), ApplicationError>
    where
        C: Command,
        H: CommandHandler<C> + 'static,
    {
        let key = TypeId::of::<C>();
        if self.commands.contains_key(&key) {
            return Err(AppError::CommandHandlerAlreadyRegistered(type_name::<C>()).into());
        }

        let handler: Arc<dyn CommandHandler<C>> = Arc::new(handler);
        self.commands.insert(key, Box::new(handler));
        Ok(())
    }

    pub fn register_query<Q, H>(&mut self, handler: H) -> Result<(), ApplicationError>
    where
        Q: Query,
        H: QueryHandler<Q> + 'static,
    {
        let key = TypeId::of::<Q>();
        if self.queries.contains_key(&key) {
            return Err(AppError::QueryHandlerAlreadyRegistered(type_name::<Q>()).into());
        }

        let handler: Arc<dyn QueryHandler<Q>> = Arc::new(handler);
        self.queries.insert(key, Box::new(handler));
        Ok(())
    }

    /// Appends a handler for `kind`. Handlers run in the order they were subscribed.
    pub fn subscribe<H>(&mut self, kind: EventKind, handler: H)
    where
        H: EventHandler + 'static,
    {
        self.events.entry(kind).or_default().push(Arc::new(handler));
    }

    pub fn command_handler<C: Command>(&self) -> Option<Arc<dyn CommandHandler<C>>> {
        self.commands
            .get(&TypeId::of::<C>())
            .and_then(|h| (**h).downcast_ref::<Arc<dyn CommandHandler<C>>>())
            .cloned()
    }

    pub fn query_handler<Q: Query>(&self) -> Option<Arc<dyn QueryHandler<Q>>> {
        self.queries
            .get(&TypeId::of::<Q>())
            .and_then(|h| (**h).downcast_ref::<Arc<dyn QueryHandler<Q>>>())
            .cloned()
    }

    pub fn event_handlers(&self, kind: EventKind) -> &[Arc<dyn EventHandler>] {
        self.events.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::{
        command_handlers::AddBookmarkCommandHandler,
        context::HandlerContext,
        cqrs::{commands::AddBookmark, queries::GetService},
        event_handlers::NotifyBookmarkAddedHandler,
        queries_handlers::GetServiceHandler,
        uow::UnitOfWork,
    };
    use barky_domain::events::DomainEvent;

    struct Noop(&'static str);

    #[async_trait]
    impl EventHandler for Noop {
        fn name(&self) -> &'static str {
            self.0
        }

        async fn handle(
            &self,
            _event: &DomainEvent,
            _uow: &Box<dyn UnitOfWork<'_> + '_>,
            _ctx: &HandlerContext,
        ) -> Result<(), ApplicationError> {
            Ok(())
        }
    }

    #[test]
    fn test_command_handler_lookup() {
        let mut registry = HandlerRegistry::new();
        assert!(registry.command_handler::<AddBookmark>().is_none());

        registry
            .register_command::<AddBookmark, _>(AddBookmarkCommandHandler::new())
            .unwrap();
        assert!(registry.command_handler::<AddBookmark>().is_some());
    }

    #[test]
    fn test_second_command_handler_is_rejected() {
        let mut registry = HandlerRegistry::new();
        registry
            .register_command::<AddBookmark, _>(AddBookmarkCommandHandler::new())
            .unwrap();

        let result = registry.register_command::<AddBookmark, _>(AddBookmarkCommandHandler::new());
        match result.unwrap_err() {
            ApplicationError::App(AppError::CommandHandlerAlreadyRegistered(name)) => {
                assert!(name.ends_with("AddBookmark"))
            }
            e => panic!("Expected CommandHandlerAlreadyRegistered error, got: {:?}", e),
        }
    }

    #[test]
    fn test_second_query_handler_is_rejected() {
        let mut registry = HandlerRegistry::new();
        registry
            .register_query::<GetService, _>(GetServiceHandler::new())
            .unwrap();
        assert!(registry.query_handler::<GetService>().is_some());
        assert!(
            registry
                .register_query::<GetService, _>(GetServiceHandler::new())
                .is_err()
        );
    }

    #[test]
    fn test_event_handlers_keep_subscription_order() {
        let mut registry = HandlerRegistry::new();
        assert!(registry.event_handlers(EventKind::BookmarkAdded).is_empty());

        registry.subscribe(EventKind::BookmarkAdded, NotifyBookmarkAddedHandler::new());
        registry.subscribe(EventKind::BookmarkAdded, Noop("second"));
        registry.subscribe(EventKind::DuplicateBookmarkIgnored, Noop("other"));

        let names: Vec<&str> = registry
            .event_handlers(EventKind::BookmarkAdded)
            .iter()
            .map(|h| h.name())
            .collect();
        assert_eq!(names, vec!["notify_bookmark_added", "second"]);
        assert_eq!(
            registry
                .event_handlers(EventKind::DuplicateBookmarkIgnored)
                .len(),
            1
        );
    }
}
