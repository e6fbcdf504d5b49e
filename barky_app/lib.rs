pub mod bootstrap;
pub mod command_handlers;
pub mod config;
pub mod context;
pub mod cqrs;
pub mod event_handlers;
pub mod handler_registry;
pub mod message_bus;
pub mod notifications;
pub mod queries_handlers;
pub mod repository;
pub mod uow;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
