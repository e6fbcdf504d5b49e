use std::{any::type_name, collections::VecDeque, sync::Arc};

use barky_core::{AppError, ApplicationError, Result};
use barky_domain::events::DomainEvent;

use crate::{
    context::HandlerContext,
    cqrs::{Command, CommandHandler, EventHandler, Query},
    handler_registry::HandlerRegistry,
    uow::UnitOfWorkProvider,
};

/// MessageBus (Mediator)
/// This struct is the central entry point for all application logic.
/// It does not contain any business logic itself.
/// Its primary roles are:
/// 1. Managing Unit of Work (transaction) lifecycles.
/// 2. Dispatching Commands and Queries to their registered handler.
/// 3. Fanning out the events collected from committed Units of Work.
pub struct MessageBus {
    registry: HandlerRegistry,
    uow_provider: Arc<dyn UnitOfWorkProvider>,
    context: HandlerContext,
}

impl MessageBus {
    pub fn new(
        registry: HandlerRegistry,
        uow_provider: Arc<dyn UnitOfWorkProvider>,
        context: HandlerContext,
    ) -> Self {
        Self {
            registry,
            uow_provider,
            context,
        }
    }

    /// Executes a command.
    /// A command is an operation that modifies the system state.
    /// - It validates the command before touching any state.
    /// - It begins a Unit of Work and passes it to the registered handler.
    /// - If the handler succeeds, it collects the events and commits.
    /// - If the handler fails, it rolls back and returns the error.
    /// - Collected events are fully processed before this method returns.
    pub async fn handle<C: Command>(&self, cmd: C) -> Result<()> {
        cmd.validate()?;

        let handler = self
            .registry
            .command_handler::<C>()
            .ok_or_else(|| AppError::NoCommandHandler(type_name::<C>()))?;

        tracing::debug!(command = type_name::<C>(), "Dispatching command");
        let events = self.execute(cmd, handler).await?;
        self.process_events(events).await;

        Ok(())
    }

    /// Publishes an event produced outside of a command to its handlers.
    pub async fn handle_event(&self, event: DomainEvent) {
        self.process_events(vec![event]).await;
    }

    /// Executes a query.
    /// A query is an operation that reads system state and returns data.
    /// It should *never* modify the state.
    /// This method ensures the transaction is *always* rolled back.
    pub async fn query<Q: Query>(&self, query: Q) -> Result<Q::Output> {
        let handler = self
            .registry
            .query_handler::<Q>()
            .ok_or_else(|| AppError::NoQueryHandler(type_name::<Q>()))?;

        let uow = self.uow_provider.begin().await?;
        let result = handler.handle(query, &uow, &self.context).await;

        // Always rollback a query, as it should never write data.
        uow.rollback().await?;

        result
    }

    async fn execute<C: Command>(
        &self,
        cmd: C,
        handler: Arc<dyn CommandHandler<C>>,
    ) -> Result<Vec<DomainEvent>> {
        let uow = self.uow_provider.begin().await?;

        match handler.handle(cmd, &uow, &self.context).await {
            Ok(()) => {
                let events = uow.collect_new_events();
                uow.commit().await.inspect_err(|e| {
                    tracing::error!(command = type_name::<C>(), error = %e, "Commit failed");
                })?;
                tracing::info!(
                    command = type_name::<C>(),
                    events = events.len(),
                    "Command committed"
                );
                Ok(events)
            }
            Err(e) => {
                tracing::warn!(command = type_name::<C>(), error = %e, "Command failed, rolling back");
                if let Err(rollback_err) = uow.rollback().await {
                    tracing::error!(error = %rollback_err, "Rollback failed");
                }
                Err(e)
            }
        }
    }

    /// Drains the event queue breadth-first. A failing handler is rolled back
    /// and logged; the remaining handlers still run.
    async fn process_events(&self, events: Vec<DomainEvent>) {
        let mut queue: VecDeque<DomainEvent> = events.into();

        while let Some(event) = queue.pop_front() {
            for handler in self.registry.event_handlers(event.kind()) {
                match self.dispatch_event(handler.as_ref(), &event).await {
                    Ok(new_events) => queue.extend(new_events),
                    Err(e) => tracing::error!(
                        handler = handler.name(),
                        event = event.name(),
                        error = %e,
                        "Event handler failed"
                    ),
                }
            }
        }
    }

    async fn dispatch_event(
        &self,
        handler: &dyn EventHandler,
        event: &DomainEvent,
    ) -> Result<Vec<DomainEvent>, ApplicationError> {
        let uow = self.uow_provider.begin().await?;

        match handler.handle(event, &uow, &self.context).await {
            Ok(()) => {
                let events = uow.collect_new_events();
                uow.commit().await?;
                Ok(events)
            }
            Err(e) => {
                if let Err(rollback_err) = uow.rollback().await {
                    tracing::error!(error = %rollback_err, "Rollback failed");
                }
                Err(e)
            }
        }
    }
}
