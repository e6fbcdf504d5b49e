use std::sync::Arc;

use barky_app::{
    bootstrap::{BootstrapOptions, bootstrap},
    config::Config,
    message_bus::MessageBus,
    notifications::TracingNotifications,
};
use barky_core::{ApplicationError, Result};
use barky_db::{establish_connection_pool, uow::PostgresUnitOfWorkProvider};
use barky_server::{AppState, WebRouter, logs::setup_logging, publish::tracing_publisher};

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), ApplicationError> {
    let _log_guard = setup_logging();
    let config = Arc::new(Config::from_env());
    let bus = setup_app(config.clone()).await?;
    let state = AppState::new(Arc::new(bus));

    WebRouter::serve(state, config.http_port).await
}

async fn setup_app(config: Arc<Config>) -> Result<MessageBus, ApplicationError> {
    let db_pool = establish_connection_pool().await?;
    let uow_provider = Arc::new(PostgresUnitOfWorkProvider::new(db_pool));

    bootstrap(BootstrapOptions {
        start_store: true,
        uow_provider,
        notifications: Arc::new(TracingNotifications::new()),
        publish: tracing_publisher(),
        config,
    })
    .await
}
