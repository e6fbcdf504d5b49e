#[cfg(test)]
pub mod tests {
    use reqwest::Client;
    use std::sync::Arc;
    use tokio::net::TcpListener;

    use barky_app::{
        cqrs::commands::AddBookmark,
        test_utils::tests::{
            FakeNotifications, InMemoryUnitOfWorkProvider, RecordingPublisher, TestApp,
            bootstrap_test_app,
        },
    };
    use barky_core::{ApplicationError, Result};
    use barky_server::{AppState, WebRouter};

    /// Handles onto the fakes behind a running HTTP server.
    #[allow(dead_code)]
    pub struct WebTestApp {
        pub client: Client,
        pub base_url: String,
        pub uow_provider: InMemoryUnitOfWorkProvider,
        pub notifications: FakeNotifications,
        pub publisher: RecordingPublisher,
    }

    #[allow(dead_code)]
    pub async fn setup_web_app() -> Result<WebTestApp> {
        let TestApp {
            bus,
            uow_provider,
            notifications,
            publisher,
        } = bootstrap_test_app().await?;

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| ApplicationError::Infrastructure(e.to_string()))?;
        let addr = listener
            .local_addr()
            .map_err(|e| ApplicationError::Infrastructure(e.to_string()))?;

        let state = AppState::new(Arc::new(bus));
        tokio::spawn(WebRouter::serve_with_listener(state, listener));

        Ok(WebTestApp {
            client: Client::new(),
            base_url: format!("http://{addr}"),
            uow_provider,
            notifications,
            publisher,
        })
    }

    #[allow(dead_code)]
    pub fn add_bookmark_command(id: i64, name: &str, url: &str) -> AddBookmark {
        AddBookmark {
            id,
            name: name.to_string(),
            url: url.to_string(),
            category: None,
            created: "2024-05-01T10:00:00.000000".to_string(),
            edited: "2024-05-01T10:00:00.000000".to_string(),
        }
    }
}
