use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use std::{io::Error, net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use barky_app::{
    cqrs::{commands::AddBookmark, queries::GetService},
    message_bus::MessageBus,
};
use barky_core::{AppError, ApplicationError, Result};
use barky_domain::models::Service;

#[derive(Clone)]
pub struct AppState {
    pub bus: Arc<MessageBus>,
}

impl AppState {
    pub fn new(bus: Arc<MessageBus>) -> AppState {
        AppState { bus }
    }
}

pub struct WebRouter {}

impl WebRouter {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/bookmarks", post(add_bookmark))
            .route("/services/{sku}", get(get_service))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(state: AppState, port: u16) -> Result<(), ApplicationError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(infra_error)?;
        Self::serve_with_listener(state, listener).await
    }

    /// Serves on an already bound listener, e.g. port 0 in tests.
    pub async fn serve_with_listener(
        state: AppState,
        listener: TcpListener,
    ) -> Result<(), ApplicationError> {
        let addr = listener.local_addr().map_err(infra_error)?;
        tracing::info!("HTTP Server started, listening on http://{}", addr);

        axum::serve(listener, Self::router(state))
            .await
            .map_err(infra_error)?;

        Ok(())
    }
}

async fn add_bookmark(
    State(state): State<AppState>,
    payload: Result<Json<AddBookmark>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(command) = payload?;
    state.bus.handle(command).await?;
    Ok(StatusCode::CREATED)
}

async fn get_service(
    State(state): State<AppState>,
    Path(sku): Path<String>,
) -> Result<Json<Service>, ApiError> {
    match state.bus.query(GetService { sku: sku.clone() }).await? {
        Some(service) => Ok(Json(service)),
        None => Err(ApiError::NotFound(sku)),
    }
}

/// Maps application failures onto HTTP responses.
pub enum ApiError {
    NotFound(String),
    /// Body missing, not JSON, or not shaped like the command.
    InvalidBody(JsonRejection),
    Application(ApplicationError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection)
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        ApiError::Application(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(sku) => (StatusCode::NOT_FOUND, format!("service '{sku}' not found")),
            ApiError::InvalidBody(rejection) => (rejection.status(), rejection.body_text()),
            ApiError::Application(err) => {
                let status = if err.is_validation() {
                    StatusCode::UNPROCESSABLE_ENTITY
                } else if let ApplicationError::App(AppError::BookmarkIdTaken { .. }) = &err {
                    StatusCode::CONFLICT
                } else {
                    tracing::error!(error = %err, "Request failed");
                    StatusCode::INTERNAL_SERVER_ERROR
                };
                (status, err.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

fn infra_error(e: Error) -> ApplicationError {
    let err = format!("{:#?}", e);
    ApplicationError::Infrastructure(err)
}
