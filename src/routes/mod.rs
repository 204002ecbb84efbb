// src/routes/mod.rs
pub mod chat;
pub mod draft;
pub mod health;

use std::path::Path;
use std::sync::Arc;

use crate::{
    error::AppError,
    services::{model_client::ModelClient, prompts::PromptError},
    state::SharedState,
};
use axum::{
    Router,
    routing::{get, get_service, post},
};
use chat::chat_handler;
use draft::draft_handler;
use health::health_handler;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub fn create_router(public_dir: &Path) -> Router<SharedState> {
    let api_routes = Router::new()
        .route("/get-response", post(chat_handler))
        .route("/draft-document", post(draft_handler));

    Router::new()
        .route("/", get_service(ServeFile::new(public_dir.join("index.html"))))
        .route(
            "/drafter",
            get_service(ServeFile::new(public_dir.join("drafter.html"))),
        )
        .route(
            "/navigator",
            get_service(ServeFile::new(public_dir.join("navigator.html"))),
        )
        .nest("/api", api_routes)
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new(public_dir.join("static")))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}

pub(crate) fn ready_model(state: &SharedState) -> Result<Arc<dyn ModelClient>, AppError> {
    state.model.clone().ok_or(AppError::ModelNotInitialized)
}

/// Runs one prompt through the model, logging failures before they become 500s.
pub(crate) async fn generate(
    model: &dyn ModelClient,
    prompt: Result<String, PromptError>,
) -> Result<String, AppError> {
    let prompt = prompt.map_err(|e| {
        tracing::error!(error = %e, "Failed to build prompt");
        AppError::from(e)
    })?;

    model.generate(&prompt).await.map_err(|e| {
        tracing::error!(error = %e, model = model.model_name(), "Model call failed");
        AppError::from(e)
    })
}
