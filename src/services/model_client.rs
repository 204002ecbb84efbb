// src/services/model_client.rs
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model not configured: {0}")]
    NotConfigured(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Model API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to parse model response: {0}")]
    Decode(String),

    #[error("Model returned no text: {0}")]
    EmptyResponse(String),
}

/// Text generation backend the API handlers talk to.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;

    /// Identifier reported by the health endpoint.
    fn model_name(&self) -> &str;
}
