// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::gemini::GeminiClient;
use crate::services::model_client::ModelClient;

pub type SharedState = Arc<AppState>;

/// Outcome of building the model adapter at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelStatus {
    Ready { model: String },
    Unavailable { reason: String },
}

pub struct AppState {
    pub model: Option<Arc<dyn ModelClient>>,
    pub model_status: ModelStatus,
}

impl AppState {
    pub fn with_model(model: Arc<dyn ModelClient>) -> Self {
        let model_status = ModelStatus::Ready {
            model: model.model_name().to_string(),
        };
        Self {
            model: Some(model),
            model_status,
        }
    }

    pub fn without_model(reason: impl Into<String>) -> Self {
        Self {
            model: None,
            model_status: ModelStatus::Unavailable {
                reason: reason.into(),
            },
        }
    }

    /// Builds the Gemini adapter; failures leave the service up but degraded.
    pub fn from_config(config: &Config) -> Self {
        let Some(gemini) = config.gemini() else {
            tracing::warn!("GOOGLE_API_KEY is not set; API endpoints will report the model as not initialized");
            return Self::without_model("GOOGLE_API_KEY is not set");
        };

        match GeminiClient::new(gemini) {
            Ok(client) => {
                tracing::info!(model = %config.model, "Initialized Gemini client");
                Self::with_model(Arc::new(client))
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to initialize Gemini client");
                Self::without_model(e.to_string())
            }
        }
    }

    pub fn is_model_ready(&self) -> bool {
        self.model.is_some()
    }
}
