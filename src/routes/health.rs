use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::state::{ModelStatus, SharedState};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_initialized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Always 200 while the process is up; a missing model shows as degraded.
pub async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    let (status, model, reason) = match &state.model_status {
        ModelStatus::Ready { model } => ("ok", Some(model.clone()), None),
        ModelStatus::Unavailable { reason } => ("degraded", None, Some(reason.clone())),
    };

    Json(HealthResponse {
        status: status.to_string(),
        model_initialized: state.is_model_ready(),
        model,
        reason,
    })
}
