use axum::{Json, extract::State, extract::rejection::JsonRejection};

use super::{generate, ready_model};
use crate::{
    error::AppError,
    message::{
        ChatRequest, ChatResponse, DEFAULT_COUNTRY, DEFAULT_LANGUAGE, DEFAULT_LOCATION,
        or_default, required,
    },
    services::prompts::{ChatFields, build_chat_prompt},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let model = ready_model(&state)?;
    let Json(payload) = payload?;

    let Some(message) = required(&payload.message) else {
        tracing::debug!("chat request without a message");
        return Err(AppError::BadRequest("No message provided".to_string()));
    };

    let fields = ChatFields {
        message,
        country: or_default(&payload.country, DEFAULT_COUNTRY),
        language: or_default(&payload.language, DEFAULT_LANGUAGE),
        location: or_default(&payload.location, DEFAULT_LOCATION),
    };

    let reply = generate(&*model, build_chat_prompt(&fields)).await?;
    Ok(Json(ChatResponse { reply }))
}
