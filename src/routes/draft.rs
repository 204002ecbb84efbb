use axum::{Json, extract::State, extract::rejection::JsonRejection};

use super::{generate, ready_model};
use crate::{
    error::AppError,
    message::{DEFAULT_COUNTRY, DraftRequest, DraftResponse, or_default, required},
    services::prompts::{DraftFields, build_draft_prompt},
    state::SharedState,
};

pub async fn draft_handler(
    State(state): State<SharedState>,
    payload: Result<Json<DraftRequest>, JsonRejection>,
) -> Result<Json<DraftResponse>, AppError> {
    let model = ready_model(&state)?;
    let Json(payload) = payload?;

    let (Some(doc_type), Some(details)) =
        (required(&payload.doc_type), required(&payload.details))
    else {
        tracing::debug!("draft request missing doc_type or details");
        return Err(AppError::BadRequest(
            "Document type or details missing".to_string(),
        ));
    };

    let fields = DraftFields {
        doc_type,
        country: or_default(&payload.country, DEFAULT_COUNTRY),
        details,
    };

    let draft = generate(&*model, build_draft_prompt(&fields)).await?;
    Ok(Json(DraftResponse { draft }))
}
