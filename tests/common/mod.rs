#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use legal_advisor::routes::create_router;
use legal_advisor::services::model_client::{ModelClient, ModelError};
use legal_advisor::state::AppState;
use tower::util::ServiceExt;

/// Records every prompt and answers with a canned reply or error.
pub struct MockModel {
    pub prompts: Mutex<Vec<String>>,
    outcome: Result<String, String>,
}

impl MockModel {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            prompts: Mutex::new(Vec::new()),
            outcome: Ok(reply.to_string()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            prompts: Mutex::new(Vec::new()),
            outcome: Err(message.to_string()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelClient for MockModel {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.outcome {
            Ok(reply) => Ok(reply.clone()),
            Err(message) => Err(ModelError::Network(message.clone())),
        }
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

pub fn public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}

pub fn app_with(model: Arc<MockModel>) -> Router {
    let state = Arc::new(AppState::with_model(model));
    create_router(&public_dir()).with_state(state)
}

pub fn app_without_model() -> Router {
    let state = Arc::new(AppState::without_model("GOOGLE_API_KEY is not set"));
    create_router(&public_dir()).with_state(state)
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, json_body(response).await)
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
