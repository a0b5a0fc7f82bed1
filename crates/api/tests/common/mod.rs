#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use layoutsmith_api::config::{ServerConfig, StoreBackend};
use layoutsmith_api::router::build_app_router;
use layoutsmith_api::state::AppState;
use layoutsmith_db::store::MemoryLayoutStore;
use layoutsmith_llm::{LlmClient, LlmConfig, LlmError};
use tower::ServiceExt;

pub const TEST_MODEL: &str = "gemini-test";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
        database_url: None,
        llm: LlmConfig {
            api_key: Some("test-key".to_string()),
            model: TEST_MODEL.to_string(),
            base_url: "http://127.0.0.1:9".to_string(),
            timeout: Duration::from_secs(5),
        },
    }
}

// ---------------------------------------------------------------------------
// Scripted LLM
// ---------------------------------------------------------------------------

/// What a [`ScriptedLlm`] answers with.
#[derive(Debug, Clone)]
pub enum Script {
    Reply(String),
    ConfigMissing,
    Upstream { status: u16 },
}

/// An [`LlmClient`] that returns a fixed answer and records every call.
pub struct ScriptedLlm {
    script: Script,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedLlm {
    pub fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn reply(text: &str) -> Arc<Self> {
        Self::new(Script::Reply(text.to_string()))
    }

    /// `(model, prompt)` pairs in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for ScriptedLlm {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((model.to_string(), prompt.to_string()));
        match &self.script {
            Script::Reply(text) => Ok(text.clone()),
            Script::ConfigMissing => Err(LlmError::ConfigMissing("GEMINI_API_KEY")),
            Script::Upstream { status } => Err(LlmError::ApiError {
                status: *status,
                body: "upstream said no".to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build the full application router over an in-memory store with the given
/// LLM, using the same middleware stack as production.
pub fn build_test_app_with(llm: Arc<ScriptedLlm>) -> Router {
    let config = test_config();
    let state = AppState {
        store: Arc::new(MemoryLayoutStore::new()),
        llm,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Build the application with an LLM that is never expected to be called.
pub fn build_test_app() -> Router {
    build_test_app_with(ScriptedLlm::new(Script::ConfigMissing))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: &serde_json::Value,
) -> Response<Body> {
    send_raw(app, method, uri, serde_json::to_vec(body).unwrap()).await
}

pub async fn send_raw(app: Router, method: Method, uri: &str, body: Vec<u8>) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, &body).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PATCH, uri, &body).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a layout and return its id.
pub async fn create_layout(app: &Router, content: &str) -> i64 {
    let response = post_json(
        app.clone(),
        "/layouts",
        serde_json::json!({ "content": content }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
