#![allow(dead_code)]

//! Test infrastructure for ca-server API tests

use ca_gemini::{GeminiError, GeminiResult, TextGenerator};
use ca_server::{AppState, build_router};

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// One scripted answer from the fake model
pub enum Reply {
    Text(String),
    /// 429 whose message mentions the quota
    QuotaExhausted,
    /// 429 without quota wording
    RateLimited,
    Upstream(u16),
}

impl Reply {
    pub fn text(text: &str) -> Self {
        Reply::Text(text.to_string())
    }

    fn into_result(self) -> GeminiResult<String> {
        match self {
            Reply::Text(text) => Ok(text),
            Reply::QuotaExhausted => Err(GeminiError::from_status(
                429,
                "You exceeded your current quota, please check your plan and billing details."
                    .into(),
                None,
            )),
            Reply::RateLimited => Err(GeminiError::from_status(
                429,
                "Resource has been exhausted (e.g. check rate limits).".into(),
                None,
            )),
            Reply::Upstream(status) => Err(GeminiError::from_status(
                status,
                "Internal error encountered.".into(),
                None,
            )),
        }
    }
}

/// Generator that replays scripted replies and records prompts
#[derive(Default)]
pub struct FakeGenerator {
    replies: Mutex<VecDeque<Reply>>,
    prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn new(replies: Vec<Reply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> GeminiResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Reply::text(""))
            .into_result()
    }
}

/// Router backed by a fake generator
pub fn create_test_app(generator: Arc<FakeGenerator>) -> Router {
    build_router(AppState::new(generator))
}

/// POST a JSON body and return status plus parsed JSON response
pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, request).await
}

/// Send a request and parse the response body as JSON
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}
