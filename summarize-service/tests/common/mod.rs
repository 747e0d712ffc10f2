#![allow(dead_code)]

use async_trait::async_trait;
use axum::{body::Body, http::Response};
use http_body_util::BodyExt;
use secrecy::Secret;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use summarize_service::config::{Config, GeminiSettings, LogFormat};
use summarize_service::error::UpstreamError;
use summarize_service::services::SummaryProvider;
use summarize_service::startup::Application;
use summarize_service::{build_router, AppState};

pub const TEST_API_KEY: &str = "test-api-key";

/// Canned provider that records how often it was called.
pub struct StubProvider {
    reply: Result<String, fn() -> UpstreamError>,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn replying(summary: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(summary.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(make_err: fn() -> UpstreamError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(make_err),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SummaryProvider for StubProvider {
    async fn summarize(&self, _text: &str) -> Result<String, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(summary) => Ok(summary.clone()),
            Err(make_err) => Err(make_err()),
        }
    }
}

pub fn router_with(provider: Arc<StubProvider>) -> axum::Router {
    build_router(AppState::new(provider))
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn assert_cors_headers<B>(response: &Response<B>) {
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "POST, OPTIONS");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
}

pub fn test_config(gemini_base_url: &str) -> Config {
    Config {
        port: 0,
        log_level: "error".to_string(),
        log_format: LogFormat::Pretty,
        gemini: GeminiSettings {
            api_key: Secret::new(TEST_API_KEY.to_string()),
            base_url: gemini_base_url.to_string(),
        },
    }
}

/// Spawn the full application against the given upstream and return its base URL.
pub async fn spawn_app(gemini_base_url: &str) -> String {
    let app = Application::build(test_config(gemini_base_url))
        .await
        .expect("Failed to build application");
    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    format!("http://127.0.0.1:{}", port)
}
