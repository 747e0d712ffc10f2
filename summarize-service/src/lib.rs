//! summarize-service: relays text from the browser extension to Gemini and
//! returns the generated summary.
pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod services;
pub mod startup;

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::middleware::{cors_headers_middleware, request_id_middleware, RequestId};
use crate::services::SummaryProvider;

/// Shared, read-only request state.
#[derive(Clone)]
pub struct AppState {
    pub summarizer: Arc<dyn SummaryProvider>,
}

impl AppState {
    pub fn new(summarizer: Arc<dyn SummaryProvider>) -> Self {
        Self { summarizer }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/summarize",
            post(handlers::summarize::summarize)
                .options(handlers::summarize::preflight)
                .fallback(handlers::summarize::method_not_allowed)
                // Whole-page text can exceed axum's 2 MiB default.
                .layer(DefaultBodyLimit::disable()),
        )
        .with_state(state)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .extensions()
                    .get::<RequestId>()
                    .and_then(|id| id.0.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(cors_headers_middleware))
}
