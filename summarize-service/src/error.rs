use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures talking to the Gemini API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("failed to make request to Gemini API: {0}")]
    Network(#[source] reqwest::Error),

    #[error("gemini API request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode Gemini response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("no summary found in Gemini response")]
    NoSummary,
}

impl UpstreamError {
    /// Short label used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Network(_) => "network",
            UpstreamError::Status { .. } => "status",
            UpstreamError::Decode(_) => "decode",
            UpstreamError::NoSummary => "no_summary",
        }
    }
}

/// Errors surfaced by the HTTP handlers.
///
/// Client errors carry a message that is safe to return verbatim. Upstream
/// errors are logged and replaced by a generic message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request body")]
    InvalidBody(#[source] serde_json::Error),

    #[error("Text field is required")]
    MissingText,

    #[error("Only POST method is allowed")]
    MethodNotAllowed,

    #[error("Failed to generate summary")]
    Upstream(#[from] UpstreamError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) | ApiError::MissingText => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::InvalidBody(err) => {
                tracing::debug!(error = %err, "Rejected malformed request body");
            }
            ApiError::Upstream(err) => {
                tracing::error!(error = %err, kind = err.kind(), "Error calling Gemini API");
            }
            ApiError::MissingText | ApiError::MethodNotAllowed => {}
        }

        let mut res = (self.status_code(), self.to_string()).into_response();
        let headers = res.headers_mut();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        headers.insert(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        );
        res
    }
}
