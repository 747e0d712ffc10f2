//! `/summarize` handlers.

use axum::{body::Bytes, extract::State, http::StatusCode, Json};

use crate::{
    dtos::{SummarizeRequest, SummarizeResponse},
    error::ApiError,
    AppState,
};

/// Summarize the posted text.
///
/// The body is decoded as JSON whatever its declared content type.
pub async fn summarize(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let text = SummarizeRequest::from_body(&body)?.into_text()?;

    let summary = state.summarizer.summarize(&text).await?;

    tracing::info!(
        text_len = text.len(),
        summary_len = summary.len(),
        "Summary generated"
    );

    Ok(Json(SummarizeResponse { summary }))
}

/// CORS preflight. Headers are added by the CORS middleware.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
