//! Summarization backends.
//!
//! Handlers depend on the [`SummaryProvider`] trait so the Gemini client can be
//! swapped for a stub in tests.

pub mod gemini;

pub use gemini::GeminiClient;

use crate::error::UpstreamError;
use async_trait::async_trait;

/// Produces a summary for a block of text.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String, UpstreamError>;
}
