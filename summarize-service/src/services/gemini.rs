//! Gemini `generateContent` client.
//!
//! Sends a single prompt per call and returns the text of the first part of
//! the first candidate.

use super::SummaryProvider;
use crate::config::GeminiSettings;
use crate::error::UpstreamError;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize};

/// Model used for every summary.
pub const GEMINI_MODEL: &str = "gemini-2.0-flash";

const PROMPT_PREFIX: &str = "Summarize the following text in 200 words:\n\n";

pub fn build_prompt(text: &str) -> String {
    format!("{PROMPT_PREFIX}{text}")
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Secret<String>,
    base_url: String,
}

impl GeminiClient {
    /// No request timeout is set; calls run until reqwest's transport gives up.
    pub fn new(settings: &GeminiSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            api_key: settings.api_key.clone(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, GEMINI_MODEL)
    }

    pub async fn generate(&self, text: &str) -> Result<String, UpstreamError> {
        let prompt = build_prompt(text);
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        tracing::debug!(
            model = GEMINI_MODEL,
            text_len = text.len(),
            "Sending request to Gemini API"
        );

        // The key travels as a query parameter; strip the URL from transport
        // errors so it never reaches the logs.
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.expose_secret().as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| UpstreamError::Network(e.without_url()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::Network(e.without_url()))?;
        let parsed: GenerateContentResponse =
            serde_json::from_slice(&bytes).map_err(UpstreamError::Decode)?;

        parsed.first_text().ok_or(UpstreamError::NoSummary)
    }
}

#[async_trait]
impl SummaryProvider for GeminiClient {
    async fn summarize(&self, text: &str) -> Result<String, UpstreamError> {
        self.generate(text).await
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, deserialize_with = "null_as_default")]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, deserialize_with = "null_as_default")]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

/// Read an explicit `null` as the empty value, the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl GenerateContentResponse {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()
            .map(|part| part.text)
    }
}
