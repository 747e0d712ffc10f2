use serde::{de::Error as _, Deserialize, Serialize};
use validator::Validate;

use crate::error::ApiError;

/// Body posted by the browser extension.
#[derive(Debug, Deserialize, Validate)]
pub struct SummarizeRequest {
    #[serde(default)]
    #[validate(
        required(message = "Text field is required"),
        length(min = 1, message = "Text field is required")
    )]
    pub text: Option<String>,
}

impl SummarizeRequest {
    /// Decode a raw request body. Only a JSON object is accepted; the derived
    /// `Deserialize` would otherwise take `["..."]` as a positional struct.
    pub fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        let value: serde_json::Value =
            serde_json::from_slice(body).map_err(ApiError::InvalidBody)?;
        if !value.is_object() {
            return Err(ApiError::InvalidBody(serde_json::Error::custom(
                "request body must be a JSON object",
            )));
        }
        serde_json::from_value(value).map_err(ApiError::InvalidBody)
    }

    /// Consume the request, returning the text once it has passed validation.
    pub fn into_text(self) -> Result<String, ApiError> {
        self.validate().map_err(|_| ApiError::MissingText)?;
        self.text.ok_or(ApiError::MissingText)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummarizeResponse {
    pub summary: String,
}
