/// Request contract — what a transport hands the generator and gets back.
///
/// Transports (the HTTP server, the preview shell) pass the raw JSON body
/// through `process` and only decide how to frame the outcome.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::core::pipeline::{GenerateError, NarrativeGenerator};
use crate::core::seed::trim_prompt;
use crate::schema::mode::Mode;
use crate::schema::narrative::{GenerationInput, GenerationResult};

pub const BLANK_PROMPT_MESSAGE: &str = "Masukkan konteks atau tujuan terlebih dahulu.";
pub const INTERNAL_ERROR_MESSAGE: &str =
    "Terjadi kesalahan saat menghasilkan rekomendasi. Coba beberapa saat lagi.";

/// Problems with the request content. Display text is shown to end users.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("{}", BLANK_PROMPT_MESSAGE)]
    BlankPrompt,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Request(#[from] RequestError),
    /// The body is not JSON. Answered like any other internal failure.
    #[error("malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("generation failed: {0}")]
    Generate(#[from] GenerateError),
}

impl ApiError {
    /// True when the caller sent something unusable; retrying won't help.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Request(_))
    }

    /// The message safe to show an end user. Internal failures never leak
    /// their cause.
    pub fn user_message(&self) -> String {
        match self {
            Self::Request(err) => err.to_string(),
            Self::MalformedBody(_) | Self::Generate(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

/// A generation request as it arrives over the wire.
///
/// Fields stay untyped so that a wrong type is reported the same way as a
/// missing value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Option<Value>,
    #[serde(default)]
    pub mode: Option<Value>,
}

impl GenerateRequest {
    /// Parse a JSON body. Any well-formed document that is not an object
    /// (including `null`) is read as an empty request.
    pub fn from_json(body: &[u8]) -> Result<GenerateRequest, serde_json::Error> {
        let value: Value = serde_json::from_slice(body)?;
        match value {
            Value::Object(_) => serde_json::from_value(value),
            _ => Ok(GenerateRequest::default()),
        }
    }

    /// Validate into generator input.
    ///
    /// The prompt must be a string with non-whitespace content. The mode
    /// falls back to the default for anything that is not a known token.
    pub fn into_input(self) -> Result<GenerationInput, RequestError> {
        let prompt = match self.prompt {
            Some(Value::String(prompt)) if !trim_prompt(&prompt).is_empty() => prompt,
            _ => return Err(RequestError::BlankPrompt),
        };
        let mode = self
            .mode
            .as_ref()
            .and_then(Value::as_str)
            .map(Mode::from_token_or_default)
            .unwrap_or_default();
        Ok(GenerationInput { prompt, mode })
    }
}

/// Response envelope: `{"data": ...}` on success, `{"error": "..."}` otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerateResponse {
    Data { data: GenerationResult },
    Error { error: String },
}

impl GenerateResponse {
    pub fn from_outcome(outcome: &Result<GenerationResult, ApiError>) -> Self {
        match outcome {
            Ok(result) => Self::Data {
                data: result.clone(),
            },
            Err(err) => Self::Error {
                error: err.user_message(),
            },
        }
    }
}

/// Parse, validate, and generate in one step.
pub fn process(
    generator: &NarrativeGenerator,
    body: &[u8],
) -> Result<GenerationResult, ApiError> {
    let input = GenerateRequest::from_json(body)?.into_input()?;
    Ok(generator.generate(&input)?)
}
