use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Failure of a call to an external provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The provider answered with a non-success status.
    #[error("Provider returned {status}: {message}")]
    Api {
        status: StatusCode,
        /// Machine-readable reason, e.g. `keyInvalid` or `quotaExceeded`.
        reason: Option<String>,
        message: String,
    },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Failed to decode provider response: {0}")]
    Decode(String),

    #[error("Provider returned no content")]
    EmptyResponse,
}

impl ProviderError {
    /// Build an `Api` error from a non-success status and its raw body.
    ///
    /// Understands the Google style `{"error": {"errors": [{"reason": ..}], "message": ..}}`
    /// and the OpenAI style `{"error": {"type"|"code": .., "message": ..}}` envelopes.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let envelope = serde_json::from_str::<ErrorEnvelope>(body).ok();

        let reason = envelope.as_ref().and_then(|e| {
            e.error
                .errors
                .first()
                .and_then(|detail| detail.reason.clone())
                .or_else(|| e.error.code.as_ref().and_then(code_as_reason))
                .or_else(|| e.error.kind.clone())
        });

        let message = envelope
            .and_then(|e| e.error.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });

        ProviderError::Api {
            status,
            reason,
            message,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            ProviderError::Api { reason, .. } => reason.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ProviderError::Decode(error.to_string())
        } else {
            ProviderError::Transport(error.to_string())
        }
    }
}

fn code_as_reason(code: &serde_json::Value) -> Option<String> {
    // Google puts the numeric HTTP status in `code`; only textual codes are reasons.
    code.as_str().map(str::to_string)
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorDetail>,
    #[serde(default)]
    code: Option<serde_json::Value>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    reason: Option<String>,
}
