use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("a cancellation token must be provided")]
    MissingContext,

    #[error("request cancelled")]
    Cancelled,

    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("malformed success payload: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("authentication failed: {0}")]
    AuthenticationFailed(ApiErrorBody),

    #[error("{0}")]
    Api(ApiErrorBody),
}

impl ApiError {
    /// True for errors reported by the service itself (any non-2xx status),
    /// as opposed to transport, decoding or caller-contract failures.
    pub fn is_api_error(&self) -> bool {
        matches!(
            self,
            ApiError::Api(_) | ApiError::AuthenticationFailed(_)
        )
    }

    pub fn status_code(&self) -> Option<u16> {
        self.api_body().map(|body| body.status)
    }

    pub fn api_body(&self) -> Option<&ApiErrorBody> {
        match self {
            ApiError::Api(body) | ApiError::AuthenticationFailed(body) => Some(body),
            _ => None,
        }
    }
}

/// Error payload decoded from a non-2xx response.
///
/// The service reports errors in several shapes depending on the API
/// generation: an object (sometimes nesting the text under `error.message`),
/// a bare string, or an array of strings. Parsing is best-effort; the status
/// code is preserved even when the body is empty or not JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiErrorBody {
    pub status: u16,
    pub message: String,
    pub detail: Map<String, Value>,
}

impl ApiErrorBody {
    pub fn parse(status: u16, body: &[u8]) -> Self {
        let (message, detail) = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => (extract_message(&map), map),
            Ok(Value::String(message)) => (message, Map::new()),
            Ok(Value::Array(items)) => (
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .next()
                    .unwrap_or_default()
                    .to_string(),
                Map::new(),
            ),
            _ => (String::new(), Map::new()),
        };

        ApiErrorBody {
            status,
            message,
            detail,
        }
    }
}

fn extract_message(map: &Map<String, Value>) -> String {
    if let Some(nested) = map.get("error").and_then(Value::as_object) {
        if let Some(message) = nested.get("message").and_then(Value::as_str) {
            return message.to_string();
        }
    }
    map.get("message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "the service returned HTTP status {}", self.status)
        } else {
            write!(f, "{} (HTTP status {})", self.message, self.status)
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
