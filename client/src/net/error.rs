//! Typed failures for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Every API helper returns `Result<_, ApiError>`. Pages turn errors into a
//! toast or inline text with [`failure_message`]; nothing is retried.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Failure of a single API request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, bad URL).
    #[error("network error: {0}")]
    Network(String),
    /// The server rejected the bearer token. The session has been cleared.
    #[error("session expired")]
    Unauthorized,
    /// Any other non-2xx status, with the server's explanation if it sent one.
    #[error("request failed: {status}")]
    Status { status: u16, message: Option<String> },
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Browser APIs are not available (server-side render).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error from a non-2xx response body.
    pub fn from_status(status: u16, body: &str) -> Self {
        ApiError::Status { status, message: server_message(body) }
    }

    /// Server-provided explanation, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized | ApiError::Status { status: 401, .. })
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Extract `error` and `message` from a JSON error body, joined by a space.
pub fn server_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let joined = [parsed.error, parsed.message]
        .into_iter()
        .flatten()
        .map(|part| part.trim().to_owned())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    (!joined.is_empty()).then_some(joined)
}

/// User-facing text: `prefix` followed by the server's explanation when present.
pub fn failure_message(prefix: &str, err: &ApiError) -> String {
    match err.detail() {
        Some(detail) => format!("{prefix} {detail}"),
        None => prefix.to_owned(),
    }
}
