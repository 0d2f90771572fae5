//! Serde model of the form endpoint's error payload.
//!
//! Non-success replies may carry `{"errors": [{"message": "..."}, ...]}`.
//! Anything else (HTML error pages, truncated bodies, a JSON object without
//! an `errors` field) falls back to the generic failure message upstream.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ErrorPayload {
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Deserialize)]
pub struct FieldError {
    pub message: String,
}

/// Comma-joined message list, or `None` when the body carries no parseable
/// `errors` field.
pub fn error_text(body: &str) -> Option<String> {
    let payload: ErrorPayload = serde_json::from_str(body).ok()?;
    Some(
        payload
            .errors
            .iter()
            .map(|error| error.message.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    )
}
