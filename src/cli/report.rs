//! Structured error payloads for the calling process.
//!
//! Failures are reported as `{"error": "...", "matches": []}` so a caller can
//! tell them apart from a successful empty result (`[]`) by the presence of the
//! `error` field.

/// Usage line reported when the command line cannot be parsed
pub const USAGE: &str = "Usage: memo-match match <QUERY>";

/// Render an error payload with an empty match list
#[must_use]
pub fn error_payload(message: &str) -> String {
    serde_json::json!({
        "error": message,
        "matches": [],
    })
    .to_string()
}

/// Payload for a failure while processing a command
#[must_use]
pub fn fault_payload(error: &anyhow::Error) -> String {
    error_payload(&format!("Error processing query: {error:#}"))
}
