// SPDX-License-Identifier: GPL-3.0-only

//! Client for the backend name-validation endpoint.
//!
//! The backend exposes a single call: `POST {base}/api/check` with a JSON
//! body `{"name": …}`, answered by `{"valid": …}`. The response body alone
//! decides the verdict — the HTTP status is not consulted. Transport
//! failures and non-JSON bodies are reported as errors so the screen can
//! distinguish a rejection from a transient fault.

use serde::Serialize;
use std::fmt;

/// Path of the validation endpoint, relative to the configured base URL.
const CHECK_PATH: &str = "/api/check";

/// Request payload for the check endpoint.
#[derive(Debug, Serialize)]
struct CheckRequest<'a> {
    name: &'a str,
}

/// Backend judgment of a candidate name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The name is acceptable; the wizard may advance.
    Valid,
    /// The name was refused.
    Rejected,
}

// ============================================================================
// Error Handling Types
// ============================================================================

/// Error type for validation requests.
#[derive(Debug)]
pub enum ValidateError {
    /// The HTTP request itself failed (connection, DNS, I/O).
    Request {
        /// The underlying transport error.
        source: reqwest::Error,
        /// Endpoint URL that was contacted.
        url: String,
    },

    /// The response body could not be read as JSON.
    MalformedResponse {
        /// The underlying decode error.
        source: reqwest::Error,
        /// Endpoint URL that was contacted.
        url: String,
    },
}

impl ValidateError {
    /// Creates a transport error with endpoint context.
    pub fn request(source: reqwest::Error, url: impl Into<String>) -> Self {
        Self::Request {
            source,
            url: url.into(),
        }
    }

    /// Creates a malformed-response error with endpoint context.
    pub fn malformed_response(source: reqwest::Error, url: impl Into<String>) -> Self {
        Self::MalformedResponse {
            source,
            url: url.into(),
        }
    }
}

impl fmt::Display for ValidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidateError::Request { source, url } => {
                write!(f, "validation request to '{}' failed: {}", url, source)
            }
            ValidateError::MalformedResponse { source, url } => {
                write!(
                    f,
                    "validation response from '{}' was not JSON: {}",
                    url, source
                )
            }
        }
    }
}

impl std::error::Error for ValidateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ValidateError::Request { source, .. } => Some(source),
            ValidateError::MalformedResponse { source, .. } => Some(source),
        }
    }
}

// ============================================================================
// Client
// ============================================================================

/// Client for the name-validation endpoint.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct NameValidator {
    client: reqwest::Client,
    base_url: String,
}

impl NameValidator {
    /// Creates a validator for the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Full URL of the check endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), CHECK_PATH)
    }

    /// Submits a candidate name and returns the backend verdict.
    ///
    /// The name is sent as-is — empty strings included, no trimming. A JSON
    /// body with top-level `"valid": true` is `Valid`; any other JSON shape
    /// is `Rejected`; transport failures and non-JSON bodies are errors.
    pub async fn check(&self, name: &str) -> Result<Verdict, ValidateError> {
        let url = self.endpoint();

        let response = self
            .client
            .post(&url)
            .json(&CheckRequest { name })
            .send()
            .await
            .map_err(|e| ValidateError::request(e, &url))?;

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ValidateError::malformed_response(e, &url))?;

        Ok(verdict_from_body(&body))
    }
}

/// Interprets a response body as a verdict.
///
/// Exactly `"valid": true` at the top level is a `Valid` verdict; every
/// other shape — `false`, missing, non-boolean, wrong nesting — is
/// `Rejected`.
pub fn verdict_from_body(body: &serde_json::Value) -> Verdict {
    match body.get("valid").and_then(serde_json::Value::as_bool) {
        Some(true) => Verdict::Valid,
        _ => Verdict::Rejected,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Test: Only a true boolean `valid` field is a Valid verdict
    #[test]
    fn test_verdict_requires_boolean_true() {
        assert_eq!(verdict_from_body(&json!({ "valid": true })), Verdict::Valid);

        assert_eq!(
            verdict_from_body(&json!({ "valid": false })),
            Verdict::Rejected
        );
        assert_eq!(
            verdict_from_body(&json!({ "valid": "true" })),
            Verdict::Rejected
        );
        assert_eq!(verdict_from_body(&json!({ "valid": 1 })), Verdict::Rejected);
        assert_eq!(verdict_from_body(&json!({})), Verdict::Rejected);
        assert_eq!(verdict_from_body(&json!(null)), Verdict::Rejected);
        assert_eq!(verdict_from_body(&json!([true])), Verdict::Rejected);
        assert_eq!(
            verdict_from_body(&json!({ "data": { "valid": true } })),
            Verdict::Rejected
        );
    }

    /// Test: Extra fields do not affect the verdict
    #[test]
    fn test_verdict_ignores_extra_fields() {
        let body = json!({ "valid": true, "reason": "ok", "score": 0.9 });
        assert_eq!(verdict_from_body(&body), Verdict::Valid);
    }

    /// Test: Endpoint URL joins the base URL and the check path
    #[test]
    fn test_endpoint_joins_base_url() {
        let validator = NameValidator::new("http://localhost:8080");
        assert_eq!(validator.endpoint(), "http://localhost:8080/api/check");

        let validator = NameValidator::new("http://localhost:8080/");
        assert_eq!(validator.endpoint(), "http://localhost:8080/api/check");
    }

    /// Test: Request payload serializes to the documented shape
    #[test]
    fn test_request_payload_shape() {
        let payload = serde_json::to_value(CheckRequest { name: "Omar" }).unwrap();
        assert_eq!(payload, json!({ "name": "Omar" }));

        let payload = serde_json::to_value(CheckRequest { name: "" }).unwrap();
        assert_eq!(payload, json!({ "name": "" }));
    }
}
