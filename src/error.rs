//! Error types for streamscout
//!
//! This module provides error handling for the service, including:
//! - Domain-specific error variants (validation, upstream, subtitle)
//! - HTTP status code mapping for API integration
//! - Structured error responses with machine-readable error codes

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Result type alias for streamscout operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for streamscout
///
/// Each variant carries enough context for logging without exposing
/// upstream internals to API callers.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "vidsrc_to_base")
        key: Option<String>,
    },

    /// Request validation failed (empty or malformed media identifier)
    #[error("invalid id: {id:?}")]
    Validation {
        /// The offending identifier, verbatim
        id: String,
    },

    /// An upstream provider lookup failed (unreachable, non-2xx, or unparseable)
    #[error("provider {provider} failed: {reason}")]
    Upstream {
        /// Name of the provider that failed
        provider: String,
        /// What went wrong, for logs and the error body
        reason: String,
    },

    /// Subtitle retrieval or decompression failed.
    ///
    /// Deliberately opaque: the underlying cause is logged at the failure
    /// site but never carried in the error, so it cannot leak to callers.
    #[error("error fetching subtitle")]
    SubtitleFetch,

    /// Network error from the shared HTTP client
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// API server error
    #[error("API server error: {0}")]
    ApiServerError(String),
}

/// API error response format
///
/// This structure is returned by API endpoints when an error occurs.
/// It follows a standard format with machine-readable error codes,
/// human-readable messages, and optional contextual details.
///
/// # Example JSON Response
///
/// ```json
/// {
///   "error": {
///     "code": "invalid_id",
///     "message": "invalid id: \" \"",
///     "details": {
///       "id": " "
///     }
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// The error details
    pub error: ErrorDetail,
}

/// Detailed error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "invalid_id", "upstream_error")
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional context about the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Create a new API error with code and message
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                details: None,
            },
        }
    }

    /// Create an API error with additional details
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                details: Some(details),
            },
        }
    }
}

/// Convert errors to HTTP status codes for API responses
pub trait ToHttpStatus {
    /// Get the HTTP status code for this error
    fn status_code(&self) -> u16;

    /// Get the machine-readable error code
    fn error_code(&self) -> &str;
}

impl ToHttpStatus for Error {
    fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - invalid configuration supplied by the operator
            Error::Config { .. } => 400,

            // 404 Not Found - empty/malformed media identifier
            Error::Validation { .. } => 404,

            // 502 Bad Gateway - upstream provider failures
            Error::Upstream { .. } => 502,
            Error::Network(_) => 502,

            // 500 Internal Server Error - opaque subtitle failure and server-side issues
            Error::SubtitleFetch => 500,
            Error::Serialization(_) => 500,
            Error::Io(_) => 500,
            Error::ApiServerError(_) => 500,
        }
    }

    fn error_code(&self) -> &str {
        match self {
            Error::Config { .. } => "config_error",
            Error::Validation { .. } => "invalid_id",
            Error::Upstream { .. } => "upstream_error",
            Error::Network(_) => "network_error",
            Error::SubtitleFetch => "subtitle_error",
            Error::Serialization(_) => "serialization_error",
            Error::Io(_) => "io_error",
            Error::ApiServerError(_) => "api_server_error",
        }
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        let code = error.error_code().to_string();
        let message = error.to_string();

        // Add contextual details for specific error types
        let details = match &error {
            Error::Validation { id } => Some(serde_json::json!({
                "id": id,
            })),
            Error::Upstream { provider, .. } => Some(serde_json::json!({
                "provider": provider,
            })),
            Error::Config { key: Some(key), .. } => Some(serde_json::json!({
                "key": key,
            })),
            _ => None,
        };

        ApiError {
            error: ErrorDetail {
                code,
                message,
                details,
            },
        }
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    /// Returns (Error, expected_status_code, expected_error_code) for every
    /// reachable match arm in ToHttpStatus.
    fn all_error_variants() -> Vec<(Error, u16, &'static str)> {
        vec![
            (
                Error::Config {
                    message: "bad base url".into(),
                    key: Some("vidsrc_to_base".into()),
                },
                400,
                "config_error",
            ),
            (Error::Validation { id: " ".into() }, 404, "invalid_id"),
            (
                Error::Upstream {
                    provider: "vidsrc.to".into(),
                    reason: "unexpected status 503".into(),
                },
                502,
                "upstream_error",
            ),
            (Error::SubtitleFetch, 500, "subtitle_error"),
            (
                Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")),
                500,
                "io_error",
            ),
            (
                Error::ApiServerError("bind failed".into()),
                500,
                "api_server_error",
            ),
        ]
    }

    #[test]
    fn test_status_and_error_codes() {
        for (error, status, code) in all_error_variants() {
            assert_eq!(error.status_code(), status, "status for {error:?}");
            assert_eq!(error.error_code(), code, "code for {error:?}");
        }
    }

    #[test]
    fn test_validation_error_names_the_id() {
        let error = Error::Validation { id: "  ".into() };
        let api_error: ApiError = error.into();

        assert_eq!(api_error.error.code, "invalid_id");
        assert!(api_error.error.message.contains("invalid id"));

        let details = api_error.error.details.unwrap();
        assert_eq!(details["id"], "  ");
    }

    #[test]
    fn test_upstream_error_carries_provider_name() {
        let error = Error::Upstream {
            provider: "vidsrc.me".into(),
            reason: "connection refused".into(),
        };
        let api_error: ApiError = error.into();

        assert_eq!(api_error.error.code, "upstream_error");
        assert!(api_error.error.message.contains("vidsrc.me"));
        assert_eq!(api_error.error.details.unwrap()["provider"], "vidsrc.me");
    }

    #[test]
    fn test_subtitle_error_is_opaque() {
        let error = Error::SubtitleFetch;
        let api_error: ApiError = error.into();

        assert_eq!(api_error.error.code, "subtitle_error");
        assert_eq!(api_error.error.message, "error fetching subtitle");
        assert!(api_error.error.details.is_none());
    }

    #[test]
    fn test_api_error_serialization_skips_empty_details() {
        let api_error = ApiError::new("invalid_id", "invalid id");
        let json = serde_json::to_value(&api_error).unwrap();
        assert!(json["error"].get("details").is_none());
    }

    #[test]
    fn test_api_error_with_details() {
        let api_error = ApiError::with_details(
            "upstream_error",
            "provider failed",
            serde_json::json!({"provider": "vidsrc.to"}),
        );
        let json = serde_json::to_value(&api_error).unwrap();
        assert_eq!(json["error"]["details"]["provider"], "vidsrc.to");
    }
}
