//
//  wikitude-cli
//  api/error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Error Types
//!
//! Every fallible operation in the [`api`](crate::api) layer returns
//! [`ApiError`]. Failures reported by the Manager API itself come in two
//! kinds, mirroring what the server sends back:
//!
//! - [`ApiError::Service`]: the server answered with a structured JSON error
//!   body (`code`, `reason`, `message`)
//! - [`ApiError::General`]: the server answered with anything else (an HTML
//!   error page, plain text, an empty body)
//!
//! The remaining variants cover transport failures and conditions detected
//! on the client side (unresolved path placeholders, missing `Location`
//! headers, exhausted poll budgets, cancellation).
//!
//! ## Example
//!
//! ```rust,no_run
//! use wikitude_cli::api::{ApiError, ManagerClient};
//! use wikitude_cli::auth::Credentials;
//!
//! # async fn example() -> Result<(), ApiError> {
//! let client = ManagerClient::new(Credentials::new("token", "3"))?;
//! match client.get_target_collection("unknown").await {
//!     Ok(tc) => println!("found {}", tc.name),
//!     Err(ApiError::Service { reason, .. }) if reason == "NotFound" => {
//!         println!("no such collection");
//!     }
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable error code from a service error body.
///
/// The Manager API has used both numeric and string codes over time, so both
/// are kept exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceErrorCode {
    /// A numeric code such as `404`.
    Number(i64),
    /// A symbolic code such as `"E_TARGET_NOT_FOUND"`.
    Text(String),
}

impl fmt::Display for ServiceErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ServiceErrorCode {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ServiceErrorCode {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Wire shape of a structured error response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ServiceErrorBody {
    pub code: ServiceErrorCode,
    pub reason: String,
    pub message: String,
}

impl From<ServiceErrorBody> for ApiError {
    fn from(body: ServiceErrorBody) -> Self {
        Self::Service {
            code: body.code,
            reason: body.reason,
            message: body.message,
        }
    }
}

/// Unified error type for all Manager API operations.
///
/// # Variants
///
/// | Variant | Raised when |
/// |---------|-------------|
/// | `Service` | Non-success status with a JSON error body |
/// | `General` | Non-success status without a usable JSON body |
/// | `Network` | The transport failed before a status was received |
/// | `Decode` | A success body did not match the expected shape |
/// | `InvalidEndpoint` | The configured endpoint is not a valid URL |
/// | `UnresolvedPlaceholder` | A `${...}` token survived path substitution |
/// | `MissingLocation` | An accepted async job carried no `Location` header |
/// | `UnexpectedResponse` | A success response lacked a required body or field |
/// | `PollAttemptsExceeded` | The poll loop used up its attempt budget |
/// | `PollTimedOut` | The poll loop ran past its deadline |
/// | `Cancelled` | A cancellable wait was interrupted |
///
/// # Notes
///
/// - Errors are never retried or reclassified by the client; what the
///   dispatcher raises is what the caller sees.
/// - `Network` and `Decode` convert automatically from `reqwest::Error` and
///   `serde_json::Error`, so `?` works on both.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server returned a structured JSON error.
    ///
    /// Displayed as `"{reason} ({code}): {message}"`.
    #[error("{reason} ({code}): {message}")]
    Service {
        /// Machine-readable error code.
        code: ServiceErrorCode,
        /// Short classifier, e.g. `"NotFound"` or `"InvalidArgument"`.
        reason: String,
        /// Human-readable description.
        message: String,
    },

    /// The server returned a non-JSON failure.
    ///
    /// Displayed as `"({code}): {message}"` where `code` is the HTTP status.
    #[error("({code}): {message}")]
    General {
        /// The raw HTTP status code.
        code: u16,
        /// The raw response text.
        message: String,
    },

    /// Network error from the HTTP client.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A JSON body could not be decoded into the expected type.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The endpoint URL could not be parsed.
    #[error("Invalid endpoint '{0}'")]
    InvalidEndpoint(String),

    /// A path template still contains a placeholder after substitution.
    ///
    /// This is a programming error in the caller, not a server condition.
    #[error("Unresolved placeholder in path '{0}'")]
    UnresolvedPlaceholder(String),

    /// An asynchronous job was accepted without a `Location` header.
    #[error("Accepted response did not include a Location header")]
    MissingLocation,

    /// A success response did not carry what the operation needs.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// The job was still running after the configured number of polls.
    #[error("Job did not complete after {attempts} status checks")]
    PollAttemptsExceeded {
        /// Number of status requests that were sent.
        attempts: u32,
    },

    /// The job was still running when the overall poll deadline passed.
    #[error("Job did not complete within {}s", .elapsed.as_secs())]
    PollTimedOut {
        /// Time spent waiting for the job.
        elapsed: Duration,
    },

    /// The wait between polls was cancelled.
    #[error("Operation cancelled")]
    Cancelled,
}

impl ApiError {
    /// Returns the HTTP status code when the server produced this error.
    ///
    /// For service errors this is the numeric `code` from the body when it is
    /// one; string codes yield `None`.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::General { code, .. } => Some(*code),
            Self::Service {
                code: ServiceErrorCode::Number(n),
                ..
            } => u16::try_from(*n).ok(),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` for errors the server reported (as opposed to local
    /// or transport failures).
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Service { .. } | Self::General { .. })
    }

    /// Returns `true` when the poll loop gave up before the job finished.
    pub fn is_poll_exhausted(&self) -> bool {
        matches!(
            self,
            Self::PollAttemptsExceeded { .. } | Self::PollTimedOut { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_display() {
        let err = ApiError::Service {
            code: ServiceErrorCode::Number(404),
            reason: "NotFound".to_string(),
            message: "Target collection not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "NotFound (404): Target collection not found"
        );
    }

    #[test]
    fn test_general_error_display() {
        let err = ApiError::General {
            code: 502,
            message: "Bad Gateway".to_string(),
        };
        assert_eq!(err.to_string(), "(502): Bad Gateway");
    }

    #[test]
    fn test_error_code_accepts_number_or_string() {
        let body: ServiceErrorBody =
            serde_json::from_str(r#"{"code":"E42","reason":"Invalid","message":"bad"}"#).unwrap();
        assert_eq!(body.code, ServiceErrorCode::Text("E42".to_string()));

        let body: ServiceErrorBody =
            serde_json::from_str(r#"{"code":400,"reason":"Invalid","message":"bad"}"#).unwrap();
        assert_eq!(body.code, ServiceErrorCode::Number(400));
    }

    #[test]
    fn test_status_code() {
        let service = ApiError::from(ServiceErrorBody {
            code: ServiceErrorCode::Number(409),
            reason: "Conflict".to_string(),
            message: "exists".to_string(),
        });
        assert_eq!(service.status_code(), Some(409));

        let textual = ApiError::Service {
            code: ServiceErrorCode::from("E1"),
            reason: "Invalid".to_string(),
            message: "x".to_string(),
        };
        assert_eq!(textual.status_code(), None);
        assert!(textual.is_server_error());
        assert!(!ApiError::Cancelled.is_server_error());
    }

    #[test]
    fn test_poll_timeout_display() {
        let err = ApiError::PollTimedOut {
            elapsed: Duration::from_secs(90),
        };
        assert_eq!(err.to_string(), "Job did not complete within 90s");
        assert!(err.is_poll_exhausted());
    }
}
