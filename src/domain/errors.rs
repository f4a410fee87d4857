//! Domain errors for the authentication adapter.

use thiserror::Error;

/// Message surfaced verbatim to the end user when the remote endpoint
/// rejects the supplied credentials.
pub const AUTH_FAILED_MESSAGE: &str =
    "The Username and/or Access Key you supplied is incorrect";

/// Errors that can occur during an authentication attempt.
#[derive(Debug, Error)]
pub enum AuthError {
    /// An authenticated request returned HTTP 401. Always fatal to the
    /// current operation, never retried.
    #[error("{}", AUTH_FAILED_MESSAGE)]
    AuthenticationFailed {
        /// The original HTTP status code, carried as metadata.
        status: u16,
    },

    /// Network or protocol failure in the underlying transport,
    /// propagated unchanged.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The verification endpoint returned a non-401, non-2xx status.
    #[error("Verification endpoint returned {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code of the failed probe.
        status: u16,
        /// Response body snippet, already scrubbed of credential material.
        body: String,
    },

    /// The declared credential input fields do not match the keys the
    /// header injector reads. A mismatch would silently disable
    /// authentication, so adapter construction fails instead.
    #[error("Credential field keys {declared:?} do not match expected keys {expected:?}")]
    FieldKeyMismatch {
        /// Keys found on the field declarations.
        declared: Vec<String>,
        /// Canonical keys the injector reads.
        expected: Vec<String>,
    },
}

/// Result alias for adapter operations.
pub type AuthResult<T> = Result<T, AuthError>;

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        AuthError::Transport(err.to_string())
    }
}
