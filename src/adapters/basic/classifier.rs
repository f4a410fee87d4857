//! After-response hook: authentication failure classification.

use crate::domain::errors::{AuthError, AuthResult};
use crate::domain::models::ResponseDescriptor;

/// Classify a response from the authenticated transport.
///
/// Runs unconditionally after every outbound request. HTTP 401 fails
/// immediately with [`AuthError::AuthenticationFailed`], carrying the
/// fixed user-facing message and the original status code. Every other
/// status passes through unchanged; further error handling stays with
/// the caller.
pub fn classify_response(response: ResponseDescriptor) -> AuthResult<ResponseDescriptor> {
    if response.status == 401 {
        tracing::warn!(status = response.status, "authenticated request was rejected");
        return Err(AuthError::AuthenticationFailed {
            status: response.status,
        });
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::AUTH_FAILED_MESSAGE;
    use serde_json::json;

    #[test]
    fn test_401_becomes_authentication_error_with_status_metadata() {
        let response = ResponseDescriptor {
            status: 401,
            body: json!({"message": "Unauthorized"}),
        };
        let err = classify_response(response).unwrap_err();
        match err {
            AuthError::AuthenticationFailed { status } => {
                assert_eq!(status, 401);
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn test_401_error_message_is_exact() {
        let response = ResponseDescriptor {
            status: 401,
            body: serde_json::Value::Null,
        };
        let err = classify_response(response).unwrap_err();
        assert_eq!(err.to_string(), AUTH_FAILED_MESSAGE);
    }

    #[test]
    fn test_non_401_statuses_pass_through_unchanged() {
        for status in [200, 204, 404, 500] {
            let response = ResponseDescriptor {
                status,
                body: json!({"data": [1, 2, 3]}),
            };
            let passed = classify_response(response.clone()).unwrap();
            assert_eq!(passed, response);
        }
    }
}
