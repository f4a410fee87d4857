//! Basic-Authentication adapter surface.
//!
//! Mirrors the registration contract of the host runtime: credential
//! input fields, a before-request hook, an after-response hook, a
//! one-time verification probe, and a connection-label template.

mod classifier;
mod header;
mod verifier;

pub use classifier::classify_response;
pub use header::{inject_basic_auth, AUTHORIZATION_HEADER};
pub use verifier::{CredentialVerifier, VERIFY_URL};

use crate::domain::errors::{AuthError, AuthResult};
use crate::domain::models::{
    Credentials, FieldSpec, RequestDescriptor, ResponseDescriptor, VerificationResult,
    ACCESS_KEY_KEY, USERNAME_KEY,
};
use crate::infrastructure::config::AdapterConfig;

/// Template the host renders as the connection label. The verifier
/// returns the raw result object, so the placeholder addresses the
/// `username` field directly.
pub const CONNECTION_LABEL_TEMPLATE: &str = "{{username}}";

/// The assembled authentication adapter registered with the host runtime.
///
/// Constructed once at startup from an [`AdapterConfig`] and never
/// mutated afterwards. Construction validates that the declared field
/// keys match the keys the header injector reads.
#[derive(Debug, Clone)]
pub struct BasicAuthAdapter {
    fields: Vec<FieldSpec>,
    verifier: CredentialVerifier,
}

impl BasicAuthAdapter {
    /// Assemble the adapter from configuration.
    pub fn new(config: &AdapterConfig) -> AuthResult<Self> {
        let fields = credential_fields();
        validate_field_keys(&fields)?;
        Ok(Self {
            fields,
            verifier: CredentialVerifier::new(config.verify_url.clone()),
        })
    }

    /// The credential input fields the host prompts the user for.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// The display template resolved against a [`VerificationResult`].
    pub fn connection_label_template(&self) -> &'static str {
        CONNECTION_LABEL_TEMPLATE
    }

    /// Before-request hook: inject the Basic-auth header.
    pub fn before_request(
        &self,
        credentials: &Credentials,
        request: RequestDescriptor,
    ) -> RequestDescriptor {
        inject_basic_auth(credentials, request)
    }

    /// After-response hook: classify authentication failures.
    pub fn after_response(&self, response: ResponseDescriptor) -> AuthResult<ResponseDescriptor> {
        classify_response(response)
    }

    /// Verify newly registered credentials against the configured
    /// endpoint. Runs once per credential registration.
    pub async fn test(&self, credentials: &Credentials) -> AuthResult<VerificationResult> {
        self.verifier.verify(credentials).await
    }
}

/// The two credential input fields, keyed exactly as the injector
/// expects them.
fn credential_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec {
            key: USERNAME_KEY.to_string(),
            label: "Username".to_string(),
            required: true,
        },
        FieldSpec {
            key: ACCESS_KEY_KEY.to_string(),
            label: "Access Key".to_string(),
            required: true,
        },
    ]
}

/// Reject field declarations whose keys drift from the canonical ones.
/// A drifted key would make the credential bundle arrive under a name
/// the injector never reads, silently disabling authentication.
fn validate_field_keys(fields: &[FieldSpec]) -> AuthResult<()> {
    let declared: Vec<String> = fields.iter().map(|f| f.key.clone()).collect();
    let expected = vec![USERNAME_KEY.to_string(), ACCESS_KEY_KEY.to_string()];
    if declared != expected {
        return Err(AuthError::FieldKeyMismatch { declared, expected });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_declares_canonical_fields() {
        let adapter = BasicAuthAdapter::new(&AdapterConfig::default()).unwrap();
        let keys: Vec<&str> = adapter.fields().iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["username", "access_key"]);
        assert!(adapter.fields().iter().all(|f| f.required));
    }

    #[test]
    fn test_label_template_addresses_username_directly() {
        let adapter = BasicAuthAdapter::new(&AdapterConfig::default()).unwrap();
        let template = adapter.connection_label_template();
        let path = template
            .strip_prefix("{{")
            .and_then(|s| s.strip_suffix("}}"))
            .unwrap();

        let result = VerificationResult {
            username: "alice".to_string(),
        };
        assert_eq!(result.lookup(path), Some("alice".to_string()));
    }

    #[test]
    fn test_validate_field_keys_rejects_legacy_casing() {
        // The casing seen in an older variant of this adapter.
        let fields = vec![
            FieldSpec {
                key: "Username".to_string(),
                label: "Username".to_string(),
                required: true,
            },
            FieldSpec {
                key: "Access Key".to_string(),
                label: "Access Key".to_string(),
                required: true,
            },
        ];
        let err = validate_field_keys(&fields).unwrap_err();
        match err {
            AuthError::FieldKeyMismatch { declared, .. } => {
                assert_eq!(declared, vec!["Username", "Access Key"]);
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn test_hooks_delegate_to_injector_and_classifier() {
        let adapter = BasicAuthAdapter::new(&AdapterConfig::default()).unwrap();

        let req = adapter.before_request(
            &Credentials::new("alice", "secret"),
            RequestDescriptor::get("https://example.com"),
        );
        assert!(req.headers.unwrap().contains_key(AUTHORIZATION_HEADER));

        let resp = ResponseDescriptor {
            status: 401,
            body: serde_json::Value::Null,
        };
        assert!(adapter.after_response(resp).is_err());
    }
}
