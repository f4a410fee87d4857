//! Credential verification probe.
//!
//! Issues the single authenticated request made when a user registers
//! their credentials, confirming they are valid before the connection
//! is accepted. All HTTP and network failures are mapped to
//! [`AuthError`] variants.

use reqwest::Client;

use crate::domain::errors::{AuthError, AuthResult};
use crate::domain::models::{
    Credentials, RequestDescriptor, ResponseDescriptor, VerificationResult,
};
use crate::infrastructure::logging::CredentialScrubber;

use super::{classify_response, inject_basic_auth};

/// Fixed verification endpoint. Requires valid authentication but is
/// readable by any valid account.
pub const VERIFY_URL: &str = "https://auth.lambdatest.com/api/organization/users";

/// HTTP client for the one-time credential verification probe.
///
/// The endpoint URL is taken from configuration so tests can point the
/// probe at a mock server.
#[derive(Debug, Clone)]
pub struct CredentialVerifier {
    /// The underlying HTTP client.
    http: Client,
    /// Endpoint probed for verification.
    verify_url: String,
    /// Scrubs credential material out of anything that ends up in an
    /// error or log message.
    scrubber: CredentialScrubber,
}

impl CredentialVerifier {
    /// Create a new verifier probing the given endpoint.
    pub fn new(verify_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            verify_url: verify_url.into(),
            scrubber: CredentialScrubber::new(),
        }
    }

    /// The endpoint this verifier probes.
    pub fn verify_url(&self) -> &str {
        &self.verify_url
    }

    /// Verify a newly supplied credential pair.
    ///
    /// Applies the header injector as pre-processing and the response
    /// classifier as post-processing, then short-circuits any remaining
    /// non-2xx status. On success the returned identity is the locally
    /// supplied username, not a field parsed from the remote payload.
    /// Failures surface immediately; there are no retries.
    pub async fn verify(&self, credentials: &Credentials) -> AuthResult<VerificationResult> {
        let request = inject_basic_auth(credentials, RequestDescriptor::get(&self.verify_url));
        tracing::debug!(url = %request.url, "verifying credentials");

        let method: reqwest::Method = request
            .method
            .parse()
            .map_err(|_| AuthError::Transport(format!("invalid method: {}", request.method)))?;
        let mut builder = self.http.request(method, &request.url);
        if let Some(headers) = &request.headers {
            for (name, value) in headers {
                builder = builder.header(name, value);
            }
        }

        let resp = builder.send().await.map_err(|e| {
            AuthError::Transport(format!("credential verification request failed: {e}"))
        })?;

        let status = resp.status().as_u16();
        let text = resp.text().await.unwrap_or_default();
        let response = classify_response(ResponseDescriptor::from_text(status, text))?;

        if !(200..300).contains(&response.status) {
            let body = self.scrubber.scrub_message(&response.body.to_string());
            tracing::warn!(status = response.status, "credential verification failed");
            return Err(AuthError::UnexpectedStatus {
                status: response.status,
                body,
            });
        }

        tracing::info!("credentials verified");
        Ok(VerificationResult {
            username: credentials.username.clone(),
        })
    }
}
