//! Data model for a single authentication attempt.
//!
//! All types here are ephemeral and scoped to one outbound call. The
//! descriptors mirror the request/response objects the host runtime
//! passes through its before/after hooks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Canonical key of the username credential field.
pub const USERNAME_KEY: &str = "username";

/// Canonical key of the access-key credential field.
pub const ACCESS_KEY_KEY: &str = "access_key";

/// A user-supplied credential pair.
///
/// Either field may be the empty string; absent values in the upstream
/// contract deserialize to empty strings, never to `None`. Immutable
/// once supplied per call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Credentials {
    /// LambdaTest account username.
    #[serde(default)]
    pub username: String,
    /// LambdaTest access key.
    #[serde(default)]
    pub access_key: String,
}

impl Credentials {
    /// Create a credential pair from the two input-field values.
    pub fn new(username: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            access_key: access_key.into(),
        }
    }

    /// True when both fields are empty. The header injector leaves the
    /// request untouched in that case.
    pub fn is_empty(&self) -> bool {
        self.username.is_empty() && self.access_key.is_empty()
    }
}

/// An outbound request descriptor.
///
/// The injector only ever touches `headers`; `url`, `method`, and any
/// future fields pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RequestDescriptor {
    /// Target URL.
    pub url: String,
    /// HTTP method name, e.g. `GET`.
    #[serde(default = "default_method")]
    pub method: String,
    /// Header map, created on demand by the injector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
}

fn default_method() -> String {
    "GET".to_string()
}

impl RequestDescriptor {
    /// Build a GET request descriptor for the given URL, with no headers.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: default_method(),
            headers: None,
        }
    }
}

/// A response as seen by the after-response hook.
///
/// Only `status` and `body` matter for error classification; the body
/// is opaque to this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ResponseDescriptor {
    /// HTTP status code.
    pub status: u16,
    /// Response body, parsed as JSON when possible, otherwise a string.
    #[serde(default)]
    pub body: Value,
}

impl ResponseDescriptor {
    /// Build a response descriptor from a status code and raw body text.
    ///
    /// The body is kept as parsed JSON when it is valid JSON, so label
    /// lookups and callers can address fields by path.
    pub fn from_text(status: u16, text: String) -> Self {
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
        Self { status, body }
    }
}

/// Minimal identity echo returned by a successful credential verification.
///
/// The username comes from the locally supplied credentials, not from
/// the remote payload, so the contract does not depend on the remote
/// response schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct VerificationResult {
    /// The validated account's username, used for display purposes.
    pub username: String,
}

impl VerificationResult {
    /// Resolve a dotted key path against the serialized result.
    ///
    /// This is the lookup the host's connection-label templating performs
    /// for a placeholder like `{{username}}`. Returns `None` when the path
    /// does not resolve to a scalar value.
    pub fn lookup(&self, path: &str) -> Option<String> {
        let mut value = serde_json::to_value(self).ok()?;
        for segment in path.split('.') {
            value = value.get(segment)?.clone();
        }
        match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// Declaration of one credential input field rendered by the host UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FieldSpec {
    /// Key under which the field value arrives in the credential bundle.
    pub key: String,
    /// Label shown next to the input.
    pub label: String,
    /// Whether the host must require a value before connecting.
    pub required: bool,
}
