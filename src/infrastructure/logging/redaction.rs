use regex::Regex;
use std::fmt;

/// Scrubs credential material from log and error messages.
///
/// Anything that might echo a credential bundle or an authenticated
/// request passes through here before being emitted: Basic-auth tokens,
/// access-key fields, and password fields are all replaced with
/// redaction markers.
#[derive(Clone)]
pub struct CredentialScrubber {
    basic_token_pattern: Regex,
    access_key_pattern: Regex,
    password_pattern: Regex,
}

impl CredentialScrubber {
    /// Create a new scrubber
    pub fn new() -> Self {
        Self {
            // Match Basic-auth tokens in Authorization headers
            basic_token_pattern: Regex::new(r"Basic\s+[A-Za-z0-9+/]+=*").unwrap(),
            // Match access-key style fields
            access_key_pattern: Regex::new(
                r#"["']?(?:access_key|accessKey|api_key|apikey|token)["']?\s*[:=]\s*["']?([a-zA-Z0-9-_\.]+)["']?"#,
            )
            .unwrap(),
            // Match password fields
            password_pattern: Regex::new(
                r#"["']?password["']?\s*[:=]\s*["']?([^"'\s,}]+)["']?"#,
            )
            .unwrap(),
        }
    }

    /// Scrub a message of credential material
    pub fn scrub_message(&self, message: &str) -> String {
        let mut scrubbed = self
            .basic_token_pattern
            .replace_all(message, "Basic [TOKEN_REDACTED]")
            .to_string();
        scrubbed = self
            .access_key_pattern
            .replace_all(&scrubbed, |caps: &regex::Captures| {
                // Keep the field name, drop the value
                let full_match = &caps[0];
                if let Some(colon_pos) = full_match.find(':') {
                    format!("{}:[REDACTED]", &full_match[..colon_pos])
                } else if let Some(eq_pos) = full_match.find('=') {
                    format!("{}=[REDACTED]", &full_match[..eq_pos])
                } else {
                    "[REDACTED]".to_string()
                }
            })
            .to_string();
        scrubbed = self
            .password_pattern
            .replace_all(&scrubbed, "password=[REDACTED]")
            .to_string();
        scrubbed
    }
}

impl Default for CredentialScrubber {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CredentialScrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialScrubber").finish()
    }
}
