//! Before-request hook: Basic-Authentication header injection.

use std::collections::BTreeMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::domain::models::{Credentials, RequestDescriptor};

/// Name of the header carrying the Basic-auth token.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Attach a Basic-Authentication header built from `credentials` to the
/// request.
///
/// Proceeds only when at least one of username/access key is non-empty;
/// when both are empty the request is returned untouched, with no header
/// added and no error. The token is the standard Base64 encoding of the
/// UTF-8 bytes of `username:access_key`, prefixed with `Basic `. An
/// existing `Authorization` entry is overwritten; all other headers are
/// preserved.
///
/// Credentials containing a colon are encoded as-is; the remote endpoint
/// rejects them if the resulting identity is invalid. Never logs the
/// credential values or the encoded token.
pub fn inject_basic_auth(
    credentials: &Credentials,
    mut request: RequestDescriptor,
) -> RequestDescriptor {
    if credentials.is_empty() {
        return request;
    }

    let token = STANDARD.encode(
        format!("{}:{}", credentials.username, credentials.access_key).as_bytes(),
    );
    request
        .headers
        .get_or_insert_with(BTreeMap::new)
        .insert(AUTHORIZATION_HEADER.to_string(), format!("Basic {token}"));
    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use proptest::prelude::*;

    fn request() -> RequestDescriptor {
        RequestDescriptor::get("https://example.com/resource")
    }

    #[test]
    fn test_header_value_for_known_pair() {
        let req = inject_basic_auth(&Credentials::new("alice", "secret"), request());
        assert_eq!(
            req.headers.unwrap()[AUTHORIZATION_HEADER],
            "Basic YWxpY2U6c2VjcmV0"
        );
    }

    #[test]
    fn test_empty_credentials_leave_request_untouched() {
        let req = inject_basic_auth(&Credentials::new("", ""), request());
        assert_eq!(req, request());
    }

    #[test]
    fn test_empty_credentials_preserve_existing_headers_exactly() {
        let mut req = request();
        req.headers = Some(BTreeMap::from([(
            "Accept".to_string(),
            "application/json".to_string(),
        )]));
        let before = req.clone();
        assert_eq!(inject_basic_auth(&Credentials::default(), req), before);
    }

    #[test]
    fn test_username_only_still_encodes_trailing_colon() {
        let req = inject_basic_auth(&Credentials::new("alice", ""), request());
        assert_eq!(req.headers.unwrap()[AUTHORIZATION_HEADER], "Basic YWxpY2U6");
    }

    #[test]
    fn test_existing_headers_are_preserved_alongside_authorization() {
        let mut req = request();
        req.headers = Some(BTreeMap::from([(
            "Accept".to_string(),
            "application/json".to_string(),
        )]));
        let headers = inject_basic_auth(&Credentials::new("alice", "secret"), req)
            .headers
            .unwrap();
        assert_eq!(headers["Accept"], "application/json");
        assert!(headers.contains_key(AUTHORIZATION_HEADER));
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn test_existing_authorization_is_overwritten() {
        let mut req = request();
        req.headers = Some(BTreeMap::from([(
            AUTHORIZATION_HEADER.to_string(),
            "Bearer stale-token".to_string(),
        )]));
        let headers = inject_basic_auth(&Credentials::new("alice", "secret"), req)
            .headers
            .unwrap();
        assert_eq!(headers[AUTHORIZATION_HEADER], "Basic YWxpY2U6c2VjcmV0");
        assert_eq!(headers.len(), 1);
    }

    proptest! {
        /// Stripping the `Basic ` prefix and decoding the token must
        /// reproduce `username:access_key` exactly.
        #[test]
        fn prop_token_round_trips(username in ".{0,32}", access_key in ".{0,32}") {
            prop_assume!(!(username.is_empty() && access_key.is_empty()));

            let creds = Credentials::new(username.clone(), access_key.clone());
            let req = inject_basic_auth(&creds, request());
            let header = req.headers.unwrap()[AUTHORIZATION_HEADER].clone();

            let token = header.strip_prefix("Basic ").expect("missing prefix");
            let decoded = STANDARD.decode(token).expect("invalid base64");
            prop_assert_eq!(decoded, format!("{username}:{access_key}").into_bytes());
        }
    }
}
