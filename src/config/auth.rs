//! Shared header set for API requests.
//!
//! Every request the client sends carries these headers, built from
//! the auth configuration and the resolved credential.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};

use super::credentials::{AuthType, CredentialStatus};
use super::types::AuthConfig;

/// Header name and value for authentication.
pub type AuthHeader = (String, String);

/// Build the authentication header for the configured credentials.
///
/// Returns `Some((header_name, header_value))` if auth is configured,
/// or `None` if no auth is needed or credentials are missing.
pub fn build_auth_header(auth: &AuthConfig) -> Option<AuthHeader> {
    match (auth.auth_type(), auth.resolve_credential()) {
        (AuthType::ApiKey, CredentialStatus::Configured(key)) => {
            Some(("X-API-Key".to_string(), key.expose().to_string()))
        }
        (AuthType::Bearer, CredentialStatus::Configured(key)) => Some((
            "Authorization".to_string(),
            format!("Bearer {}", key.expose()),
        )),
        (AuthType::None, _) => None,
        (_, CredentialStatus::Unconfigured { .. }) => None,
        (_, CredentialStatus::NoAuth) => None,
    }
}

/// Build the full header set attached to every request.
///
/// Credentials that cannot be encoded as a header value are skipped
/// with a warning rather than failing the request.
pub fn build_header_set(auth: &AuthConfig) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    if let Some((name, value)) = build_auth_header(auth) {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(&value),
        ) {
            (Ok(name), Ok(mut value)) => {
                value.set_sensitive(true);
                headers.insert(name, value);
            }
            _ => tracing::warn!(header = %name, "credential is not a valid header value, skipping"),
        }
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_auth(auth_type: &str, api_key: Option<&str>) -> AuthConfig {
        AuthConfig {
            auth_type_str: auth_type.to_string(),
            api_key: api_key.map(str::to_string),
            auth_env_var: "CLOWDER_CLIENT_TEST_AUTH_UNSET".to_string(),
        }
    }

    #[test]
    fn test_no_auth_header() {
        assert!(build_auth_header(&make_auth("none", Some("ignored"))).is_none());
    }

    #[test]
    fn test_api_key_header() {
        let (name, value) = build_auth_header(&make_auth("api_key", Some("key-123"))).unwrap();
        assert_eq!(name, "X-API-Key");
        assert_eq!(value, "key-123");
    }

    #[test]
    fn test_bearer_header() {
        let (name, value) = build_auth_header(&make_auth("bearer", Some("tok"))).unwrap();
        assert_eq!(name, "Authorization");
        assert_eq!(value, "Bearer tok");
    }

    #[test]
    fn test_header_set_always_accepts_json() {
        let headers = build_header_set(&make_auth("none", None));
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_header_set_includes_credential() {
        let headers = build_header_set(&make_auth("api_key", Some("abc")));
        assert_eq!(headers.get("x-api-key").unwrap(), "abc");
    }

    #[test]
    fn test_missing_credential_sends_no_auth_header() {
        let headers = build_header_set(&make_auth("bearer", None));
        assert!(headers.get("authorization").is_none());
    }
}
