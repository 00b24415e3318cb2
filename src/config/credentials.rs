//! Credential resolution from configuration.
//!
//! This module provides secure handling of API keys and tokens
//! resolved from the config (or the environment) at runtime.

use super::types::AuthConfig;

/// Authentication type for API requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthType {
    /// `X-API-Key` header.
    ApiKey,
    /// Standard `Authorization: Bearer` header.
    Bearer,
    /// No authentication required.
    None,
}

impl AuthType {
    /// Parse auth type from string.
    /// Defaults to `ApiKey` for unknown values.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "bearer" => AuthType::Bearer,
            "none" => AuthType::None,
            _ => AuthType::ApiKey,
        }
    }
}

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of credential resolution.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// Credential resolved successfully.
    Configured(SecureString),
    /// Credential is missing or empty.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
    /// No authentication required.
    NoAuth,
}

impl AuthConfig {
    /// Parse the auth_type field to AuthType enum.
    pub fn auth_type(&self) -> AuthType {
        AuthType::from_str(&self.auth_type_str)
    }

    /// Resolve the credential: `api_key` first, then `auth_env_var`.
    ///
    /// Not cached, so a changed environment is picked up on the next request.
    pub fn resolve_credential(&self) -> CredentialStatus {
        match self.auth_type() {
            AuthType::None => CredentialStatus::NoAuth,
            AuthType::ApiKey | AuthType::Bearer => {
                if let Some(ref key) = self.api_key {
                    if !key.is_empty() {
                        return CredentialStatus::Configured(SecureString::new(key.clone()));
                    }
                }
                match std::env::var(&self.auth_env_var) {
                    Ok(key) if !key.is_empty() => {
                        CredentialStatus::Configured(SecureString::new(key))
                    }
                    _ => CredentialStatus::Unconfigured {
                        reason: format!(
                            "api_key is not set and environment variable {} is empty",
                            self.auth_env_var
                        ),
                    },
                }
            }
        }
    }
}
