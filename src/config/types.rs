use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Where the platform lives and how requests to it behave.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme + host + optional port (e.g., "http://localhost:8000").
    pub hostname: String,
    /// Path prefix of the versioned API (default: "/api/v2").
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Page size for list requests when none is given (default: 20).
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

/// Credentials sent with every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Authentication type: "api_key", "bearer", "none".
    #[serde(rename = "auth_type", default = "default_auth_type")]
    pub auth_type_str: String,
    /// Direct API key or bearer token.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable consulted when `api_key` is not set.
    #[serde(default = "default_auth_env_var")]
    pub auth_env_var: String,
}

fn default_api_prefix() -> String {
    "/api/v2".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_page_size() -> u32 {
    20
}

fn default_auth_type() -> String {
    "none".to_string()
}

fn default_auth_env_var() -> String {
    "CLOWDER_API_KEY".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            hostname: "http://localhost:8000".to_string(),
            api_prefix: default_api_prefix(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            page_size: default_page_size(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            auth_type_str: default_auth_type(),
            api_key: None,
            auth_env_var: default_auth_env_var(),
        }
    }
}

impl ApiConfig {
    /// Hostname without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.hostname.trim_end_matches('/')
    }

    /// Absolute URL of a versioned API path, e.g. `/files/{id}/summary`.
    pub fn v2_url(&self, path: &str) -> String {
        format!(
            "{}/{}{}",
            self.base_url(),
            self.api_prefix.trim_matches('/'),
            path
        )
    }
}
