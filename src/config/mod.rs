//! Configuration: TOML file, credential resolution and the shared header set.

mod auth;
mod credentials;
mod loader;
mod types;

pub use auth::{build_auth_header, build_header_set, AuthHeader};
pub use credentials::{AuthType, CredentialStatus, SecureString};
pub use loader::ConfigError;
pub use types::{ApiConfig, AuthConfig, Config};
