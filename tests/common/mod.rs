//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use clowder_client::actions::Dispatcher;
use clowder_client::api::ApiClient;
use clowder_client::config::{ApiConfig, AuthConfig, Config};
use clowder_client::state::Store;
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

pub use mock_backend::{CapturedRequest, MockBackend, MockResponse};

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Config pointing at `hostname`, authenticating with `api_key` when given.
pub fn config_for(hostname: &str, api_key: Option<&str>) -> Config {
    Config {
        api: ApiConfig {
            hostname: hostname.to_string(),
            timeout_seconds: 5,
            connect_timeout_seconds: 1,
            ..ApiConfig::default()
        },
        auth: AuthConfig {
            auth_type_str: if api_key.is_some() { "api_key" } else { "none" }.to_string(),
            api_key: api_key.map(str::to_string),
            ..AuthConfig::default()
        },
    }
}

/// Dispatcher with a fresh store talking to `backend`.
pub fn dispatcher_for(backend: &MockBackend) -> Dispatcher {
    let config = config_for(&backend.base_url(), Some("test-key"));
    Dispatcher::new(ApiClient::new(&config).unwrap(), Store::new())
}

/// Dispatcher aimed at a port nothing listens on.
pub fn unreachable_dispatcher() -> Dispatcher {
    let config = config_for(&format!("http://127.0.0.1:{}", free_port()), None);
    Dispatcher::new(ApiClient::new(&config).unwrap(), Store::new())
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
