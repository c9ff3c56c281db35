//! Configuration management for WebTerm
//!
//! Configuration is split by consumer: the client (where commands are
//! dispatched), the UI host (prompt marker, banner, window), and the bundled
//! executor service. Every section has working defaults, so a missing file
//! is never an error.

pub mod loader;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Environment variable overriding `client.endpoint`
pub const ENDPOINT_ENV: &str = "WEBTERM_ENDPOINT";

/// Main configuration structure for WebTerm
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Executor client configuration
    pub client: ClientConfig,

    /// UI configuration
    pub ui: UiConfig,

    /// Bundled executor service configuration
    pub server: ServerConfig,
}

impl Config {
    /// Check the configuration for values no component can work with
    pub fn validate(&self) -> Result<()> {
        if self.client.endpoint.trim().is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: "client.endpoint".to_string(),
                reason: "endpoint cannot be empty".to_string(),
            });
        }
        if self.client.request_timeout_secs == Some(0) {
            return Err(Error::ConfigValidationFailed {
                field: "client.request_timeout_secs".to_string(),
                reason: "timeout must be at least one second".to_string(),
            });
        }
        if self.server.bind.trim().is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: "server.bind".to_string(),
                reason: "bind address cannot be empty".to_string(),
            });
        }
        if self.server.run_timeout_secs == 0 {
            return Err(Error::ConfigValidationFailed {
                field: "server.run_timeout_secs".to_string(),
                reason: "timeout must be at least one second".to_string(),
            });
        }
        Ok(())
    }

    /// Apply overrides taken from the environment
    pub fn apply_env_overrides(&mut self) {
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            if !endpoint.trim().is_empty() {
                debug!("Endpoint overridden by {}: {}", ENDPOINT_ENV, endpoint);
                self.client.endpoint = endpoint;
            }
        }
    }
}

/// Executor client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the executor; `/api/command` is appended
    pub endpoint: String,

    /// Optional whole-request timeout. Unset means a dispatch waits for
    /// the executor indefinitely.
    pub request_timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5000".to_string(),
            request_timeout_secs: None,
        }
    }
}

/// UI-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Input-ready marker shown before each input line
    pub prompt: String,

    /// Text rendered once when the terminal starts
    pub banner: Option<String>,

    /// Font size in points
    pub font_size: f32,

    /// Initial window width
    pub window_width: f32,

    /// Initial window height
    pub window_height: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            banner: Some(
                "Welcome to WebTerm (workspace). Type commands and press Enter.".to_string(),
            ),
            font_size: 14.0,
            window_width: 900.0,
            window_height: 600.0,
        }
    }
}

/// Bundled executor service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address
    pub bind: String,

    /// Sandbox root; commands cannot reach outside it
    pub workspace: PathBuf,

    /// Timeout for `run` subprocesses
    pub run_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5000".to_string(),
            workspace: PathBuf::from("workspace"),
            run_timeout_secs: 15,
        }
    }
}
