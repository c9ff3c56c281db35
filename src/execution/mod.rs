//! Command dispatch to the remote executor
//!
//! The interaction engine never talks to the network directly. It hands a
//! command to a [`CommandDispatcher`] and gets back exactly one of two
//! outcomes; transport, protocol and decoding failures are folded into
//! [`DispatchResult::Failure`] before they reach the caller.

pub mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use http::HttpDispatcher;

/// Path of the executor endpoint, relative to the configured base URL
pub const COMMAND_PATH: &str = "/api/command";

/// Outcome of one dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult {
    /// Executor output, possibly multi-line
    Success(String),
    /// Human-readable reason the dispatch failed
    Failure(String),
}

impl DispatchResult {
    /// Text to render in the scrollback
    pub fn render_text(&self) -> String {
        match self {
            DispatchResult::Success(output) => output.clone(),
            DispatchResult::Failure(description) => format!("Error: {}", description),
        }
    }

    /// Whether the executor answered
    pub fn is_success(&self) -> bool {
        matches!(self, DispatchResult::Success(_))
    }
}

/// Sends commands to an executor
///
/// Implementations must never panic or return early with an error: every
/// failure becomes a [`DispatchResult::Failure`].
#[async_trait]
pub trait CommandDispatcher: Send + Sync {
    /// Send `command` and wait for its complete result
    async fn dispatch(&self, command: &str) -> DispatchResult;
}

/// Request body of `POST /api/command`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRequest {
    /// Raw trimmed command text
    #[serde(default)]
    pub command: String,
}

/// Response body of `POST /api/command`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    /// Whether the executor accepted the command
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ok: Option<bool>,
    /// Output text; absent means empty
    #[serde(default)]
    pub output: Option<String>,
}

impl CommandResponse {
    /// Build a response carrying output text
    pub fn new(ok: bool, output: impl Into<String>) -> Self {
        Self {
            ok: Some(ok),
            output: Some(output.into()),
        }
    }

    /// Output text, with a missing field read as empty
    pub fn output_text(&self) -> &str {
        self.output.as_deref().unwrap_or("")
    }
}
