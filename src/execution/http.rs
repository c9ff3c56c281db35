//! HTTP dispatcher
//!
//! Posts `{"command": ...}` to the executor and decodes `{"output": ...}`.
//! `ureq` is blocking, so each request runs on tokio's blocking pool and
//! the caller only sees a single await point.

use std::time::Duration;

use async_trait::async_trait;

use super::{CommandDispatcher, CommandRequest, CommandResponse, DispatchResult, COMMAND_PATH};
use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// Dispatcher that talks to an executor over HTTP
#[derive(Debug, Clone)]
pub struct HttpDispatcher {
    /// Shared connection pool
    agent: ureq::Agent,
    /// Full URL of the command endpoint
    url: String,
}

impl HttpDispatcher {
    /// Create a dispatcher for the executor at `endpoint` (base URL)
    ///
    /// No request timeout is applied: a hung executor keeps the dispatch
    /// pending until it answers.
    pub fn new(endpoint: &str) -> Self {
        Self::with_agent(endpoint, ureq::AgentBuilder::new().build())
    }

    /// Create a dispatcher from the client configuration
    pub fn from_config(config: &ClientConfig) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Self::with_agent(&config.endpoint, builder.build())
    }

    fn with_agent(endpoint: &str, agent: ureq::Agent) -> Self {
        let url = format!("{}{}", endpoint.trim_end_matches('/'), COMMAND_PATH);
        Self { agent, url }
    }

    /// URL the dispatcher posts to
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CommandDispatcher for HttpDispatcher {
    async fn dispatch(&self, command: &str) -> DispatchResult {
        let agent = self.agent.clone();
        let url = self.url.clone();
        let command = command.to_string();

        debug!("Dispatching '{}' to {}", command, url);
        let outcome =
            tokio::task::spawn_blocking(move || post_command(&agent, &url, &command)).await;

        match outcome {
            Ok(Ok(output)) => DispatchResult::Success(output),
            Ok(Err(e)) => {
                warn!("Dispatch failed: {}", e);
                DispatchResult::Failure(e.to_string())
            }
            Err(e) => {
                error!("Dispatch task did not complete: {}", e);
                DispatchResult::Failure(format!("dispatch task failed: {}", e))
            }
        }
    }
}

/// Send one command and return the executor's output text
fn post_command(agent: &ureq::Agent, url: &str, command: &str) -> Result<String> {
    let body = serde_json::to_string(&CommandRequest {
        command: command.to_string(),
    })?;

    let response = agent
        .post(url)
        .set("Content-Type", "application/json")
        .send_string(&body);

    match response {
        Ok(response) => {
            let status = response.status();
            let text = response.into_string()?;
            decode_response(status, &text)
        }
        // The executor reports some failures (e.g. a blank command) with a
        // non-2xx status and a normal JSON body; render those like successes.
        Err(ureq::Error::Status(status, response)) => {
            let text = response.into_string().unwrap_or_default();
            decode_response(status, &text).map_err(|_| Error::InvalidResponse {
                status,
                reason: format!("executor returned HTTP {}", status),
            })
        }
        Err(ureq::Error::Transport(transport)) => Err(Error::DispatchFailed {
            command: command.to_string(),
            reason: transport.to_string(),
        }),
    }
}

/// Decode a response body into output text
fn decode_response(status: u16, body: &str) -> Result<String> {
    let response: CommandResponse =
        serde_json::from_str(body).map_err(|e| Error::InvalidResponse {
            status,
            reason: e.to_string(),
        })?;
    Ok(response.output_text().to_string())
}
