//! WebTerm - A terminal widget backed by a remote command executor
//!
//! This library provides the core of WebTerm: a line-oriented terminal that
//! keeps exactly one editable input line, forwards each submitted command to
//! an executor over HTTP, and renders the reply into a classified scrollback.
//!
//! ## Features
//!
//! - **Single editable line:** Submitted lines are frozen into the scrollback
//! - **History recall:** Up/Down walk previously submitted commands
//! - **Tab completion:** Last token completed from the most recent listing
//! - **Line classification:** Output tagged as error, directory, or file
//! - **Bundled executor:** Sandboxed workspace service speaking the same protocol
//!
//! ## Module Organization
//!
//! ### Core Functionality
//!
//! - [`terminal`] - Input controller, key handling, output scrollback
//! - [`history`] - Submitted command log with a recall cursor
//! - [`completion`] - Suggestion cache and last-token completion
//! - [`execution`] - Dispatcher trait, wire types, HTTP transport
//! - [`models`] - Data structures (Command, InputLine, OutputLine)
//! - [`mod@error`] - Error types and Result aliases
//!
//! ### Hosts
//!
//! - [`app`] - `eframe` application owning the controller
//! - [`ui`] - Viewport, input row and colors
//! - [`server`] - Executor service over a sandboxed workspace
//!
//! ### Configuration
//!
//! - [`config`] - TOML/JSON configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use webterm::{init, HttpDispatcher, InputController};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = init()?;
//! let dispatcher = Arc::new(HttpDispatcher::from_config(&config.client));
//! let controller = InputController::from_config(dispatcher, &config.ui);
//! assert!(controller.is_awaiting_input());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **Main Thread:** Runs the `egui` UI loop and owns the controller
//! - **Runtime Workers:** Perform the blocking HTTP round trip per command
//!
//! Results travel back to the UI thread over a `tokio::mpsc` channel and are
//! applied to the controller on the next frame. Only one command is in
//! flight at a time.

#![allow(unexpected_cfgs)]

#[macro_use]
extern crate tracing;

pub mod completion;
pub mod config;
pub mod error;
pub mod history;

// Core modules
pub mod execution;
pub mod terminal;
pub use terminal::{InputController, Key, KeyOutcome};

// Hosts
pub mod app;
pub mod server;
pub mod ui;
pub use app::WebTermApp;

// Model modules
pub mod models;

// Re-exports for core functionality
pub use config::Config;
pub use error::{Error, Result};
pub use execution::http::HttpDispatcher;
pub use execution::{CommandDispatcher, DispatchResult};

// Convenience re-exports for common types
pub use config::loader::ConfigLoader;
pub use models::{LineClass, OutputLine};

// Version information
/// The current version of WebTerm from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// The application description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Initialize WebTerm with configuration from the default locations
///
/// Honours `WEBTERM_CONFIG` and `WEBTERM_ENDPOINT`. A configuration file
/// that fails to load or validate is reported and replaced by defaults.
///
/// # Examples
///
/// ```no_run
/// use webterm::init;
///
/// match init() {
///     Ok(config) => println!("Executor at {}", config.client.endpoint),
///     Err(e) => eprintln!("Initialization failed: {}", e),
/// }
/// ```
pub fn init() -> Result<Config> {
    info!("Initializing {} v{}", NAME, VERSION);

    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load configuration: {}. Using defaults", e);
            let mut config = Config::default();
            config.apply_env_overrides();
            config.validate()?;
            config
        }
    };

    debug!("Executor endpoint: {}", config.client.endpoint);
    Ok(config)
}

/// Initialize WebTerm from an explicit configuration file
///
/// Unlike [`init`], a file that cannot be loaded is an error.
pub fn init_with_config(config_path: &std::path::Path) -> Result<Config> {
    info!(
        "Initializing {} v{} with config: {}",
        NAME,
        VERSION,
        config_path.display()
    );

    let mut config = ConfigLoader::load_from_file(config_path)?;
    config.apply_env_overrides();
    config.validate()?;
    Ok(config)
}

/// Human-readable explanation for a startup failure
pub fn handle_startup_error(error: &Error) -> String {
    match error {
        Error::ConfigLoadFailed { path, reason } => {
            format!(
                "Configuration Error: Failed to load config from '{}': {}\n\nTry:\n• Check the file path\n• Ensure file permissions are correct",
                path.display(),
                reason
            )
        }
        Error::ConfigParseFailed { format, reason } => {
            format!(
                "Configuration Error: Failed to parse {} config: {}\n\nTry:\n• Check configuration file syntax",
                format, reason
            )
        }
        Error::ConfigValidationFailed { field, reason } => {
            format!(
                "Configuration Error: Validation failed for '{}': {}",
                field, reason
            )
        }
        Error::ServerStartFailed { bind, reason } => {
            format!(
                "Executor Error: Could not start on '{}': {}\n\nTry:\n• Choose a free port with server.bind",
                bind, reason
            )
        }
        _ => format!("Unexpected Error: {}", error),
    }
}
