//! Error types and Result aliases for WebTerm

use std::fmt;
use std::path::PathBuf;

/// Result type alias for WebTerm operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for WebTerm
#[derive(Debug)]
pub enum Error {
    // === Dispatch errors ===
    /// Transport-level failure talking to the executor
    DispatchFailed {
        command: String,
        reason: String,
    },

    /// Executor answered with something that is not a command response
    InvalidResponse {
        status: u16,
        reason: String,
    },

    // === Controller errors ===
    /// A dispatch result arrived while no command was in flight
    NoCommandInFlight,

    /// Empty command
    EmptyCommand,

    // === Configuration errors ===
    /// Failed to load configuration file
    ConfigLoadFailed {
        path: PathBuf,
        reason: String,
    },

    /// Configuration validation failed
    ConfigValidationFailed {
        field: String,
        reason: String,
    },

    /// Failed to serialize configuration
    ConfigSerializationFailed {
        format: String,
        reason: String,
    },

    /// Failed to parse configuration
    ConfigParseFailed {
        format: String,
        reason: String,
    },

    // === Server errors ===
    /// Executor service could not bind its listener
    ServerStartFailed {
        bind: String,
        reason: String,
    },

    // === I/O and serialization errors ===
    /// I/O errors
    Io(std::io::Error),

    /// Serialization errors
    Serde(serde_json::Error),

    /// TOML parsing errors
    Toml(toml::de::Error),

    // === Generic fallback (use sparingly) ===
    /// Generic errors (for cases not yet categorized)
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Dispatch errors
            Error::DispatchFailed { command, reason } => {
                write!(f, "Failed to dispatch '{}': {}", command, reason)
            }
            Error::InvalidResponse { status, reason } => {
                write!(f, "Invalid executor response (HTTP {}): {}", status, reason)
            }

            // Controller errors
            Error::NoCommandInFlight => {
                write!(f, "No command is awaiting a result")
            }
            Error::EmptyCommand => {
                write!(f, "Command cannot be empty")
            }

            // Configuration errors
            Error::ConfigLoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path.display(), reason)
            }
            Error::ConfigValidationFailed { field, reason } => {
                write!(f, "Configuration validation failed for '{}': {}", field, reason)
            }
            Error::ConfigSerializationFailed { format, reason } => {
                write!(f, "Failed to serialize config as {}: {}", format, reason)
            }
            Error::ConfigParseFailed { format, reason } => {
                write!(f, "Failed to parse {} config: {}", format, reason)
            }

            // Server errors
            Error::ServerStartFailed { bind, reason } => {
                write!(f, "Failed to start executor on '{}': {}", bind, reason)
            }

            // I/O and serialization errors
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Serde(err) => write!(f, "Serialization error: {}", err),
            Error::Toml(err) => write!(f, "TOML parsing error: {}", err),

            // Generic fallback
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serde(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Toml(err)
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Other(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Other(err.to_string())
    }
}
