//! Command Model
//!
//! A command is the trimmed, non-empty text the user submitted. Blank
//! submissions never become a `Command`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A trimmed, non-empty command string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Command(String);

impl Command {
    /// Build a command from raw input text
    ///
    /// Returns `None` when the text is empty after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The command text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the command and return its text
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<&str> for Command {
    type Error = Error;

    fn try_from(raw: &str) -> Result<Self> {
        Self::parse(raw).ok_or(Error::EmptyCommand)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Command {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
