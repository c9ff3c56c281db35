//! Output Line Model
//!
//! Represents a single classified line of scrollback. Classification is a
//! total function over the line text: every line gets exactly one class.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual class of a scrollback line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineClass {
    /// Line mentions an error or an unknown command
    Error,
    /// Line names a directory (trailing `/`)
    Directory,
    /// Anything else
    File,
    /// A frozen input line echoed back into the scrollback.
    /// Never produced by [`classify`].
    Prompt,
}

impl LineClass {
    /// Name used by hosts for styling
    pub fn as_str(&self) -> &'static str {
        match self {
            LineClass::Error => "error",
            LineClass::Directory => "directory",
            LineClass::File => "file",
            LineClass::Prompt => "prompt",
        }
    }
}

impl fmt::Display for LineClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify one line of executor output
///
/// Rules are checked in order and the first match wins:
/// 1. contains `error` or `unknown` (any case) → [`LineClass::Error`]
/// 2. ends with `/` → [`LineClass::Directory`]
/// 3. otherwise → [`LineClass::File`]
pub fn classify(line: &str) -> LineClass {
    let lower = line.to_lowercase();
    if lower.contains("error") || lower.contains("unknown") {
        LineClass::Error
    } else if line.ends_with('/') {
        LineClass::Directory
    } else {
        LineClass::File
    }
}

/// A single rendered line of scrollback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputLine {
    /// The line text, without its newline
    pub text: String,

    /// Classification used for styling
    pub class: LineClass,

    /// Position in the scrollback (1-based)
    pub line_number: usize,

    /// When this line was appended
    pub timestamp: DateTime<Utc>,
}

impl OutputLine {
    /// Create a line and classify its text
    pub fn new(text: impl Into<String>, line_number: usize) -> Self {
        let text = text.into();
        let class = classify(&text);
        Self::with_class(text, class, line_number)
    }

    /// Create a line with an explicit class
    pub fn with_class(text: impl Into<String>, class: LineClass, line_number: usize) -> Self {
        Self {
            text: text.into(),
            class,
            line_number,
            timestamp: Utc::now(),
        }
    }

    /// Get the plain text
    pub fn get_plain_text(&self) -> &str {
        &self.text
    }

    /// Whether this line is styled as an error
    pub fn is_error(&self) -> bool {
        self.class == LineClass::Error
    }
}

impl Default for OutputLine {
    fn default() -> Self {
        Self::new(String::new(), 0)
    }
}

impl From<&str> for OutputLine {
    fn from(text: &str) -> Self {
        Self::new(text, 0)
    }
}
