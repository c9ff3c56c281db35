//! Core data models for WebTerm
//!
//! This module contains the data structures shared by the interaction
//! engine: submitted commands, the editable input line, and classified
//! scrollback lines.

pub mod command;
pub mod input_line;
pub mod output_line;

// Re-exports for convenience
pub use command::Command;
pub use input_line::InputLine;
pub use output_line::{classify, LineClass, OutputLine};
