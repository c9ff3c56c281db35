//! Terminal Interaction Engine
//!
//! Key handling, scrollback rendering, and the controller that ties
//! history, completion and dispatch together.

pub mod controller;
pub mod input;
pub mod output;

// Re-exports for convenience
pub use controller::{ControllerState, InputController, KeyOutcome, DEFAULT_PROMPT};
pub use input::{apply_editing_key, Key};
pub use output::{split_lines, OutputRenderer};
