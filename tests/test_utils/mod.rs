//! Test Utilities and Mocks
//!
//! Dispatchers with scripted replies and helpers for driving a controller
//! the way a host would.

#![allow(dead_code)]

pub mod mock_dispatcher;

// Re-exports for convenience
pub use fixtures::{controller_with, scrollback, type_text};
pub use mock_dispatcher::{GatedDispatcher, ScriptedDispatcher};
