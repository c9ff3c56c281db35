//! UI components and rendering
//!
//! The `egui` pieces the application window is built from: the classified
//! scrollback viewport, the prompt/input row, and the color scheme.

pub mod colors;
pub mod input;
pub mod viewport;

// Re-exports for convenience
pub use colors::TerminalColors;
pub use input::{ControlKeys, InputField};
pub use viewport::TerminalViewport;
