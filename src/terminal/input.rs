//! Key Input
//!
//! Key events understood by the input controller, plus the plain
//! line-editing behaviour applied to keys the controller does not claim.

use crate::models::InputLine;

/// A key event delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Submit the line
    Enter,
    /// Recall an older command
    ArrowUp,
    /// Recall a newer command
    ArrowDown,
    /// Complete the last token
    Tab,
    /// Printable character
    Char(char),
    /// Delete before the caret
    Backspace,
    /// Delete under the caret
    Delete,
    /// Move the caret left
    ArrowLeft,
    /// Move the caret right
    ArrowRight,
    /// Move the caret to the start
    Home,
    /// Move the caret to the end
    End,
}

/// Apply a plain editing key to the line
///
/// Returns whether the text or caret changed. Controller keys are ignored.
pub fn apply_editing_key(line: &mut InputLine, key: Key) -> bool {
    match key {
        Key::Char(ch) => line.insert_char(ch),
        Key::Backspace => line.backspace(),
        Key::Delete => line.delete(),
        Key::ArrowLeft => line.move_left(),
        Key::ArrowRight => line.move_right(),
        Key::Home => line.move_home(),
        Key::End => line.move_end(),
        Key::Enter | Key::ArrowUp | Key::ArrowDown | Key::Tab => false,
    }
}
