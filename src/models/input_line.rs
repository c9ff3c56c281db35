//! Input Line Model
//!
//! The single editable text buffer behind a prompt. Once frozen the line
//! rejects every edit; a new `InputLine` is created for the next prompt.

use serde::{Deserialize, Serialize};

/// The live (or frozen) text of one prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputLine {
    /// Current text
    text: String,
    /// Caret position, counted in characters
    cursor: usize,
    /// Whether the line still accepts edits
    editable: bool,
}

impl InputLine {
    /// Create an empty, editable line
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            editable: true,
        }
    }

    /// Create an editable line holding `text`, caret at the end
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut line = Self::new();
        line.set_text(text);
        line
    }

    /// Current text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Caret position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the line accepts edits
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// Number of characters in the line
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Make the line read-only and hand back its text
    pub fn freeze(&mut self) -> &str {
        self.editable = false;
        &self.text
    }

    /// Replace the whole text and move the caret to the end
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        if !self.editable {
            return false;
        }
        self.text = text.into();
        self.cursor = self.char_len();
        true
    }

    /// Insert a character at the caret
    pub fn insert_char(&mut self, ch: char) -> bool {
        if !self.editable {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
        true
    }

    /// Delete the character before the caret
    pub fn backspace(&mut self) -> bool {
        if !self.editable || self.cursor == 0 {
            return false;
        }
        let at = self.byte_index(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
        true
    }

    /// Delete the character under the caret
    pub fn delete(&mut self) -> bool {
        if !self.editable || self.cursor >= self.char_len() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    /// Move the caret one character left
    pub fn move_left(&mut self) -> bool {
        if !self.editable || self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move the caret one character right
    pub fn move_right(&mut self) -> bool {
        if !self.editable || self.cursor >= self.char_len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Move the caret to the start
    pub fn move_home(&mut self) -> bool {
        if !self.editable || self.cursor == 0 {
            return false;
        }
        self.cursor = 0;
        true
    }

    /// Move the caret to the end
    pub fn move_end(&mut self) -> bool {
        let len = self.char_len();
        if !self.editable || self.cursor == len {
            return false;
        }
        self.cursor = len;
        true
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

impl Default for InputLine {
    fn default() -> Self {
        Self::new()
    }
}
