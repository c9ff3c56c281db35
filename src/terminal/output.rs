//! Output Rendering and Classification
//!
//! Splits executor output into lines, classifies each one, and appends it
//! to the append-only scrollback buffer.

use crate::models::{LineClass, OutputLine};

/// Renders text into the scrollback buffer
///
/// The buffer only ever grows. Every append raises a scroll request that
/// the host consumes to keep the newest line in view.
#[derive(Debug, Default)]
pub struct OutputRenderer {
    /// Rendered lines, oldest first
    scrollback: Vec<OutputLine>,
    /// Set on every append, cleared by the host
    scroll_pending: bool,
}

impl OutputRenderer {
    /// Create an empty renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `text` into lines, classify them and append them
    ///
    /// Returns the number of lines appended.
    pub fn append(&mut self, text: &str) -> usize {
        let mut appended = 0;
        for line in split_lines(text) {
            let line_number = self.scrollback.len() + 1;
            self.scrollback.push(OutputLine::new(line, line_number));
            appended += 1;
        }
        trace!("Appended {} line(s) to scrollback", appended);
        self.scroll_pending = true;
        appended
    }

    /// Echo a frozen input line into the scrollback
    pub fn echo_prompt(&mut self, prompt: &str, input: &str) {
        let line_number = self.scrollback.len() + 1;
        self.scrollback.push(OutputLine::with_class(
            format!("{}{}", prompt, input),
            LineClass::Prompt,
            line_number,
        ));
        self.scroll_pending = true;
    }

    /// All rendered lines, oldest first
    pub fn lines(&self) -> &[OutputLine] {
        &self.scrollback
    }

    /// Most recently appended line
    pub fn last(&self) -> Option<&OutputLine> {
        self.scrollback.last()
    }

    /// Number of rendered lines
    pub fn len(&self) -> usize {
        self.scrollback.len()
    }

    /// Whether nothing has been rendered yet
    pub fn is_empty(&self) -> bool {
        self.scrollback.is_empty()
    }

    /// Consume the pending scroll-to-bottom request
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }
}

/// Split text on `\n` / `\r\n` boundaries
///
/// A single trailing newline terminates the final line instead of opening
/// an empty one. The empty string yields one empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let body = text
        .strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text);

    body.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}
