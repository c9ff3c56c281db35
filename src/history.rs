//! In-session command history
//!
//! Records submitted commands in order and walks them with a cursor for
//! ArrowUp / ArrowDown recall. Nothing is persisted across sessions.

/// Ordered log of submitted commands with a recall cursor
///
/// The cursor lives in `[0, len]`; `len` means "fresh line, nothing
/// recalled".
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    /// Submitted commands, oldest first
    entries: Vec<String>,
    /// Recall position
    cursor: usize,
}

impl HistoryLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command and park the cursor past the end
    pub fn record(&mut self, command: impl Into<String>) {
        self.entries.push(command.into());
        self.cursor = self.entries.len();
        debug!("History recorded entry #{}", self.entries.len());
    }

    /// Step back to an older entry
    ///
    /// At the oldest entry the cursor stays put and the same entry is
    /// returned again. Returns `None` only when the log is empty.
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        if self.cursor > 0 {
            self.cursor -= 1;
        }
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Step forward to a newer entry
    ///
    /// Past the newest entry this yields the blank line `""` and the cursor
    /// rests at `len`. Returns `None` only when the log is empty.
    pub fn recall_next(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            self.entries.get(self.cursor).map(String::as_str)
        } else {
            self.cursor = self.entries.len();
            Some("")
        }
    }

    /// Current cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of recorded commands
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
