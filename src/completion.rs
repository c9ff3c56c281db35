//! Tab Completion
//!
//! Completion candidates come from the output of the most recent listing
//! command (`ls`, `pwd`). The last whitespace-delimited token of the input
//! is matched by prefix against those candidates.

/// Separator used when rendering several candidates on one line
pub const COMPLETION_SEPARATOR: &str = "    ";

/// Command prefixes whose output feeds the suggestion cache
const LISTING_PREFIXES: &[&str] = &["ls", "pwd"];

/// Whether a command's output should refresh the suggestion cache
///
/// Matching is by prefix, so `ls -la` and `lsblk` both count.
pub fn is_listing_command(command: &str) -> bool {
    LISTING_PREFIXES
        .iter()
        .any(|prefix| command.starts_with(prefix))
}

/// Result of completing the current input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// No candidate shares the token's prefix
    NoMatch,
    /// Exactly one candidate; holds the whole completed input line
    SingleMatch(String),
    /// Several candidates, in cache order
    Ambiguous(Vec<String>),
}

impl CompletionOutcome {
    /// Render ambiguous candidates as one output line
    pub fn render(&self) -> Option<String> {
        match self {
            CompletionOutcome::Ambiguous(candidates) => {
                Some(candidates.join(COMPLETION_SEPARATOR))
            }
            _ => None,
        }
    }
}

/// Completion candidates taken from the last listing output
#[derive(Debug, Clone, Default)]
pub struct SuggestionCache {
    /// Candidates in the order they appeared in the listing
    candidates: Vec<String>,
}

impl SuggestionCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache holding the given candidates
    pub fn with_candidates<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    /// Replace the candidates when `last_command` is a listing command
    ///
    /// Returns whether the cache was replaced. Other commands leave the
    /// previous candidates in place.
    pub fn refresh(&mut self, last_command: &str, last_output: &str) -> bool {
        if !is_listing_command(last_command) {
            return false;
        }

        self.candidates = last_output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();

        debug!(
            "Suggestion cache refreshed from '{}' with {} candidate(s)",
            last_command,
            self.candidates.len()
        );
        true
    }

    /// Complete the last token of `current_input`
    pub fn complete(&self, current_input: &str) -> CompletionOutcome {
        let (head, token) = split_completion_token(current_input);

        let matches: Vec<&String> = self
            .candidates
            .iter()
            .filter(|candidate| candidate.starts_with(token))
            .collect();

        match matches.as_slice() {
            [] => CompletionOutcome::NoMatch,
            [only] => CompletionOutcome::SingleMatch(format!("{}{}", head, only)),
            _ => CompletionOutcome::Ambiguous(matches.into_iter().cloned().collect()),
        }
    }

    /// Current candidates
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Number of candidates
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether there are no candidates
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Split trimmed input into everything before the completion token and
/// the token itself
pub fn split_completion_token(input: &str) -> (&str, &str) {
    let trimmed = input.trim();
    match trimmed.char_indices().rev().find(|(_, ch)| ch.is_whitespace()) {
        Some((idx, ch)) => trimmed.split_at(idx + ch.len_utf8()),
        None => ("", trimmed),
    }
}
