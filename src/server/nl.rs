//! Natural-language command rewriting
//!
//! A handful of English phrasings are rewritten into workspace commands
//! before execution. Text that matches none of them runs unchanged.

use once_cell::sync::Lazy;
use regex::Regex;

static CREATE_FOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)create (?:a )?folder called (\S+)").expect("folder pattern is valid")
});

static TOUCH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)touch (\S+)").expect("touch pattern is valid"));

static MOVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)move (\S+) to (\S+)").expect("move pattern is valid"));

static COPY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)copy (\S+) to (\S+)").expect("copy pattern is valid"));

/// Rewrite `text` into one or more commands
///
/// Matching is case-insensitive but captured names keep their case. Every
/// recognised phrase contributes a command, in the order folder, touch,
/// move, copy; `touch` contributes one command per occurrence.
pub fn rewrite(text: &str) -> Vec<String> {
    let mut commands = Vec::new();

    if let Some(caps) = CREATE_FOLDER.captures(text) {
        commands.push(format!("mkdir {}", &caps[1]));
    }
    for caps in TOUCH.captures_iter(text) {
        commands.push(format!("touch {}", &caps[1]));
    }
    if let Some(caps) = MOVE.captures(text) {
        commands.push(format!("mv {} {}", &caps[1], &caps[2]));
    }
    if let Some(caps) = COPY.captures(text) {
        commands.push(format!("cp {} {}", &caps[1], &caps[2]));
    }

    if commands.is_empty() {
        commands.push(text.to_string());
    }
    commands
}
