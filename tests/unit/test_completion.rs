//! Unit Tests for Tab Completion

use webterm::completion::{is_listing_command, split_completion_token, CompletionOutcome, SuggestionCache};

#[test]
fn test_listing_commands() {
    assert!(is_listing_command("ls"));
    assert!(is_listing_command("ls -la docs"));
    assert!(is_listing_command("pwd"));
    assert!(!is_listing_command("cat ls"));
    assert!(!is_listing_command(" ls"));
}

#[test]
fn test_completion_token() {
    assert_eq!(split_completion_token("cat al"), ("cat ", "al"));
    assert_eq!(split_completion_token("al"), ("", "al"));
    assert_eq!(split_completion_token("  cp a  b  "), ("cp a  ", "b"));
    assert_eq!(split_completion_token(""), ("", ""));
}

#[test]
fn test_completion_outcomes() {
    let cache = SuggestionCache::with_candidates(["a.txt", "ab.txt", "b.txt"]);

    assert_eq!(
        cache.complete("cat b"),
        CompletionOutcome::SingleMatch("cat b.txt".to_string())
    );
    assert_eq!(
        cache.complete("cat a"),
        CompletionOutcome::Ambiguous(vec!["a.txt".to_string(), "ab.txt".to_string()])
    );
    assert_eq!(cache.complete("cat z"), CompletionOutcome::NoMatch);
}

#[test]
fn test_empty_token_matches_everything() {
    let cache = SuggestionCache::with_candidates(["x", "y"]);
    assert_eq!(
        cache.complete("").render().as_deref(),
        Some("x    y")
    );
}

#[test]
fn test_refresh_replaces_only_for_listings() {
    let mut cache = SuggestionCache::with_candidates(["old"]);

    assert!(!cache.refresh("cat notes.txt", "line one\nline two"));
    assert_eq!(cache.candidates(), &["old"]);

    assert!(cache.refresh("ls", "docs/\n\n  readme.txt  \n"));
    assert_eq!(cache.candidates(), &["docs/", "readme.txt"]);
}
