//! Unit Tests for Line Classification and Output Rendering

use webterm::models::{classify, LineClass};
use webterm::terminal::{split_lines, OutputRenderer};

#[test]
fn test_error_lines() {
    assert_eq!(classify("Error: connection refused"), LineClass::Error);
    assert_eq!(classify("Unknown command foo"), LineClass::Error);
    assert_eq!(classify("some ERROR happened"), LineClass::Error);
    assert_eq!(classify("UNKNOWN"), LineClass::Error);
}

#[test]
fn test_error_wins_over_directory() {
    assert_eq!(classify("errors/"), LineClass::Error);
    assert_eq!(classify("unknown_dir/"), LineClass::Error);
}

#[test]
fn test_directory_lines() {
    assert_eq!(classify("docs/"), LineClass::Directory);
    assert_eq!(classify("/"), LineClass::Directory);
    assert_eq!(classify("a b c/"), LineClass::Directory);
}

#[test]
fn test_file_lines() {
    assert_eq!(classify("readme.txt"), LineClass::File);
    assert_eq!(classify(""), LineClass::File);
    assert_eq!(classify("docs/ "), LineClass::File);
    assert_eq!(classify("/etc/passwd"), LineClass::File);
}

#[test]
fn test_split_lines() {
    assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
    assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
    assert_eq!(split_lines("a\r\nb\r\n"), vec!["a", "b"]);
    assert_eq!(split_lines(""), vec![""]);
    assert_eq!(split_lines("\n"), vec![""]);
    assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
}

#[test]
fn test_append_numbers_and_classifies() {
    let mut renderer = OutputRenderer::new();
    assert_eq!(renderer.append("docs/\nreadme.txt"), 2);
    assert_eq!(renderer.append("Unknown command x"), 1);

    let lines = renderer.lines();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].line_number, 1);
    assert_eq!(lines[2].line_number, 3);
    assert_eq!(lines[0].class, LineClass::Directory);
    assert_eq!(lines[1].class, LineClass::File);
    assert!(lines[2].is_error());
}

#[test]
fn test_scroll_request_is_consumed_once() {
    let mut renderer = OutputRenderer::new();
    assert!(!renderer.take_scroll_request());

    renderer.append("x");
    assert!(renderer.take_scroll_request());
    assert!(!renderer.take_scroll_request());
}

#[test]
fn test_echoed_prompt_is_never_reclassified() {
    let mut renderer = OutputRenderer::new();
    renderer.echo_prompt("> ", "cat error.log");

    let line = renderer.last().unwrap();
    assert_eq!(line.text, "> cat error.log");
    assert_eq!(line.class, LineClass::Prompt);
}
