//! Property-based tests for line classification

use proptest::prelude::*;
use webterm::models::{classify, LineClass};
use webterm::terminal::{split_lines, OutputRenderer};

proptest! {
    #[test]
    fn test_classify_never_yields_prompt(line in "\\PC{0,80}") {
        prop_assert_ne!(classify(&line), LineClass::Prompt);
    }

    #[test]
    fn test_error_keywords_always_win(
        prefix in "[a-z ]{0,20}",
        keyword in "(error|ERROR|Unknown|uNkNoWn)",
        suffix in "[a-z/ ]{0,20}",
    ) {
        let line = format!("{}{}{}", prefix, keyword, suffix);
        prop_assert_eq!(classify(&line), LineClass::Error);
    }

    #[test]
    fn test_trailing_slash_is_directory(name in "[a-d0-9_.]{0,20}") {
        // The alphabet cannot spell either error keyword
        let line = format!("{}/", name);
        prop_assert_eq!(classify(&line), LineClass::Directory);
    }

    #[test]
    fn test_other_lines_are_files(name in "[a-d0-9_. ]{0,20}[a-d0-9_.]") {
        prop_assert_eq!(classify(&name), LineClass::File);
    }

    #[test]
    fn test_split_lines_never_contains_newlines(text in "[a-z\\r\\n]{0,100}") {
        for line in split_lines(&text) {
            prop_assert!(!line.contains('\n'));
        }
    }

    #[test]
    fn test_append_numbers_are_contiguous(chunks in prop::collection::vec("[a-z/\\n]{0,30}", 1..10)) {
        let mut renderer = OutputRenderer::new();
        for chunk in &chunks {
            renderer.append(chunk);
        }
        for (i, line) in renderer.lines().iter().enumerate() {
            prop_assert_eq!(line.line_number, i + 1);
        }
    }
}
