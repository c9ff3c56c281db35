//! Property-based tests for history recall

use proptest::prelude::*;
use webterm::history::HistoryLog;

/// Recall direction
#[derive(Debug, Clone, Copy)]
enum Step {
    Up,
    Down,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![Just(Step::Up), Just(Step::Down)]
}

proptest! {
    #[test]
    fn test_cursor_stays_in_bounds(
        entries in prop::collection::vec("[a-z]{1,8}", 0..10),
        steps in prop::collection::vec(step(), 0..40),
    ) {
        let mut log = HistoryLog::new();
        for entry in &entries {
            log.record(entry.as_str());
        }

        for step in steps {
            let recalled = match step {
                Step::Up => log.recall_previous().map(str::to_string),
                Step::Down => log.recall_next().map(str::to_string),
            };

            prop_assert!(log.cursor() <= entries.len());
            match recalled {
                None => prop_assert!(entries.is_empty()),
                Some(text) if text.is_empty() => prop_assert_eq!(log.cursor(), entries.len()),
                Some(text) => prop_assert_eq!(&text, &entries[log.cursor()]),
            }
        }
    }

    #[test]
    fn test_up_n_times_reaches_oldest(entries in prop::collection::vec("[a-z]{1,8}", 1..10)) {
        let mut log = HistoryLog::new();
        for entry in &entries {
            log.record(entry.as_str());
        }

        let mut last = None;
        for _ in 0..entries.len() + 3 {
            last = log.recall_previous().map(str::to_string);
        }
        prop_assert_eq!(last.as_deref(), Some(entries[0].as_str()));
    }
}
