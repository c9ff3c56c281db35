//! Integration Tests for Error Handling
//!
//! These tests verify that failures stay inside the session: an unreachable
//! executor becomes an error line, bad configuration is reported, and the
//! controller rejects out-of-order results.

use std::net::TcpListener;
use std::sync::Arc;

use tempfile::tempdir;
use webterm::config::loader::ConfigLoader;
use webterm::models::LineClass;
use webterm::{DispatchResult, Error, HttpDispatcher, InputController, Key, KeyOutcome};

/// An address nothing is listening on
fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

#[tokio::test]
async fn test_unreachable_executor_is_error_line() {
    let dispatcher = Arc::new(HttpDispatcher::new(&closed_endpoint()));
    let mut controller = InputController::new(dispatcher);

    controller.submit_line("ls").await;

    let last = controller.renderer().last().unwrap();
    assert!(last.text.starts_with("Error: "), "got {:?}", last.text);
    assert_eq!(last.class, LineClass::Error);

    // The session carries on
    assert!(controller.is_awaiting_input());
    assert_eq!(controller.history().entries(), &["ls".to_string()]);
}

#[tokio::test]
async fn test_session_continues_after_failure() {
    let dispatcher = Arc::new(HttpDispatcher::new(&closed_endpoint()));
    let mut controller = InputController::new(dispatcher);

    controller.submit_line("ls").await;
    let outcome = controller.submit_line("pwd").await;

    assert!(matches!(outcome, KeyOutcome::Submit(_)));
    assert_eq!(controller.history().len(), 2);
    assert_eq!(controller.handle_key(Key::ArrowUp), KeyOutcome::Recalled);
    assert_eq!(controller.input_text(), Some("pwd"));
}

#[test]
fn test_settle_requires_command_in_flight() {
    let mut controller = InputController::new(Arc::new(HttpDispatcher::new(&closed_endpoint())));
    let result = controller.settle(DispatchResult::Success("stray".to_string()));

    assert!(matches!(result, Err(Error::NoCommandInFlight)));
    assert!(controller.renderer().is_empty());
}

#[test]
fn test_failure_text_rendering() {
    let failure = DispatchResult::Failure("timed out".to_string());
    assert_eq!(failure.render_text(), "Error: timed out");
    assert!(!failure.is_success());
}

#[test]
fn test_invalid_config_file_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[client]\nendpoint = \"\"\n").unwrap();

    let result = ConfigLoader::load_from_file(&path);
    match result {
        Err(Error::ConfigValidationFailed { field, .. }) => assert_eq!(field, "client.endpoint"),
        other => panic!("expected validation failure, got {:?}", other),
    }
}

#[test]
fn test_malformed_json_config_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let error = ConfigLoader::load_from_file(&path).unwrap_err();
    assert!(matches!(error, Error::ConfigParseFailed { ref format, .. } if format == "JSON"));
    assert!(error.to_string().contains("JSON"));
}
