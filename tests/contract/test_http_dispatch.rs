//! Contract Tests for the HTTP Dispatcher
//!
//! Contract: `POST {endpoint}/api/command` with `{"command": "..."}`;
//! the reply's `output` field is the command output, a missing `output` is
//! empty output, and anything that prevents a reply is a failure.

use std::io::Read;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use webterm::config::ClientConfig;
use webterm::{CommandDispatcher, DispatchResult, HttpDispatcher};

/// A request the mock executor received
#[derive(Debug, Clone)]
struct Received {
    method: String,
    url: String,
    content_type: Option<String>,
    body: String,
}

/// Start a mock executor answering every request with `status` and `body`
///
/// Returns the stop sender, the base URL, and the log of received requests.
fn start_mock_executor(
    status: u16,
    body: &str,
) -> (mpsc::Sender<()>, String, Arc<Mutex<Vec<Received>>>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("Failed to start test server");
    let port = server.server_addr().to_ip().unwrap().port();
    let url = format!("http://127.0.0.1:{}", port);

    let (stop_tx, stop_rx) = mpsc::channel::<()>();
    let received = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&received);
    let body = body.to_string();

    thread::spawn(move || loop {
        if stop_rx.try_recv().is_ok() {
            break;
        }

        match server.recv_timeout(Duration::from_millis(100)) {
            Ok(Some(mut request)) => {
                let mut content = String::new();
                let _ = request.as_reader().read_to_string(&mut content);
                let content_type = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Content-Type"))
                    .map(|h| h.value.to_string());
                log.lock().unwrap().push(Received {
                    method: request.method().to_string(),
                    url: request.url().to_string(),
                    content_type,
                    body: content,
                });

                let response = tiny_http::Response::from_string(body.clone())
                    .with_status_code(status)
                    .with_header(
                        tiny_http::Header::from_bytes(
                            &b"Content-Type"[..],
                            &b"application/json"[..],
                        )
                        .unwrap(),
                    );
                let _ = request.respond(response);
            }
            Ok(None) => {}
            Err(_) => break,
        }
    });

    (stop_tx, url, received)
}

#[tokio::test]
async fn test_request_shape() {
    let (stop, url, received) = start_mock_executor(200, r#"{"output":"ok"}"#);
    let dispatcher = HttpDispatcher::new(&url);

    dispatcher.dispatch("ls -la").await;

    let requests = received.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.url, "/api/command");
    assert_eq!(request.content_type.as_deref(), Some("application/json"));

    let json: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(json, serde_json::json!({ "command": "ls -la" }));

    let _ = stop.send(());
}

#[tokio::test]
async fn test_output_is_returned() {
    let (stop, url, _) = start_mock_executor(200, r#"{"ok":true,"output":"docs/\nreadme.txt"}"#);
    let dispatcher = HttpDispatcher::new(&url);

    assert_eq!(
        dispatcher.dispatch("ls").await,
        DispatchResult::Success("docs/\nreadme.txt".to_string())
    );
    let _ = stop.send(());
}

#[tokio::test]
async fn test_missing_output_is_empty() {
    let (stop, url, _) = start_mock_executor(200, r#"{"ok":true}"#);
    let dispatcher = HttpDispatcher::new(&url);

    assert_eq!(
        dispatcher.dispatch("touch a").await,
        DispatchResult::Success(String::new())
    );

    let _ = stop.send(());
}

#[tokio::test]
async fn test_null_output_is_empty() {
    let (stop, url, _) = start_mock_executor(200, r#"{"output":null}"#);
    let dispatcher = HttpDispatcher::new(&url);

    assert_eq!(
        dispatcher.dispatch("touch a").await,
        DispatchResult::Success(String::new())
    );

    let _ = stop.send(());
}

#[tokio::test]
async fn test_non_json_body_is_failure() {
    let (stop, url, _) = start_mock_executor(200, "<html>oops</html>");
    let dispatcher = HttpDispatcher::new(&url);

    match dispatcher.dispatch("ls").await {
        DispatchResult::Failure(reason) => assert!(reason.contains("HTTP 200"), "got {}", reason),
        other => panic!("expected failure, got {:?}", other),
    }

    let _ = stop.send(());
}

#[tokio::test]
async fn test_error_status_with_json_body_renders_output() {
    let (stop, url, _) =
        start_mock_executor(400, r#"{"ok":false,"output":"No command provided"}"#);
    let dispatcher = HttpDispatcher::new(&url);

    assert_eq!(
        dispatcher.dispatch(" ").await,
        DispatchResult::Success("No command provided".to_string())
    );

    let _ = stop.send(());
}

#[tokio::test]
async fn test_error_status_without_json_is_failure() {
    let (stop, url, _) = start_mock_executor(500, "Internal Server Error");
    let dispatcher = HttpDispatcher::new(&url);

    match dispatcher.dispatch("ls").await {
        DispatchResult::Failure(reason) => assert!(reason.contains("500"), "got {}", reason),
        other => panic!("expected failure, got {:?}", other),
    }

    let _ = stop.send(());
}

#[tokio::test]
async fn test_connection_refused_is_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let dispatcher = HttpDispatcher::new(&format!("http://127.0.0.1:{}", port));
    match dispatcher.dispatch("ls").await {
        DispatchResult::Failure(reason) => assert!(reason.contains("ls"), "got {}", reason),
        other => panic!("expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_configured_timeout_bounds_a_hung_executor() {
    // Accepts the connection but never answers
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let _hold = thread::spawn(move || {
        let _conn = listener.accept();
        thread::sleep(Duration::from_secs(5));
    });

    let config = ClientConfig {
        endpoint: format!("http://127.0.0.1:{}", port),
        request_timeout_secs: Some(1),
    };
    let dispatcher = HttpDispatcher::from_config(&config);

    let result = tokio::time::timeout(Duration::from_secs(4), dispatcher.dispatch("ls"))
        .await
        .expect("dispatch should give up on its own");
    assert!(!result.is_success());
}
