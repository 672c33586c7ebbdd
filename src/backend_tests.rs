//! Backend tests against a mock HTTP store

use crossbeam_channel::{unbounded, Receiver, Sender};
use reqwest::Client;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::error::ChatError;
use crate::message::OutgoingMessage;
use crate::protocol::{BackendAction, GuiEvent};
use crate::store::HttpChatStore;

const EVENT_TIMEOUT: Duration = Duration::from_secs(5);

fn spawn_backend(
    base_url: String,
    poll_interval: Duration,
) -> (Sender<BackendAction>, Receiver<GuiEvent>, JoinHandle<()>) {
    let (action_tx, action_rx) = unbounded::<BackendAction>();
    let (event_tx, event_rx) = unbounded::<GuiEvent>();
    let store = Arc::new(HttpChatStore::new(Client::new(), base_url));

    let handle = std::thread::spawn(move || {
        crate::backend::run_backend(store, poll_interval, action_rx, event_tx);
    });
    (action_tx, event_rx, handle)
}

fn shutdown(action_tx: Sender<BackendAction>, handle: JoinHandle<()>) {
    action_tx.send(BackendAction::Shutdown).unwrap();
    handle.join().unwrap();
}

fn outgoing() -> OutgoingMessage {
    OutgoingMessage {
        from: "Alice".into(),
        to: "Bob".into(),
        body: "hi".into(),
    }
}

async fn mount_list(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.to_string()))
        .mount(server)
        .await;
}

async fn get_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.method == wiremock::http::Method::GET)
        .count()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_fetches_on_activation() {
    let server = MockServer::start().await;
    mount_list(
        &server,
        r#"[{"_id": "1", "from": "Bob", "to": "Alice", "msg": "hello", "timestamp": "2024-06-04T13:05:00Z"}]"#,
    )
    .await;

    let (action_tx, event_rx, handle) = spawn_backend(server.uri(), Duration::from_secs(60));

    match event_rx.recv_timeout(EVENT_TIMEOUT) {
        Ok(GuiEvent::MessagesLoaded(messages)) => {
            assert_eq!(messages.len(), 1);
            assert_eq!(messages[0].body, "hello");
        }
        other => panic!("Expected MessagesLoaded, got {:?}", other),
    }

    shutdown(action_tx, handle);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_polls_repeatedly() {
    let server = MockServer::start().await;
    mount_list(&server, "[]").await;

    let (action_tx, event_rx, handle) = spawn_backend(server.uri(), Duration::from_millis(100));

    for _ in 0..3 {
        match event_rx.recv_timeout(EVENT_TIMEOUT) {
            Ok(GuiEvent::MessagesLoaded(messages)) => assert!(messages.is_empty()),
            other => panic!("Expected MessagesLoaded, got {:?}", other),
        }
    }

    shutdown(action_tx, handle);
    assert!(get_count(&server).await >= 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_poll_with_undated_record_still_loads() {
    let server = MockServer::start().await;
    mount_list(
        &server,
        r#"[
            {"_id": "1", "from": "Bob", "to": "Alice", "msg": "old row", "timestamp": null},
            {"_id": "2", "from": "Bob", "to": "Alice", "msg": "new row", "timestamp": "2024-06-04T13:05:00Z"}
        ]"#,
    )
    .await;

    let (action_tx, event_rx, handle) = spawn_backend(server.uri(), Duration::from_secs(60));

    match event_rx.recv_timeout(EVENT_TIMEOUT) {
        Ok(GuiEvent::MessagesLoaded(messages)) => {
            assert_eq!(messages.len(), 2);
            assert!(messages[0].timestamp.is_none());
            assert_eq!(messages[1].body, "new row");
        }
        other => panic!("Expected MessagesLoaded, got {:?}", other),
    }

    shutdown(action_tx, handle);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_failed_poll_is_diagnostic_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (action_tx, event_rx, handle) = spawn_backend(server.uri(), Duration::from_secs(60));

    match event_rx.recv_timeout(EVENT_TIMEOUT) {
        Ok(GuiEvent::FetchFailed(_)) => {}
        other => panic!("Expected FetchFailed, got {:?}", other),
    }

    shutdown(action_tx, handle);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_successful_send_triggers_fetch() {
    let server = MockServer::start().await;
    mount_list(
        &server,
        r#"[{"_id": "1", "from": "Alice", "to": "Bob", "msg": "hi", "timestamp": "2024-06-04T13:05:00Z"}]"#,
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let (action_tx, event_rx, handle) = spawn_backend(server.uri(), Duration::from_secs(60));

    // Activation fetch
    assert!(matches!(
        event_rx.recv_timeout(EVENT_TIMEOUT),
        Ok(GuiEvent::MessagesLoaded(_))
    ));

    action_tx.send(BackendAction::Send(outgoing())).unwrap();
    assert!(matches!(
        event_rx.recv_timeout(EVENT_TIMEOUT),
        Ok(GuiEvent::SendSucceeded)
    ));
    match event_rx.recv_timeout(EVENT_TIMEOUT) {
        Ok(GuiEvent::MessagesLoaded(messages)) => assert_eq!(messages[0].from, "Alice"),
        other => panic!("Expected follow-up MessagesLoaded, got {:?}", other),
    }

    shutdown(action_tx, handle);
    assert_eq!(get_count(&server).await, 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_rejected_send_reports_generic_error() {
    let server = MockServer::start().await;
    mount_list(&server, "[]").await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(422).set_body_string("from is required"))
        .mount(&server)
        .await;

    let (action_tx, event_rx, handle) = spawn_backend(server.uri(), Duration::from_secs(60));
    assert!(matches!(
        event_rx.recv_timeout(EVENT_TIMEOUT),
        Ok(GuiEvent::MessagesLoaded(_))
    ));

    action_tx.send(BackendAction::Send(outgoing())).unwrap();
    match event_rx.recv_timeout(EVENT_TIMEOUT) {
        Ok(GuiEvent::SendFailed(err)) => {
            assert_eq!(err, ChatError::SendRejected);
            assert_eq!(err.to_string(), "Failed to send message");
        }
        other => panic!("Expected SendFailed, got {:?}", other),
    }

    shutdown(action_tx, handle);
    // No follow-up fetch after a failed send
    assert_eq!(get_count(&server).await, 1);
}

#[test]
fn test_unreachable_store_send_fails() {
    // Nothing listens on the discard port
    let (action_tx, event_rx, handle) =
        spawn_backend("http://127.0.0.1:9".into(), Duration::from_secs(60));

    action_tx.send(BackendAction::Send(outgoing())).unwrap();

    let mut saw_send_failed = false;
    while let Ok(event) = event_rx.recv_timeout(EVENT_TIMEOUT) {
        match event {
            GuiEvent::SendFailed(err) => {
                assert_eq!(err, ChatError::SendFailed);
                saw_send_failed = true;
                break;
            }
            GuiEvent::FetchFailed(_) => continue,
            other => panic!("Unexpected event {:?}", other),
        }
    }
    assert!(saw_send_failed);

    shutdown(action_tx, handle);
}

#[test]
fn test_backend_exits_when_ui_disconnects() {
    let (action_tx, _event_rx, handle) =
        spawn_backend("http://127.0.0.1:9".into(), Duration::from_secs(60));

    drop(action_tx);
    handle.join().unwrap();
}
