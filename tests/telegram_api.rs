// tests/telegram_api.rs

use std::time::Duration;

use serde_json::json;
use taskbot::errors::TaskbotError;
use taskbot::notify::{Notifier, TelegramNotifier};
use taskbot_test_utils::builders::test_config;
use taskbot_test_utils::init_tracing;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEND_PATH: &str = "/bot123456:TEST-TOKEN/sendMessage";

#[tokio::test]
async fn test_posts_markdown_message_to_configured_chat() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "chat_id": "42",
            "text": "🚀 Started *Backup* task with PID `99`",
            "parse_mode": "Markdown",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "result": { "message_id": 1 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = TelegramNotifier::new(&test_config(&server.uri())).unwrap();
    notifier
        .notify("🚀 Started *Backup* task with PID `99`")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_api_error_becomes_delivery_error_with_description() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: chat not found"
        })))
        .mount(&server)
        .await;

    let notifier = TelegramNotifier::new(&test_config(&server.uri())).unwrap();
    let err = notifier.notify("hello").await.unwrap_err();

    match err {
        TaskbotError::Delivery(msg) => {
            assert!(msg.contains("400"));
            assert!(msg.contains("chat not found"));
        }
        other => panic!("Expected Delivery error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_ok_false_with_http_200_is_still_an_error() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": false })))
        .mount(&server)
        .await;

    let notifier = TelegramNotifier::new(&test_config(&server.uri())).unwrap();
    let err = notifier.notify("hello").await.unwrap_err();

    assert!(matches!(err, TaskbotError::Delivery(_)));
}

#[tokio::test]
async fn test_non_json_response_is_delivery_error() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let notifier = TelegramNotifier::new(&test_config(&server.uri())).unwrap();
    let err = notifier.notify("hello").await.unwrap_err();

    match err {
        TaskbotError::Delivery(msg) => assert!(msg.contains("502")),
        other => panic!("Expected Delivery error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_network_error_does_not_leak_token() {
    init_tracing();

    // Nothing listens on port 9 on a test machine.
    let mut cfg = test_config("http://127.0.0.1:9");
    cfg.http_timeout = Duration::from_secs(2);

    let notifier = TelegramNotifier::new(&cfg).unwrap();
    let err = notifier.notify("hello").await.unwrap_err();

    assert!(matches!(err, TaskbotError::Delivery(_)));
    assert!(!err.to_string().contains("TEST-TOKEN"));
    assert!(!format!("{notifier:?}").contains("TEST-TOKEN"));
}
