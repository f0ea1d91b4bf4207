// tests/binary_exit_codes.rs
#![cfg(unix)]

use std::process::Output;

use serde_json::json;
use tempfile::TempDir;
use tokio::process::Command;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn taskbot() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_taskbot"));
    for key in [
        "BOT_TOKEN",
        "CHAT_ID",
        "TELEGRAM_BOT_TOKEN",
        "TELEGRAM_CHAT_ID",
        "TASKBOT_API_URL",
        "TASKBOT_INTERPRETER",
        "TASKBOT_LOG",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

async fn run(cmd: &mut Command) -> Output {
    tokio::time::timeout(std::time::Duration::from_secs(20), cmd.output())
        .await
        .expect("taskbot did not finish in time")
        .expect("failed to run taskbot binary")
}

async fn telegram_ok() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_missing_credentials_exit_before_spawning() {
    let dir = TempDir::new().unwrap();
    let marker = dir.path().join("ran");

    let out = run(taskbot()
        .env("CHAT_ID", "42")
        .args(["-s", "Touch", &format!("touch {}", marker.display())]))
    .await;

    assert_eq!(out.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&out.stderr).contains("BOT_TOKEN"));
    assert!(!marker.exists());
}

#[tokio::test]
async fn test_blank_label_is_usage_error_even_without_credentials() {
    let out = run(taskbot().args(["-s", "   ", "true"])).await;

    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("label"));
    assert!(stderr.contains("Usage"));
}

#[tokio::test]
async fn test_both_modes_is_usage_error_with_no_messages() {
    let server = telegram_ok().await;

    let out = run(taskbot()
        .env("BOT_TOKEN", "1:t")
        .env("CHAT_ID", "42")
        .env("TASKBOT_API_URL", server.uri())
        .args(["-p", "-s", "Build", "true"]))
    .await;

    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_task_sends_two_messages_and_exits_zero() {
    let server = telegram_ok().await;

    let out = run(taskbot()
        .env("BOT_TOKEN", "1:t")
        .env("CHAT_ID", "42")
        .env("TASKBOT_API_URL", server.uri())
        .args(["-s", "Backup", "sleep 1 && exit 3"]))
    .await;

    assert_eq!(out.status.code(), Some(0));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);

    let texts: Vec<String> = requests
        .iter()
        .map(|r| {
            let body: serde_json::Value = serde_json::from_slice(&r.body).unwrap();
            body["text"].as_str().unwrap().to_string()
        })
        .collect();

    assert!(texts[0].starts_with("🚀 Started *Backup* task with PID `"));
    assert_eq!(texts[1], "⚠️ *Backup* was interrupted. Exit code: 3");
}

#[tokio::test]
async fn test_delivery_failure_exit_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "ok": false,
            "error_code": 401,
            "description": "Unauthorized"
        })))
        .mount(&server)
        .await;

    let out = run(taskbot()
        .env("BOT_TOKEN", "1:t")
        .env("CHAT_ID", "42")
        .env("TASKBOT_API_URL", server.uri())
        .args(["-s", "Quick", "true"]))
    .await;

    assert_eq!(out.status.code(), Some(5));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Unauthorized"));
}
