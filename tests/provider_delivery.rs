//! Provider wire behaviour against mock push endpoints
//!
//! The providers use a blocking HTTP client, so every service is built, used
//! and dropped on a `spawn_blocking` thread.

use cxkitty_notify::notification::{Lifecycle, NotificationConfig, NotificationFactory};
use cxkitty_notify::{AppError, AppResult};
use serde_json::json;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Harness {
    // Keeps the secondary config path pointing at an empty directory
    _dir: TempDir,
    factory: NotificationFactory,
}

impl Harness {
    fn new() -> Self {
        Self::with_timeout(Duration::from_secs(5))
    }

    fn with_timeout(timeout: Duration) -> Self {
        let dir = TempDir::new().unwrap();
        let factory = NotificationFactory::new()
            .with_secondary_path(dir.path().join("config.ini"))
            .with_timeout(timeout);
        Self { _dir: dir, factory }
    }

    /// Sends through the never-failing path and reports the final lifecycle
    async fn send(&self, provider: &str, url: String, message: &'static str) -> Lifecycle {
        let factory = self.factory.clone();
        let config = provider_config(provider, url);
        tokio::task::spawn_blocking(move || {
            let service = factory.create(Some(config));
            assert_eq!(service.lifecycle(), Lifecycle::Active);
            service.send(message);
            service.lifecycle()
        })
        .await
        .unwrap()
    }

    /// Sends once and returns the provider outcome
    async fn send_raw(&self, provider: &str, url: String, message: &'static str) -> AppResult<()> {
        let factory = self.factory.clone();
        let config = provider_config(provider, url);
        tokio::task::spawn_blocking(move || factory.create(Some(config)).send_raw(message))
            .await
            .unwrap()
    }
}

fn provider_config(provider: &str, url: String) -> NotificationConfig {
    [("provider", provider.to_string()), ("url", url)]
        .into_iter()
        .collect()
}

#[tokio::test]
async fn test_server_chan_posts_json_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/SCT123.send"))
        .and(header("content-type", "application/json;charset=utf-8"))
        .and(body_json(json!({"text": "CxKitty通知", "desp": "hello"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let harness = Harness::new();
    let url = format!("{}/SCT123.send", server.uri());
    let lifecycle = harness.send("ServerChan", url, "hello").await;

    assert_eq!(lifecycle, Lifecycle::Active);
    server.verify().await;
}

#[tokio::test]
async fn test_server_chan_reports_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"code": 1, "message": "bad"})),
        )
        .expect(2)
        .mount(&server)
        .await;

    let harness = Harness::new();
    let url = format!("{}/SCT123.send", server.uri());

    let err = harness.send_raw("ServerChan", url.clone(), "hello").await.unwrap_err();
    assert!(matches!(err, AppError::ProviderRejected { ref reason, .. } if reason == "bad"));

    // The failure is logged, never raised, and the service stays usable
    assert_eq!(harness.send("ServerChan", url, "hello").await, Lifecycle::Active);
}

#[tokio::test]
async fn test_qmsg_sends_message_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/send/key"))
        .and(query_param("msg", "hello"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let harness = Harness::new();
    let url = format!("{}/send/key", server.uri());
    harness.send_raw("Qmsg", url, "hello").await.unwrap();
}

#[tokio::test]
async fn test_qmsg_failure_carries_reason() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": false, "reason": "x"})),
        )
        .mount(&server)
        .await;

    let harness = Harness::new();
    let url = format!("{}/send/key", server.uri());

    let err = harness.send_raw("Qmsg", url.clone(), "hello").await.unwrap_err();
    assert_eq!(err.to_string(), "Qmsg push failed: x");
    assert!(err.is_delivery_failure());

    assert_eq!(harness.send("Qmsg", url, "hello").await, Lifecycle::Active);
}

#[tokio::test]
async fn test_bark_encodes_title_and_message_in_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bk/CxKitty%E9%80%9A%E7%9F%A5/hello%20world"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200})))
        .expect(1)
        .mount(&server)
        .await;

    let harness = Harness::new();
    let url = format!("{}/bk", server.uri());
    harness.send_raw("Bark", url, "hello world").await.unwrap();
}

#[tokio::test]
async fn test_bark_failure_code_is_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"code": 400, "message": "bad key"})),
        )
        .mount(&server)
        .await;

    let harness = Harness::new();
    let err = harness
        .send_raw("Bark", format!("{}/bk/", server.uri()), "hello")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Bark push failed: bad key");
}

#[tokio::test]
async fn test_error_status_is_delivery_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let harness = Harness::new();
    let url = format!("{}/SCT123.send", server.uri());

    let err = harness.send_raw("ServerChan", url.clone(), "hello").await.unwrap_err();
    assert!(matches!(err, AppError::HttpStatus { status_code: 500, .. }));

    assert_eq!(harness.send("ServerChan", url, "hello").await, Lifecycle::Active);
}

#[tokio::test]
async fn test_malformed_body_is_delivery_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let harness = Harness::new();
    let url = format!("{}/send/key", server.uri());

    let err = harness.send_raw("Qmsg", url.clone(), "hello").await.unwrap_err();
    match &err {
        AppError::InvalidResponse { provider, context, .. } => {
            assert_eq!(provider, "Qmsg");
            assert!(context.contains("<html>oops</html>"));
        }
        other => panic!("Expected InvalidResponse, got {other:?}"),
    }

    assert_eq!(harness.send("Qmsg", url, "hello").await, Lifecycle::Active);
}

#[tokio::test]
async fn test_slow_endpoint_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"code": 0}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let harness = Harness::with_timeout(Duration::from_millis(200));
    let url = format!("{}/SCT123.send", server.uri());

    let err = harness.send_raw("ServerChan", url.clone(), "hello").await.unwrap_err();
    assert!(matches!(err, AppError::NetworkTimeout { .. }));

    assert_eq!(harness.send("ServerChan", url, "hello").await, Lifecycle::Active);
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_error() {
    let harness = Harness::new();
    let url = "http://127.0.0.1:1/send".to_string();

    let err = harness.send_raw("Qmsg", url.clone(), "hello").await.unwrap_err();
    assert!(matches!(err, AppError::HttpRequest { .. }));
    assert_eq!(err.category(), "network");

    assert_eq!(harness.send("Qmsg", url, "hello").await, Lifecycle::Active);
}
