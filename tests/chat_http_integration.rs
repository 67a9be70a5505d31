//! Integration tests for the chat HTTP surface.
//!
//! These tests drive the fully layered application router with a mock
//! provider and verify:
//! 1. Messages without a session id share the "default" conversation
//! 2. Distinct sessions keep independent histories
//! 3. Clearing a session resets its history
//! 4. Provider failures surface as 429 / 500 with a `detail` body

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use chat_relay::adapters::ai::{MockAIProvider, MockError};
use chat_relay::adapters::http::{build_app, ChatAppState};
use chat_relay::application::SessionRouter;
use chat_relay::domain::chat::SessionRegistry;
use chat_relay::domain::foundation::SessionId;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    app: Router,
    provider: MockAIProvider,
    registry: Arc<SessionRegistry>,
}

impl TestApp {
    fn new(provider: MockAIProvider) -> Self {
        let registry = Arc::new(SessionRegistry::new());
        let router = SessionRouter::new(Arc::new(provider.clone()), registry.clone());
        let app = build_app(
            ChatAppState::new(Arc::new(router), "index.html"),
            &[],
            Duration::from_secs(5),
        );
        Self {
            app,
            provider,
            registry,
        }
    }

    async fn post_chat(&self, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/chat")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn delete_chat(&self, session_id: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("DELETE")
            .uri(format!("/chat/{}", session_id))
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn default_session_accumulates_history() {
    let t = TestApp::new(
        MockAIProvider::new()
            .with_response("Hello!")
            .with_response("Hello again!"),
    );

    let (status, body) = t.post_chat(json!({"message": "hi"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"response": "Hello!"}));

    let (status, body) = t.post_chat(json!({"message": "again"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"response": "Hello again!"}));

    let calls = t.provider.get_calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].user_messages(), vec!["hi", "again"]);
    assert_eq!(calls[1].messages.len(), 3);
    assert!(t.registry.contains(&SessionId::default()).await);
}

#[tokio::test]
async fn sessions_do_not_share_history() {
    let t = TestApp::new(MockAIProvider::new());

    t.post_chat(json!({"message": "to a", "session_id": "a"})).await;
    t.post_chat(json!({"message": "to b", "session_id": "b"})).await;

    let calls = t.provider.get_calls();
    assert_eq!(calls[1].user_messages(), vec!["to b"]);
    assert_eq!(t.registry.len().await, 2);
}

#[tokio::test]
async fn clear_resets_history_and_reports_outcome() {
    let t = TestApp::new(MockAIProvider::new());
    t.post_chat(json!({"message": "first"})).await;

    let (status, body) = t.delete_chat("default").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Chat history cleared"}));

    let (status, body) = t.delete_chat("default").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Session not found"}));

    t.post_chat(json!({"message": "fresh start"})).await;
    let calls = t.provider.get_calls();
    assert_eq!(calls.last().unwrap().user_messages(), vec!["fresh start"]);
}

#[tokio::test]
async fn quota_failure_returns_429() {
    let t = TestApp::new(MockAIProvider::new().with_error(MockError::Api {
        status: 429,
        message: "Resource has been exhausted (e.g. check quota).".to_string(),
    }));

    let (status, body) = t.post_chat(json!({"message": "hi"})).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(
        body,
        json!({"detail": "API quota exceeded. Please wait a moment and try again."})
    );
}

#[tokio::test]
async fn upstream_failure_returns_truncated_detail() {
    let long_message = "x".repeat(500);
    let t = TestApp::new(MockAIProvider::new().with_error(MockError::Api {
        status: 500,
        message: long_message,
    }));

    let (status, body) = t.post_chat(json!({"message": "hi"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let detail = body["detail"].as_str().unwrap();
    let reported = detail
        .strip_prefix("Sorry, something went wrong: ")
        .unwrap();
    assert_eq!(reported.chars().count(), 100);
    assert!(reported.starts_with("500 xxx"));
}

#[tokio::test]
async fn failed_send_leaves_history_untouched() {
    let t = TestApp::new(
        MockAIProvider::new()
            .with_error(MockError::Network {
                message: "connection reset".to_string(),
            })
            .with_response("recovered"),
    );

    let (status, _) = t.post_chat(json!({"message": "lost"})).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, body) = t.post_chat(json!({"message": "retry"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"response": "recovered"}));
    assert_eq!(
        t.provider.get_calls()[1].user_messages(),
        vec!["retry"]
    );
}
