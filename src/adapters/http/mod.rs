//! HTTP adapters - REST API implementations.
//!
//! `build_app` assembles the chat routes with the cross-cutting tower layers.

pub mod chat;

use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use chat::{chat_router, ChatAppState};

/// Builds the CORS layer.
///
/// With no origins configured every origin is allowed; otherwise only the
/// listed ones. Entries that are not valid header values are skipped.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let values: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(values)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Assembles the full application router.
pub fn build_app(state: ChatAppState, cors_origins: &[String], request_timeout: Duration) -> Router {
    chat_router(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::application::handlers::chat::SessionRouter;
    use crate::domain::chat::SessionRegistry;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(origins: &[String]) -> Router {
        let router = SessionRouter::new(
            Arc::new(MockAIProvider::new()),
            Arc::new(SessionRegistry::new()),
        );
        build_app(
            ChatAppState::new(Arc::new(router), "index.html"),
            origins,
            Duration::from_secs(5),
        )
    }

    fn health_from(origin: &str) -> Request<Body> {
        Request::builder()
            .uri("/health")
            .header("origin", origin)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn permissive_cors_when_no_origins_configured() {
        let response = app(&[]).oneshot(health_from("http://anywhere.test")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }

    #[tokio::test]
    async fn restricted_cors_echoes_listed_origin_only() {
        let origins = vec!["http://localhost:5173".to_string()];

        let allowed = app(&origins)
            .oneshot(health_from("http://localhost:5173"))
            .await
            .unwrap();
        assert_eq!(
            allowed.headers()["access-control-allow-origin"],
            "http://localhost:5173"
        );

        let denied = app(&origins)
            .oneshot(health_from("http://evil.test"))
            .await
            .unwrap();
        assert!(denied.headers().get("access-control-allow-origin").is_none());
    }
}
