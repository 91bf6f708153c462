//! API 路由模块

mod assets;
mod generate;

pub use assets::asset_routes;
pub use generate::generate_routes;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// 健康检查处理器
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// 创建完整应用路由：API、健康检查与静态资源
pub fn create_app(state: Arc<AppState>, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .merge(generate_routes())
        .merge(asset_routes(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{spawn_stub_upstream, GeminiClient};
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use std::time::Duration;
    use tower::ServiceExt;

    fn public_dir() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("public")
    }

    async fn app_with_upstream(base_url: &str) -> Router {
        let client = GeminiClient::new("test-key", base_url, "gemini-test", Duration::from_secs(5))
            .unwrap();
        let state = Arc::new(AppState::new(Arc::new(client)));
        create_app(state, public_dir())
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn test_end_to_end_generate_text() {
        let base_url = spawn_stub_upstream(
            StatusCode::OK,
            json!({"candidates": [{"content": {"parts": [{"text": "hi there"}]}}]}),
        )
        .await;
        let app = app_with_upstream(&base_url).await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/generate-text")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"prompt":"hello"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "generatedText": "hi there" }));
    }

    #[tokio::test]
    async fn test_end_to_end_upstream_error() {
        let base_url = spawn_stub_upstream(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"error": {"message": "backend exploded"}}),
        )
        .await;
        let app = app_with_upstream(&base_url).await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/generate-text")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"prompt":"hello"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("Failed to generate text."));
        assert!(!text.contains("backend exploded"));
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = app_with_upstream("http://127.0.0.1:9").await;
        let (status, body) = get(app, "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_serves_static_assets() {
        let app = app_with_upstream("http://127.0.0.1:9").await;

        let (status, body) = get(app.clone(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("id=\"promptInput\""));

        let (status, body) = get(app.clone(), "/script.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("/generate-text"));

        let (status, _) = get(app.clone(), "/style.css").await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = get(app, "/missing.js").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
