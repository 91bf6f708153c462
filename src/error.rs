//! 统一错误处理模块
//!
//! 定义应用级错误类型，并实现 axum 的 IntoResponse trait 以便自动转换为 HTTP 响应。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm::LlmError;

/// 上游失败时返回给客户端的固定消息
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate text. Please try again or check server logs.";

/// 应用错误枚举
#[derive(Error, Debug)]
pub enum AppError {
    /// 配置相关错误
    #[error("配置错误: {0}")]
    Config(String),

    /// 上游 LLM 调用错误
    #[error("LLM 错误: {0}")]
    Llm(#[from] LlmError),

    /// 请求参数错误
    #[error("请求错误: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // 上游与配置错误只返回固定消息，细节仅写入服务端日志
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Llm(_) | AppError::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERATION_FAILED_MESSAGE.to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

/// 便捷类型别名
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_bad_request_keeps_message() {
        let response = AppError::BadRequest("Prompt is required.".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "error": "Prompt is required." }));
    }

    #[tokio::test]
    async fn test_llm_error_hides_detail() {
        let err = AppError::Llm(LlmError::ApiError {
            status: 429,
            message: "quota exceeded for key AIza-secret".into(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "error": GENERATION_FAILED_MESSAGE }));
        assert!(!body.to_string().contains("quota"));
    }
}
