//! 文本生成端点

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::error::{AppError, AppResult};
use crate::models::{GenerateTextRequest, GenerateTextResponse};
use crate::state::AppState;

pub const PROMPT_REQUIRED_MESSAGE: &str = "Prompt is required.";

/// 转发提示词到上游并返回生成文本
async fn generate_text(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateTextRequest>, JsonRejection>,
) -> AppResult<Json<GenerateTextResponse>> {
    // 无法解析的请求体同样视为缺少提示词；非空提示词不做裁剪
    let prompt = match payload {
        Ok(Json(req)) => req.prompt.filter(|p| !p.is_empty()),
        Err(rejection) => {
            warn!("Rejected generate-text body: {}", rejection.body_text());
            None
        }
    };

    let Some(prompt) = prompt else {
        return Err(AppError::BadRequest(PROMPT_REQUIRED_MESSAGE.to_string()));
    };

    let generated_text = state.generator.generate(&prompt).await.map_err(|e| {
        error!("Error calling Gemini API: {}", e);
        AppError::Llm(e)
    })?;

    info!(
        "Generation completed: prompt_len={}, response_len={}",
        prompt.len(),
        generated_text.len()
    );

    Ok(Json(GenerateTextResponse { generated_text }))
}

/// 创建文本生成路由
pub fn generate_routes() -> Router<Arc<AppState>> {
    Router::new().route("/generate-text", post(generate_text))
}
