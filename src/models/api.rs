//! REST API 请求/响应模型

use serde::{Deserialize, Serialize};

/// 文本生成请求
#[derive(Debug, Deserialize)]
pub struct GenerateTextRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

/// 文本生成响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTextResponse {
    pub generated_text: String,
}
