//! Gemini generateContent API 实现

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::types::LlmError;

/// Gemini 请求载荷
#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

/// Gemini 响应
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize, Debug)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// 提取第一个候选项的全部文本片段
    pub(super) fn into_text(self) -> Result<String, LlmError> {
        let candidate = match self.candidates.into_iter().next() {
            Some(c) => c,
            None => {
                return Err(match self.prompt_feedback.and_then(|f| f.block_reason) {
                    Some(reason) => LlmError::Blocked(reason),
                    None => LlmError::EmptyResponse("no candidates".to_string()),
                });
            }
        };

        let texts: Vec<String> = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        if texts.is_empty() {
            let reason = candidate
                .finish_reason
                .unwrap_or_else(|| "no text parts".to_string());
            return Err(LlmError::EmptyResponse(reason));
        }

        Ok(texts.concat())
    }
}

/// 调用 Gemini generateContent 并返回生成的文本
pub async fn generate_content(
    client: &Client,
    api_key: &str,
    endpoint: &str,
    prompt: &str,
) -> Result<String, LlmError> {
    let payload = GenerateContentRequest {
        contents: vec![Content {
            role: "user",
            parts: vec![RequestPart { text: prompt }],
        }],
    };

    debug!("Gemini API request: endpoint={}, prompt_len={}", endpoint, prompt.len());

    let response = client
        .post(endpoint)
        .header("x-goog-api-key", api_key)
        .json(&payload)
        .send()
        .await?;

    // 检查状态码
    let status = response.status();
    if !status.is_success() {
        let status_code = status.as_u16();
        let error_text = response.text().await.unwrap_or_default();
        error!(
            "Gemini API error: status={}, body={}",
            status_code,
            error_text.chars().take(500).collect::<String>()
        );
        return Err(LlmError::ApiError {
            status: status_code,
            message: error_text,
        });
    }

    let body = response.text().await?;
    let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
    parsed.into_text()
}
