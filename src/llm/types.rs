//! LLM 类型定义

/// LLM 错误类型
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// HTTP 请求错误
    #[error("HTTP 请求失败: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API 返回错误
    #[error("API 错误 ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// 配置错误
    #[error("配置错误: {0}")]
    ConfigError(String),

    /// JSON 解析错误
    #[error("JSON 解析失败: {0}")]
    JsonError(#[from] serde_json::Error),

    /// 提示词被上游拦截
    #[error("提示词被拦截: {0}")]
    Blocked(String),

    /// 响应中没有可用文本
    #[error("响应为空: {0}")]
    EmptyResponse(String),
}
