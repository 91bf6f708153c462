//! 上游文本生成客户端

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

use super::format::build_generate_endpoint;
use super::gemini::generate_content;
use super::types::LlmError;

/// 文本生成抽象
///
/// 处理器只依赖此 trait，测试中可替换为桩实现
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// 以原始提示词调用上游，返回生成的文本
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Gemini 客户端
pub struct GeminiClient {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
}

impl GeminiClient {
    /// 创建新的 Gemini 客户端
    pub fn new(
        api_key: impl Into<String>,
        base_url: &str,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(LlmError::ConfigError("API Key is required".to_string()));
        }
        let model = model.into();

        // 构建 HTTP 客户端
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(5)
            .build()
            .map_err(LlmError::HttpError)?;

        Ok(Self {
            client,
            api_key,
            endpoint: build_generate_endpoint(base_url, &model),
            model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        info!("LLM request: model={}", self.model);
        generate_content(&self.client, &self.api_key, &self.endpoint, prompt).await
    }
}
