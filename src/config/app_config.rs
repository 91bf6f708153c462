//! 应用配置管理
//!
//! 启动时从进程环境变量读取一次配置，之后只读共享。

use std::time::Duration;

use crate::error::AppError;

/// 应用配置结构体
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Gemini API 密钥
    pub api_key: String,

    /// Gemini API 基础 URL
    pub base_url: String,

    /// 模型名称
    pub model: String,

    /// 监听端口
    pub port: u16,

    /// 上游请求超时
    pub timeout: Duration,

    /// 静态资源目录
    pub static_dir: String,
}

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.5-pro".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_static_dir() -> String {
    "public".to_string()
}

impl AppConfig {
    /// 从进程环境变量加载配置
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 通过查找函数加载配置
    ///
    /// 空白值视为未设置；API 密钥缺失时返回错误。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get(API_KEY_VAR)
            .ok_or_else(|| AppError::Config(format!("{} not found in environment", API_KEY_VAR)))?;

        let port = match get("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("invalid PORT '{}': {}", raw, e)))?,
            None => default_port(),
        };

        let timeout_secs = match get("GEMINI_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                AppError::Config(format!("invalid GEMINI_TIMEOUT_SECS '{}': {}", raw, e))
            })?,
            None => default_timeout_secs(),
        };

        Ok(Self {
            api_key,
            base_url: get("GEMINI_BASE_URL").unwrap_or_else(default_base_url),
            model: get("GEMINI_MODEL").unwrap_or_else(default_model),
            port,
            timeout: Duration::from_secs(timeout_secs),
            static_dir: get("STATIC_DIR").unwrap_or_else(default_static_dir),
        })
    }
}
