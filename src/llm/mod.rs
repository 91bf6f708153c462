//! LLM 模块
//!
//! 提供 Gemini generateContent API 客户端，以及便于测试替换的 `TextGenerator` 抽象。

mod client;
mod format;
mod gemini;
mod types;

pub use client::{GeminiClient, TextGenerator};
pub use types::*;

#[cfg(test)]
pub(crate) use client::tests::spawn_stub_upstream;
