//! 应用状态管理
//!
//! 定义在请求处理器之间共享的状态。

use std::sync::Arc;

use crate::llm::TextGenerator;

/// 应用共享状态
///
/// 启动后只读，使用 Arc 包裹以便在多个处理器之间安全共享
#[derive(Clone)]
pub struct AppState {
    /// 上游文本生成器
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }
}

/// 创建可共享的应用状态
pub fn create_shared_state(generator: Arc<dyn TextGenerator>) -> Arc<AppState> {
    Arc::new(AppState::new(generator))
}
