//! 静态资源服务
//!
//! `/` 返回 index.html，其余路径按文件名从静态目录读取，不存在时返回 404。

use axum::{routing::get_service, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};

use crate::state::AppState;

/// 创建静态资源路由
pub fn asset_routes(static_dir: impl AsRef<Path>) -> Router<Arc<AppState>> {
    let static_dir = static_dir.as_ref();
    let index = ServeFile::new(static_dir.join("index.html"));

    Router::new()
        .route("/", get_service(index))
        .fallback_service(ServeDir::new(static_dir))
}
