//! Gemini Text Relay - Rust Backend
//!
//! 使用 axum 框架构建的后端服务，将浏览器提交的提示词转发给 Gemini API 并返回生成的文本。

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod error;
mod llm;
mod models;
mod state;

use api::create_app;
use config::{AppConfig, API_KEY_VAR};
use llm::GeminiClient;
use state::create_shared_state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载 .env 文件（可选）
    dotenvy::dotenv().ok();

    // 初始化日志
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gemini_relay=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 缺少密钥时在绑定端口前退出
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            error!(
                "Please make sure you have created a .env file with {}=YOUR_API_KEY_HERE",
                API_KEY_VAR
            );
            std::process::exit(1);
        }
    };

    info!("Starting Gemini text relay...");

    let client = match GeminiClient::new(
        config.api_key.clone(),
        &config.base_url,
        config.model.clone(),
        config.timeout,
    ) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create Gemini client: {}", e);
            std::process::exit(1);
        }
    };
    info!("Using model: {}", client.model());

    // 创建共享状态
    let state = create_shared_state(Arc::new(client));

    // 构建路由
    let app = create_app(state, &config.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening at http://localhost:{}", config.port);
    info!(
        "Open your browser and navigate to: http://localhost:{}",
        config.port
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received SIGINT, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
