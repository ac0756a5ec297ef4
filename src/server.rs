//! 服务器生命周期：绑定端口、启动服务、优雅关闭

use std::future::Future;

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::app::{
    routes::{create_router, API_PREFIX, ROUTES},
    AppState,
};
use crate::core::{config::ProviderConfig, error::ServerError};

/// 按配置绑定端口并运行，直到收到停止信号
pub async fn run(config: &ProviderConfig) -> Result<(), ServerError> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    serve(listener, config, shutdown_signal()).await
}

/// 在已绑定的 listener 上运行服务，`shutdown` 完成后优雅关闭
pub async fn serve<F>(
    listener: TcpListener,
    config: &ProviderConfig,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr().map_err(ServerError::Serve)?;
    let app = create_router(AppState::new(config));

    info!("🚀 服务器运行在 http://{}", local_addr);
    info!("📖 可用的路由:");
    for (method, path, description) in ROUTES {
        info!(
            "   {}  {:<8} {:<12} - {}",
            method,
            path,
            format!("{}{}", API_PREFIX, path),
            description
        );
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)?;

    info!("服务器已关闭");
    Ok(())
}

/// 等待 Ctrl+C 或 SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("无法监听 Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("无法监听 SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("收到停止信号，正在关闭服务器...");
}
