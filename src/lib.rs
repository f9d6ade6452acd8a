pub mod app;
pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod state;
pub mod utils;

use tokio::{net::TcpListener, signal};

use crate::{app::create_app, config::Config, database::connection, state::AppState};

/// 启动 HTTP 服务，直到收到关闭信号
pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    utils::logs::init_logger(config.log_level);

    let conn = match connection::establish_connection(&config).await {
        Ok(conn) => {
            log::info!("数据库连接建立成功");
            conn
        }
        Err(e) => {
            log::error!("无法建立数据库连接: {}", e);
            return Err(e.into());
        }
    };

    if let Err(e) = connection::run_migrations(&conn).await {
        log::error!("数据库迁移失败: {}", e);
        return Err(e.into());
    }

    if config.seed {
        database::seed::seed_demo_catalog(&conn).await?;
    }

    let app = create_app(AppState::from_connection(conn.clone()), &config.cors_origins);

    let listener = TcpListener::bind(config.bind_address()).await?;
    log::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    match connection::close_connection(conn).await {
        Ok(_) => log::info!("数据库连接已成功关闭"),
        Err(e) => log::error!("关闭数据库连接时出错: {}", e),
    }
    Ok(())
}

/// 等待 Ctrl+C 或 SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            log::error!("无法监听 Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                log::error!("无法监听 SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => log::info!("收到 Ctrl+C，正在关闭..."),
        _ = terminate => log::info!("收到 SIGTERM，正在关闭..."),
    }
}
