use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, RuntimeErr};
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

use crate::config::Config;

/// 内存数据库连接串，主要用于测试
pub const MEMORY_DATABASE_URL: &str = "sqlite::memory:";

/// 解析默认的 SQLite 文件连接串
///
/// 数据库位于 `data_dir`（为空时取平台数据目录）下，目录不存在时自动创建。
pub fn default_database_url(data_dir: Option<&Path>) -> Result<String, DbErr> {
    let db_path =
        gameslist_path::db_path(data_dir).map_err(|e| DbErr::Conn(RuntimeErr::Internal(e)))?;

    if !db_path.exists() {
        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                DbErr::Conn(RuntimeErr::Internal(format!("无法创建数据库目录: {}", e)))
            })?;
        }
        log::info!("首次启动，创建数据库: {}", db_path.display());
    } else {
        log::info!("使用数据库: {}", db_path.display());
    }

    // 使用 `url` crate 安全地构建连接字符串
    let db_url = Url::from_file_path(&db_path).map_err(|_| {
        DbErr::Conn(RuntimeErr::Internal(format!(
            "Invalid database path: {}",
            db_path.display()
        )))
    })?;

    Ok(format!("sqlite:{}?mode=rwc", db_url.path()))
}

/// Establish a SeaORM database connection from the application config.
pub async fn establish_connection(config: &Config) -> Result<DatabaseConnection, DbErr> {
    let connection_string = match &config.database_url {
        Some(url) => url.clone(),
        None => default_database_url(config.data_dir.as_deref())?,
    };
    connect(&connection_string).await
}

/// 按连接串建立连接
pub async fn connect(connection_string: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(connection_string.to_owned());
    options
        .max_connections(1) // 对于 SQLite，连接池大小为 1 即可
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .sqlx_logging(false);

    log::debug!("Database connection string: {}", options.get_url());

    Database::connect(options).await
}

/// 执行 SeaORM 数据库迁移
pub async fn run_migrations(conn: &DatabaseConnection) -> Result<(), DbErr> {
    log::info!("开始执行数据库迁移...");
    migration::Migrator::up(conn, None).await?;
    log::info!("数据库迁移完成");
    Ok(())
}

/// 建立连接并执行全部迁移
pub async fn connect_and_migrate(connection_string: &str) -> Result<DatabaseConnection, DbErr> {
    let conn = connect(connection_string).await?;
    run_migrations(&conn).await?;
    Ok(conn)
}

/// 关闭数据库连接
pub async fn close_connection(conn: DatabaseConnection) -> Result<(), DbErr> {
    conn.close().await?;
    Ok(())
}
