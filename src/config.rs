use std::path::PathBuf;

use clap::Parser;

use crate::utils::logs::LogLevel;

/// gameslist - 游戏目录与游戏列表后端
///
/// 每个选项都可以通过对应的环境变量设置。
#[derive(Parser, Debug, Clone)]
#[command(name = "gameslist")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "GAMESLIST_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(long, short, default_value_t = 8080, env = "GAMESLIST_PORT")]
    pub port: u16,

    /// Database connection string; defaults to a SQLite file in the data directory
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Directory holding the SQLite file when no database URL is given
    #[arg(long, env = "GAMESLIST_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Allowed CORS origins, comma separated; any origin when empty
    #[arg(long, env = "GAMESLIST_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,

    /// Initial log level, adjustable at runtime through /log-level
    #[arg(long, value_enum, default_value = "info", env = "GAMESLIST_LOG_LEVEL")]
    pub log_level: LogLevel,

    /// Load the demo catalog when the store is empty
    #[arg(long, env = "GAMESLIST_SEED")]
    pub seed: bool,
}

impl Config {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
