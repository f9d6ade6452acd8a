use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}

impl From<log::LevelFilter> for LogLevel {
    fn from(level: log::LevelFilter) -> Self {
        match level {
            log::LevelFilter::Error => LogLevel::Error,
            log::LevelFilter::Warn => LogLevel::Warn,
            log::LevelFilter::Info => LogLevel::Info,
            log::LevelFilter::Debug => LogLevel::Debug,
            log::LevelFilter::Trace => LogLevel::Trace,
            log::LevelFilter::Off => LogLevel::Off,
        }
    }
}

/// 安装 env_logger，并把全局级别设为 `level`
///
/// 底层过滤器放开到 Trace，允许运行时动态调整到任意级别。
/// 设置了 `RUST_LOG` 时以环境变量为准，`level` 不生效。
pub fn init_logger(level: LogLevel) {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = env_logger::Builder::new()
            .filter_level(log::LevelFilter::Trace)
            .parse_default_env()
            .format_timestamp_millis()
            .try_init();
    });
    let rust_log = std::env::var("RUST_LOG").ok();
    if let Some(level) = startup_level(level, rust_log.as_deref()) {
        log::set_max_level(level.into());
    }
}

/// 启动时应当应用的级别；`RUST_LOG` 非空时返回 `None`
fn startup_level(configured: LogLevel, rust_log: Option<&str>) -> Option<LogLevel> {
    match rust_log {
        Some(filter) if !filter.trim().is_empty() => None,
        _ => Some(configured),
    }
}

/// 动态设置日志输出级别（不持久化）
pub fn set_log_level(level: &str) -> Result<LogLevel, AppError> {
    let parsed = <LogLevel as clap::ValueEnum>::from_str(level.trim(), true)
        .map_err(|_| AppError::InvalidInput(format!("无效的日志级别: {}", level)))?;
    log::set_max_level(parsed.into());
    Ok(parsed)
}

/// 获取当前日志级别
pub fn get_log_level() -> LogLevel {
    log::max_level().into()
}
