use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::utils::logs::{LogLevel, get_log_level, set_log_level};

#[derive(Debug, Serialize, Deserialize)]
pub struct LogLevelBody {
    pub level: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogLevelResponse {
    pub level: LogLevel,
}

/// Current log level (GET /log-level).
pub async fn get_level() -> Json<LogLevelResponse> {
    Json(LogLevelResponse {
        level: get_log_level(),
    })
}

/// Adjust the log level at runtime, not persisted (PUT /log-level).
pub async fn put_level(Json(body): Json<LogLevelBody>) -> AppResult<Json<LogLevelResponse>> {
    let level = set_log_level(&body.level)?;
    log::info!("日志级别已调整为 {:?}", level);
    Ok(Json(LogLevelResponse { level }))
}
