//! 统一错误类型
//!
//! 仓库层把 SeaORM 的 [`DbErr`] 显式归类为领域错误，服务层原样向上传递，
//! 最终由 HTTP 边界映射为状态码。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("database error: {0}")]
    Database(DbErr),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => {
                return Self::ConstraintViolation(format!("duplicate key: {}", msg));
            }
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                return Self::ConstraintViolation(format!("missing referenced record: {}", msg));
            }
            _ => {}
        }
        match err {
            DbErr::RecordNotFound(msg) => Self::NotFound {
                entity: "record",
                id: msg,
            },
            other => Self::Database(other),
        }
    }
}

/// 将错误映射为 HTTP 状态码
///
/// - `NotFound` -> 404
/// - `ConstraintViolation` -> 409
/// - `InvalidInput` -> 400
/// - `Database` -> 500
pub fn status_code_for(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::ConstraintViolation(_) => StatusCode::CONFLICT,
        AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = status_code_for(&self);
        if status.is_server_error() {
            log::error!("请求处理失败: {}", self);
        } else {
            log::debug!("请求被拒绝 ({}): {}", status, self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_entity_and_id() {
        let err = AppError::not_found("Game", 42);
        assert_eq!(err.to_string(), "Game not found: 42");
        assert_eq!(status_code_for(&err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn constraint_violation_maps_to_conflict() {
        let err = AppError::ConstraintViolation("game 1 does not exist".to_string());
        assert_eq!(status_code_for(&err), StatusCode::CONFLICT);
    }

    #[test]
    fn invalid_input_maps_to_bad_request() {
        let err = AppError::InvalidInput("sourceIndex out of range".to_string());
        assert_eq!(status_code_for(&err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn record_not_found_becomes_not_found() {
        let err: AppError = DbErr::RecordNotFound("belonging".to_string()).into();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[test]
    fn other_db_errors_stay_database_errors() {
        let err: AppError = DbErr::Custom("boom".to_string()).into();
        assert!(matches!(err, AppError::Database(_)));
        assert_eq!(status_code_for(&err), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
