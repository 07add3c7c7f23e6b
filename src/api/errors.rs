use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ConfigError;
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём UI / боту).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Некорректный конфиг стола.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Действие отклонено движком (не тот ход, нелегальный check/raise и т.п.).
    #[error("rejected: {0}")]
    Rejected(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::Rejected(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::InvalidConfig(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
