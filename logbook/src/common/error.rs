//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! `LogbookError`は`status_code()`と`external_message()`を提供し、
//! 内部情報（ファイルパス、I/Oエラー詳細など）を外部へ漏らさずに
//! HTTPレスポンスを組み立てられるようにする。

use axum::http::StatusCode;
use thiserror::Error;

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// ストレージ層のエラー
#[derive(Debug, Error)]
pub enum StoreError {
    /// ファイル入出力エラー
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSONのシリアライズ／デシリアライズエラー
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// visitor logbook error type
#[derive(Debug, Error)]
pub enum LogbookError {
    /// Common layer error
    #[error(transparent)]
    Common(#[from] CommonError),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unsupported HTTP method
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Request body exceeds the configured limit
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Conflict error (e.g., duplicate username)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Storage error
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Password hash error
    #[error("Password hash error: {0}")]
    PasswordHash(String),

    /// Internal error
    ///
    /// 保持するメッセージはそのままクライアントへ返すため、
    /// 内部詳細を含めないこと。
    #[error("{0}")]
    Internal(String),
}

impl LogbookError {
    /// 入力検証エラーを作成
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Common(CommonError::Validation(message.into()))
    }

    /// エントリ未検出エラーを作成
    pub fn log_not_found() -> Self {
        Self::NotFound("Log not found".to_string())
    }

    /// Returns the message that is safe to show to external clients.
    ///
    /// Validation, not-found and conflict messages are written for users
    /// and are returned verbatim. Storage and hashing failures collapse to a
    /// generic message; their details only go to the server log.
    pub fn external_message(&self) -> String {
        match self {
            Self::Common(CommonError::Validation(message)) => message.clone(),
            Self::NotFound(message) => message.clone(),
            Self::MethodNotAllowed => "Method not allowed".to_string(),
            Self::PayloadTooLarge(_) => "Request body too large".to_string(),
            Self::Authentication(_) => "Invalid credentials".to_string(),
            Self::Conflict(message) => message.clone(),
            Self::Store(_) => "Internal server error".to_string(),
            Self::PasswordHash(_) => "Internal server error".to_string(),
            Self::Internal(message) => message.clone(),
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Common(CommonError::Validation(_)) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Authentication(_) => StatusCode::UNAUTHORIZED,
            // 重複ユーザー名は400として扱う
            Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::PasswordHash(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Result type alias
pub type LogbookResult<T> = Result<T, LogbookError>;
