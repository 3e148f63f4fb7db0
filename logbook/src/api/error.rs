//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use crate::common::error::LogbookError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub LogbookError);

impl AppError {
    /// 処理失敗を500として返す
    ///
    /// 原因は詳細付きでログに出力し、クライアントには`message`のみ返す。
    pub fn failure(message: &str, err: impl std::fmt::Display) -> Self {
        tracing::error!("{}: {}", message, err);
        AppError(LogbookError::Internal(message.to_string()))
    }
}

impl From<LogbookError> for AppError {
    fn from(err: LogbookError) -> Self {
        AppError(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(
            status = %rejection.status(),
            "Rejected request body: {}",
            rejection.body_text()
        );
        match rejection {
            // 構文は正しいが型が合わない（例: ageに小数）
            JsonRejection::JsonDataError(_) => {
                AppError(LogbookError::validation("Invalid field type"))
            }
            JsonRejection::JsonSyntaxError(_) | JsonRejection::MissingJsonContentType(_) => {
                AppError(LogbookError::validation("Request body must be valid JSON"))
            }
            other if other.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                AppError(LogbookError::PayloadTooLarge(other.body_text()))
            }
            other if other.status().is_server_error() => {
                AppError::failure("Internal server error", other.body_text())
            }
            _ => AppError(LogbookError::validation("Request body must be valid JSON")),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        } else {
            tracing::debug!("Request rejected ({}): {}", status, self.0);
        }

        let payload = json!({
            "message": self.0.external_message()
        });

        (status, Json(payload)).into_response()
    }
}

/// 未対応メソッド用フォールバック
pub async fn method_not_allowed() -> AppError {
    AppError(LogbookError::MethodNotAllowed)
}
