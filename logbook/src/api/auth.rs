//! 認証API
//!
//! 管理者ログインと管理者登録

use super::error::AppError;
use crate::auth::password::{check_new_password, hash_password};
use crate::common::error::LogbookError;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// ログイン・登録リクエスト
#[derive(Debug, Default, Deserialize)]
pub struct CredentialsRequest {
    /// ユーザー名
    pub username: Option<String>,
    /// パスワード
    pub password: Option<String>,
}

impl CredentialsRequest {
    fn into_pair(self) -> Result<(String, String), LogbookError> {
        match (self.username, self.password) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Ok((username, password))
            }
            _ => Err(LogbookError::validation(
                "Username and password are required",
            )),
        }
    }
}

/// 管理者情報（ログインレスポンス用）
#[derive(Debug, Serialize)]
pub struct AdminInfo {
    /// ユーザー名
    pub username: String,
}

/// ログインレスポンス
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// メッセージ
    pub message: String,
    /// 管理者情報
    pub admin: AdminInfo,
}

/// 登録済み管理者情報
#[derive(Debug, Serialize)]
pub struct RegisteredAdmin {
    /// アカウントID
    pub id: String,
    /// ユーザー名
    pub username: String,
}

/// 登録レスポンス
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    /// メッセージ
    pub message: String,
    /// 登録済み管理者情報
    pub admin: RegisteredAdmin,
}

/// POST /api/auth/login - ログイン
///
/// 固定の管理者資格情報と完全一致で照合する。セッションやトークンは発行しない。
///
/// # Returns
/// * `200 OK` - ログイン成功
/// * `400 Bad Request` - ユーザー名またはパスワードが未入力
/// * `401 Unauthorized` - 資格情報不一致
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let Json(request) = payload?;
    let (username, password) = request.into_pair()?;

    if !state.admin_credential.validate(&username, &password) {
        warn!(username = %username, "Admin login rejected");
        return Err(AppError(LogbookError::Authentication(format!(
            "Invalid credentials for '{}'",
            username
        ))));
    }

    info!(username = %username, "Admin logged in");
    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        admin: AdminInfo { username },
    }))
}

/// POST /api/auth/register - 管理者登録
///
/// `admins.json`にbcryptハッシュ付きのアカウントを追加する。
/// ログイン判定はこの一覧を参照しない。
///
/// # Returns
/// * `201 Created` - 登録成功
/// * `400 Bad Request` - 未入力・パスワードが短い・ユーザー名重複
/// * `500 Internal Server Error` - ハッシュ化または保存の失敗
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let Json(request) = payload?;
    let (username, password) = request.into_pair()?;

    check_new_password(&password)?;

    let existing = state
        .admins
        .find_by_username(&username)
        .await
        .map_err(|e| AppError::failure("Internal server error", e))?;
    if existing.is_some() {
        return Err(AppError(LogbookError::Conflict(
            "Username already exists".to_string(),
        )));
    }

    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::failure("Internal server error", e))??;

    let admin = state.admins.create(&username, &password_hash).await?;

    info!(username = %admin.username, "Admin registered");
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Admin registered successfully".to_string(),
            admin: RegisteredAdmin {
                id: admin.id.to_string(),
                username: admin.username,
            },
        }),
    ))
}
