//! 来訪者ログAPI
//!
//! 一覧・作成・取得・更新・削除と印刷用レポート

use super::error::AppError;
use crate::common::error::LogbookError;
use crate::types::log_entry::{
    filter_entries, normalize_organization, parse_visit_date, AgeInput,
};
use crate::types::{Gender, LogEntry, LogEntryPatch, NewLogEntry};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// ログ作成リクエスト
///
/// 必須項目の欠落を400で返すため、全フィールドを`Option`で受ける。
#[derive(Debug, Default, Deserialize)]
pub struct CreateLogRequest {
    /// 氏名
    pub name: Option<String>,
    /// 住所
    pub address: Option<String>,
    /// 訪問日（YYYY-MM-DD）
    pub date: Option<String>,
    /// 性別
    pub gender: Option<String>,
    /// 年齢（数値または数字文字列）
    pub age: Option<AgeInput>,
    /// 所属（任意）
    pub organization: Option<String>,
    /// 訪問目的
    pub purpose: Option<String>,
    /// 署名画像（data URL）
    pub signature: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl CreateLogRequest {
    /// 検証して新規エントリに変換
    pub fn into_new_entry(self) -> Result<NewLogEntry, LogbookError> {
        let missing = || LogbookError::validation("All fields are required");

        let name = non_blank(self.name).ok_or_else(missing)?;
        let address = non_blank(self.address).ok_or_else(missing)?;
        let date = non_blank(self.date).ok_or_else(missing)?;
        let gender = non_blank(self.gender).ok_or_else(missing)?;
        let age = self.age.filter(|age| !age.is_blank()).ok_or_else(missing)?;
        let purpose = non_blank(self.purpose).ok_or_else(missing)?;
        let signature = non_blank(self.signature).ok_or_else(missing)?;

        Ok(NewLogEntry {
            name,
            address,
            date: parse_visit_date(&date)?,
            gender: gender.parse()?,
            age: age.parse()?,
            organization: normalize_organization(self.organization),
            purpose,
            signature,
        })
    }
}

/// ログ更新リクエスト
///
/// 管理画面はエントリ全体を送り返すが、`id`・`signature`・`createdAt`は無視する。
#[derive(Debug, Default, Deserialize)]
pub struct UpdateLogRequest {
    /// 氏名
    pub name: Option<String>,
    /// 住所
    pub address: Option<String>,
    /// 訪問日
    pub date: Option<String>,
    /// 性別
    pub gender: Option<String>,
    /// 年齢
    pub age: Option<AgeInput>,
    /// 所属
    pub organization: Option<String>,
    /// 訪問目的
    pub purpose: Option<String>,
}

fn present(field: &str, value: Option<String>) -> Result<Option<String>, LogbookError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(LogbookError::validation(format!(
            "Field '{}' must not be empty",
            field
        ))),
        other => Ok(other),
    }
}

impl UpdateLogRequest {
    /// 検証して部分更新に変換
    pub fn into_patch(self) -> Result<LogEntryPatch, LogbookError> {
        let date = present("date", self.date)?
            .map(|d| parse_visit_date(&d))
            .transpose()?;
        let gender = present("gender", self.gender)?
            .map(|g| g.parse::<Gender>())
            .transpose()?;
        let age = match self.age {
            Some(age) if age.is_blank() => {
                return Err(LogbookError::validation("Field 'age' must not be empty"))
            }
            Some(age) => Some(age.parse()?),
            None => None,
        };

        Ok(LogEntryPatch {
            name: present("name", self.name)?,
            address: present("address", self.address)?,
            date,
            gender,
            age,
            organization: self.organization.map(|org| normalize_organization(Some(org))),
            purpose: present("purpose", self.purpose)?,
        })
    }
}

/// 一覧・レポートの検索条件
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    /// 氏名・所属・目的に対する部分一致（大文字小文字を区別しない）
    pub search: Option<String>,
}

/// 削除・その他の確認メッセージ
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// メッセージ
    pub message: String,
}

/// パスのIDを解析（数値でなければ該当なし）
fn parse_id(raw: &str) -> Result<u64, AppError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| AppError(LogbookError::log_not_found()))
}

/// GET /api/logs - ログ一覧
///
/// # Returns
/// * `200 OK` - 保存順のエントリ配列（`?search=`で絞り込み）
/// * `500 Internal Server Error` - 読み込み失敗
pub async fn list_logs(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<LogEntry>>, AppError> {
    let entries = state
        .logs
        .list()
        .await
        .map_err(|e| AppError::failure("Error fetching logs", e))?;
    Ok(Json(filter_entries(entries, query.search.as_deref())))
}

/// POST /api/logs - ログ作成
///
/// # Returns
/// * `201 Created` - 作成されたエントリ
/// * `400 Bad Request` - 必須項目の欠落・形式不正
/// * `500 Internal Server Error` - 保存失敗
pub async fn create_log(
    State(state): State<AppState>,
    payload: Result<Json<CreateLogRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LogEntry>), AppError> {
    let Json(request) = payload?;
    let new_entry = request.into_new_entry()?;

    let entry = state
        .logs
        .create(new_entry)
        .await
        .map_err(|e| AppError::failure("Error creating log", e))?;

    info!(id = entry.id, "Visitor log created");
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/logs/:id - ログ取得
///
/// # Returns
/// * `200 OK` - エントリ
/// * `404 Not Found` - 該当なし
pub async fn get_log(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LogEntry>, AppError> {
    let id = parse_id(&id)?;
    state
        .logs
        .get(id)
        .await
        .map_err(|e| AppError::failure("Error fetching log", e))?
        .map(Json)
        .ok_or_else(|| AppError(LogbookError::log_not_found()))
}

/// PUT /api/logs/:id - ログ更新
///
/// 指定されたフィールドのみ上書きし、`updatedAt`を記録する。
///
/// # Returns
/// * `200 OK` - 更新後のエントリ
/// * `400 Bad Request` - 形式不正
/// * `404 Not Found` - 該当なし（ボディの内容に関わらず）
pub async fn update_log(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateLogRequest>, JsonRejection>,
) -> Result<Json<LogEntry>, AppError> {
    let id = parse_id(&id)?;

    // 存在確認はボディ検証より先
    state
        .logs
        .get(id)
        .await
        .map_err(|e| AppError::failure("Error updating log", e))?
        .ok_or_else(|| AppError(LogbookError::log_not_found()))?;

    let Json(request) = payload?;
    let patch = request.into_patch()?;

    let entry = state
        .logs
        .update(id, patch)
        .await
        .map_err(|e| AppError::failure("Error updating log", e))?
        .ok_or_else(|| AppError(LogbookError::log_not_found()))?;

    info!(id = entry.id, "Visitor log updated");
    Ok(Json(entry))
}

/// DELETE /api/logs/:id - ログ削除
///
/// # Returns
/// * `200 OK` - 削除成功
/// * `404 Not Found` - 該当なし
pub async fn delete_log(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id)?;
    let removed = state
        .logs
        .delete(id)
        .await
        .map_err(|e| AppError::failure("Error deleting log", e))?;
    if !removed {
        return Err(AppError(LogbookError::log_not_found()));
    }

    info!(id, "Visitor log deleted");
    Ok(Json(MessageResponse {
        message: "Log deleted successfully".to_string(),
    }))
}

/// GET /admin/report - 印刷用レポート
pub async fn print_report(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Html<String>, AppError> {
    let entries = state
        .logs
        .list()
        .await
        .map_err(|e| AppError::failure("Error fetching logs", e))?;
    let entries = filter_entries(entries, query.search.as_deref());
    Ok(Html(crate::report::render_report(
        &entries,
        chrono::Local::now(),
    )))
}
