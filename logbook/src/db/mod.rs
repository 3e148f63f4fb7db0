//! データベースアクセス層
//!
//! データディレクトリ内のJSONファイルへの永続化

pub mod admins;
pub mod json_file;
pub mod logs;

use crate::common::error::StoreError;
use crate::types::{LogEntry, LogEntryPatch, NewLogEntry};
use async_trait::async_trait;

/// 来訪者ログ操作のRepository trait
#[async_trait]
pub trait LogRepository: Send + Sync {
    /// 全エントリを保存順で取得
    async fn list(&self) -> Result<Vec<LogEntry>, StoreError>;
    /// IDでエントリを取得
    async fn get(&self, id: u64) -> Result<Option<LogEntry>, StoreError>;
    /// エントリを追加（IDと作成日時を付与）
    async fn create(&self, entry: NewLogEntry) -> Result<LogEntry, StoreError>;
    /// エントリを部分更新（見つからなければ`None`）
    async fn update(&self, id: u64, patch: LogEntryPatch) -> Result<Option<LogEntry>, StoreError>;
    /// エントリを削除（削除したら`true`）
    async fn delete(&self, id: u64) -> Result<bool, StoreError>;
}
