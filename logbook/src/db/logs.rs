//! 来訪者ログのJSONファイルストア
//!
//! `logs.json`に全エントリを配列で保存する。更新系の操作はファイル全体の
//! 読み込み→変更→書き戻しで行い、同一プロセス内ではミューテックスで直列化する。

use super::json_file::{ensure_array_file, read_array, write_array};
use super::LogRepository;
use crate::common::error::StoreError;
use crate::types::{LogEntry, LogEntryPatch, NewLogEntry};
use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::debug;

/// ログファイル名
pub const LOGS_FILE: &str = "logs.json";

/// JSONファイルベースのログストア
#[derive(Debug)]
pub struct JsonLogStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonLogStore {
    /// データディレクトリを開く（初回は空の`logs.json`を作成）
    pub async fn open(data_dir: &Path) -> Result<Self, StoreError> {
        tokio::fs::create_dir_all(data_dir).await?;
        let path = data_dir.join(LOGS_FILE);
        ensure_array_file(&path).await?;
        debug!("Log store opened at {}", path.display());
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// ログファイルのパス
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<LogEntry>, StoreError> {
        read_array(&self.path).await
    }

    async fn save(&self, entries: &[LogEntry]) -> Result<(), StoreError> {
        write_array(&self.path, entries).await
    }
}

/// 現在時刻（ミリ秒精度）
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// 作成時刻から識別子を決める
///
/// 時刻由来の値が既存IDと衝突または逆行する場合は最大ID+1を使う。
fn next_id(entries: &[LogEntry], created_at: DateTime<Utc>) -> u64 {
    let candidate = u64::try_from(created_at.timestamp_millis()).unwrap_or(0);
    match entries.iter().map(|e| e.id).max() {
        Some(max) if candidate <= max => max + 1,
        _ => candidate,
    }
}

#[async_trait]
impl LogRepository for JsonLogStore {
    async fn list(&self) -> Result<Vec<LogEntry>, StoreError> {
        self.load().await
    }

    async fn get(&self, id: u64) -> Result<Option<LogEntry>, StoreError> {
        Ok(self.load().await?.into_iter().find(|e| e.id == id))
    }

    async fn create(&self, entry: NewLogEntry) -> Result<LogEntry, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        let created_at = now();
        let entry = entry.into_entry(next_id(&entries, created_at), created_at);
        entries.push(entry.clone());
        self.save(&entries).await?;
        Ok(entry)
    }

    async fn update(&self, id: u64, patch: LogEntryPatch) -> Result<Option<LogEntry>, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        let Some(entry) = entries.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };
        patch.apply(entry, now());
        let updated = entry.clone();
        self.save(&entries).await?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: u64) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Ok(false);
        }
        self.save(&entries).await?;
        Ok(true)
    }
}
