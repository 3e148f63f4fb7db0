//! 登録管理者アカウントの保存（admins.json）

use super::json_file::{read_array, write_array};
use crate::common::error::{LogbookError, LogbookResult, StoreError};
use crate::types::AdminAccount;
use chrono::{SubsecRound, Utc};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use uuid::Uuid;

/// 管理者ファイル名
pub const ADMINS_FILE: &str = "admins.json";

/// 管理者アカウントストア
///
/// ファイルは最初の登録時に作成される。
#[derive(Debug)]
pub struct AdminStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl AdminStore {
    /// データディレクトリ配下のストアを作成
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(ADMINS_FILE),
            write_lock: Mutex::new(()),
        }
    }

    /// 登録済みアカウント一覧
    pub async fn list(&self) -> Result<Vec<AdminAccount>, StoreError> {
        read_array(&self.path).await
    }

    /// ユーザー名でアカウントを検索
    pub async fn find_by_username(&self, username: &str) -> Result<Option<AdminAccount>, StoreError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .find(|admin| admin.username == username))
    }

    /// アカウントを作成
    ///
    /// # Arguments
    /// * `username` - ユーザー名
    /// * `password_hash` - bcryptハッシュ化されたパスワード
    ///
    /// # Returns
    /// * `Ok(AdminAccount)` - 作成されたアカウント
    /// * `Err(LogbookError::Conflict)` - ユーザー名重複
    /// * `Err(LogbookError::Store)` - 保存失敗
    pub async fn create(&self, username: &str, password_hash: &str) -> LogbookResult<AdminAccount> {
        let _guard = self.write_lock.lock().await;
        let mut admins = self.list().await?;
        if admins.iter().any(|admin| admin.username == username) {
            return Err(LogbookError::Conflict("Username already exists".to_string()));
        }

        let admin = AdminAccount {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now().trunc_subsecs(3),
        };
        admins.push(admin.clone());
        write_array(&self.path, &admins).await?;
        Ok(admin)
    }
}
