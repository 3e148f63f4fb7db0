//! 登録済み管理者アカウント

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 管理者アカウント（`admins.json`に保存）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAccount {
    /// アカウントID
    pub id: Uuid,
    /// ユーザー名
    pub username: String,
    /// bcryptハッシュ化されたパスワード
    #[serde(rename = "password")]
    pub password_hash: String,
    /// 作成日時
    pub created_at: DateTime<Utc>,
}
