//! 認証機能
//!
//! ログインは単一の固定管理者資格情報と照合する。登録APIが作成する
//! アカウント（`db::admins`）はログイン判定には使われない。

pub mod password;

use crate::config::get_env_or;

/// 既定の管理者ユーザー名
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// 既定の管理者パスワード
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// 管理者資格情報
#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredential {
    /// ユーザー名
    pub username: String,
    password: String,
}

impl std::fmt::Debug for AdminCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl AdminCredential {
    /// 資格情報を作成
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// 環境変数から読み込む
    ///
    /// `LOGBOOK_ADMIN_USERNAME` / `LOGBOOK_ADMIN_PASSWORD`、未設定時は`admin` / `admin123`。
    pub fn from_env() -> Self {
        Self::new(
            get_env_or("LOGBOOK_ADMIN_USERNAME", DEFAULT_ADMIN_USERNAME),
            get_env_or("LOGBOOK_ADMIN_PASSWORD", DEFAULT_ADMIN_PASSWORD),
        )
    }

    /// ユーザー名とパスワードが完全一致するか
    pub fn validate(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

impl Default for AdminCredential {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)
    }
}

/// 既定の固定資格情報と照合
pub fn validate_credential(username: &str, password: &str) -> bool {
    AdminCredential::default().validate(username, password)
}
