//! Visitor Logbook Server
//!
//! 来訪者の記帳と管理者による閲覧・編集・印刷を提供するWebサーバー

#![warn(missing_docs)]

/// 共通エラー型
pub mod common;

/// REST APIハンドラー
pub mod api;

/// 認証機能（固定管理者資格情報・パスワードハッシュ）
pub mod auth;

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// JSONファイルストア
pub mod db;

/// ロギング初期化ユーティリティ
pub mod logging;

/// 印刷用レポート
pub mod report;

/// axumサーバー起動・シャットダウンハンドリング
pub mod server;

/// 協調的シャットダウン
pub mod shutdown;

/// 型定義
pub mod types;

use auth::AdminCredential;
use common::error::StoreError;
use db::{admins::AdminStore, logs::JsonLogStore, LogRepository};
use shutdown::ShutdownController;
use std::path::Path;
use std::sync::Arc;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// 来訪ログストア
    pub logs: Arc<dyn LogRepository>,
    /// 登録管理者ストア
    pub admins: Arc<AdminStore>,
    /// ログイン照合に使う管理者資格情報
    pub admin_credential: Arc<AdminCredential>,
    /// シャットダウン制御
    pub shutdown: ShutdownController,
}

impl AppState {
    /// データディレクトリを開いて状態を構築
    ///
    /// `logs.json`が無ければ空配列で作成する。
    pub async fn open(data_dir: &Path, credential: AdminCredential) -> Result<Self, StoreError> {
        let logs = JsonLogStore::open(data_dir).await?;
        Ok(Self {
            logs: Arc::new(logs),
            admins: Arc::new(AdminStore::new(data_dir)),
            admin_credential: Arc::new(credential),
            shutdown: ShutdownController::default(),
        })
    }
}
