//! serve サブコマンド
//!
//! Webサーバーを起動します。未指定の項目は環境変数の設定を使います。

use crate::auth::AdminCredential;
use crate::config::ServerConfig;
use crate::{server, AppState};
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// serve サブコマンドの引数
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Listen port
    #[arg(short, long, env = "LOGBOOK_PORT")]
    pub port: Option<u16>,

    /// Bind address
    #[arg(short = 'H', long, env = "LOGBOOK_HOST")]
    pub host: Option<String>,

    /// Data directory
    #[arg(short, long, env = "LOGBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

impl ServeArgs {
    /// 環境変数由来の設定に引数を上書き
    pub fn resolve(self, base: ServerConfig) -> ServerConfig {
        ServerConfig {
            host: self.host.unwrap_or(base.host),
            port: self.port.unwrap_or(base.port),
            data_dir: self.data_dir.unwrap_or(base.data_dir),
        }
    }
}

/// serve を実行
pub async fn execute(args: ServeArgs) -> anyhow::Result<()> {
    let config = args.resolve(ServerConfig::from_env());
    let credential = AdminCredential::from_env();

    info!(
        data_dir = %config.data_dir.display(),
        admin = %credential.username,
        "Opening visitor log store"
    );
    let state = AppState::open(&config.data_dir, credential)
        .await
        .with_context(|| format!("Failed to open data directory {}", config.data_dir.display()))?;

    server::run(state, &config.bind_addr()).await
}
