//! export サブコマンド
//!
//! 印刷用レポートHTMLをファイルまたは標準出力へ書き出します。

use crate::config::ServerConfig;
use crate::db::{logs::JsonLogStore, LogRepository};
use crate::report::render_report;
use crate::types::log_entry::filter_entries;
use anyhow::Context;
use chrono::Local;
use clap::Args;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// export サブコマンドの引数
#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    /// Data directory (default: ./data)
    #[arg(short, long, env = "LOGBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Only include entries whose name, organization or purpose contains this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// レポートHTMLを生成
pub async fn build_report(data_dir: &Path, search: Option<&str>) -> anyhow::Result<(usize, String)> {
    let store = JsonLogStore::open(data_dir)
        .await
        .with_context(|| format!("Failed to open data directory {}", data_dir.display()))?;
    let entries = filter_entries(store.list().await?, search);
    Ok((entries.len(), render_report(&entries, Local::now())))
}

/// export を実行
pub async fn execute(args: ExportArgs) -> anyhow::Result<()> {
    let data_dir = args
        .data_dir
        .unwrap_or_else(|| ServerConfig::from_env().data_dir);
    let (count, html) = build_report(&data_dir, args.search.as_deref()).await?;

    match args.output {
        Some(path) => {
            tokio::fs::write(&path, html)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(entries = count, path = %path.display(), "Report exported");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
