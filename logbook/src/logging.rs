//! ロギング初期化ユーティリティ
//!
//! `RUST_LOG`が設定されていればそれを優先し、なければ`LOGBOOK_LOG_LEVEL`
//! （既定: `info`）を使う。`LOGBOOK_LOG_DIR`を指定すると日次ローテーションの
//! ファイル出力を追加する。コンソール出力は標準エラーへ書く
//! （標準出力は`export`のレポート専用）。

use crate::config::{get_env, get_env_or};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// ログファイル名の接頭辞
pub const LOG_FILE_PREFIX: &str = "visitor-logbook.log";

/// 既定のフィルタ文字列を組み立てる
pub fn default_filter(level: &str) -> String {
    format!("visitor_logbook={level},tower_http={level}")
}

/// ロギングを初期化
///
/// ファイル出力を有効にした場合、返された`WorkerGuard`をプロセス終了まで
/// 保持すること（dropすると未書き込みのログが失われる）。
pub fn init() -> anyhow::Result<Option<WorkerGuard>> {
    let level = get_env_or("LOGBOOK_LOG_LEVEL", "info");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(&level)));

    let console_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);

    match get_env("LOGBOOK_LOG_DIR") {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(console_layer)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .try_init()?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(console_layer)
                .try_init()?;
            Ok(None)
        }
    }
}
