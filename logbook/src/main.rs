//! Visitor Logbook Server Entry Point

use clap::Parser;
use visitor_logbook::cli::{self, Cli, Commands};
use visitor_logbook::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // ファイル出力時はguardをmain終了まで保持する
    let _log_guard = logging::init()?;

    match cli.command {
        Some(Commands::Export(args)) => cli::export::execute(args).await,
        Some(Commands::Serve(args)) => cli::serve::execute(args).await,
        None => cli::serve::execute(cli::serve::ServeArgs::default()).await,
    }
}
