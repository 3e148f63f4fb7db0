//! CLI module for visitor-logbook
//!
//! サーバー起動と印刷用レポートの書き出しを提供する。

pub mod export;
pub mod serve;

use clap::{Parser, Subcommand};

/// Visitor logbook - visitor sign-in form with an admin dashboard
#[derive(Parser, Debug)]
#[command(name = "visitor-logbook")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    LOGBOOK_HOST              Bind address (default: 0.0.0.0, fallback: HOST)
    LOGBOOK_PORT              Listen port (default: 3000, fallback: PORT)
    LOGBOOK_DATA_DIR          Directory holding logs.json / admins.json (default: data)
    LOGBOOK_ADMIN_USERNAME    Admin login username (default: admin)
    LOGBOOK_ADMIN_PASSWORD    Admin login password (default: admin123)
    LOGBOOK_LOG_LEVEL         Log level (default: info)
    LOGBOOK_LOG_DIR           Write daily rolling log files to this directory
"#)]
pub struct Cli {
    /// Subcommand to execute (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server
    Serve(serve::ServeArgs),
    /// Write the printable visitor report to a file or stdout
    Export(export::ExportArgs),
}
