//! 型定義

pub mod admin;
pub mod log_entry;

pub use admin::AdminAccount;
pub use log_entry::{Gender, LogEntry, LogEntryPatch, NewLogEntry};
