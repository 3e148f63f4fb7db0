//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables, with an
//! optional fallback to a generic name (e.g. `PORT` as set by hosting
//! platforms) that is used only when the `LOGBOOK_*` variable is absent.

use std::path::PathBuf;

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Default data directory (relative to the working directory)
pub const DEFAULT_DATA_DIR: &str = "data";

/// Get an environment variable, treating empty values as unset.
pub fn get_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable or a default value.
pub fn get_env_or(name: &str, default: &str) -> String {
    get_env(name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable with fallback to a secondary name
///
/// If `name` is set, returns its value. If only `fallback` is set, returns its
/// value and logs at debug level which variable was used.
///
/// # Example
/// ```
/// use visitor_logbook::config::get_env_with_fallback;
///
/// let port = get_env_with_fallback("LOGBOOK_PORT", "PORT");
/// ```
pub fn get_env_with_fallback(name: &str, fallback: &str) -> Option<String> {
    if let Some(val) = get_env(name) {
        return Some(val);
    }
    if let Some(val) = get_env(fallback) {
        tracing::debug!("Environment variable '{}' not set, using '{}'", name, fallback);
        return Some(val);
    }
    None
}

/// Get an environment variable with fallback, parsing to a specific type
///
/// Returns `default` if neither variable is set or parsing fails.
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    name: &str,
    fallback: &str,
    default: T,
) -> T {
    get_env_with_fallback(name, fallback)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// サーバー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// データディレクトリ（`logs.json` / `admins.json`）
    pub data_dir: PathBuf,
}

impl ServerConfig {
    /// 環境変数から読み込む
    ///
    /// `LOGBOOK_HOST`（`HOST`）、`LOGBOOK_PORT`（`PORT`）、`LOGBOOK_DATA_DIR`
    pub fn from_env() -> Self {
        Self {
            host: get_env_with_fallback("LOGBOOK_HOST", "HOST")
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: get_env_with_fallback_parse("LOGBOOK_PORT", "PORT", DEFAULT_PORT),
            data_dir: PathBuf::from(get_env_or("LOGBOOK_DATA_DIR", DEFAULT_DATA_DIR)),
        }
    }

    /// バインド先文字列
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}
