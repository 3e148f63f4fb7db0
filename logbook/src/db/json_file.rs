//! JSON配列ファイルの読み書き
//!
//! 書き込みは一時ファイルへ出力してからリネームする。

use crate::common::error::StoreError;
use serde::{de::DeserializeOwned, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 配列ファイルを読み込む
///
/// ファイルが存在しない、または空の場合は空配列を返す。
pub async fn read_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(&content)?)
}

/// 配列ファイルを整形済みJSONで書き込む
pub async fn write_array<T: Serialize>(path: &Path, items: &[T]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    let bytes = serde_json::to_vec_pretty(items)?;
    let tmp = temp_path(path);
    fs::write(&tmp, bytes).await?;
    fs::rename(&tmp, path).await?;
    Ok(())
}

/// ファイルが無ければ空配列で作成する
pub async fn ensure_array_file(path: &Path) -> Result<(), StoreError> {
    if path.exists() {
        return Ok(());
    }
    write_array::<serde_json::Value>(path, &[]).await
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
