//! 登録アカウント用のパスワード処理
//!
//! 登録時の長さ検証と、`admins.json`へ保存するbcryptハッシュの生成。

use crate::common::error::LogbookError;

/// bcryptのコスト
const HASH_COST: u32 = 10;

/// 登録時に要求する最小パスワード長（文字数）
pub const MIN_PASSWORD_LEN: usize = 6;

/// 登録用パスワードの長さを満たすか
pub fn meets_minimum_length(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

/// 登録用パスワードを検証
///
/// # Returns
/// * `Ok(())` - 最小長を満たす
/// * `Err(LogbookError)` - 400 "Password must be at least 6 characters"
pub fn check_new_password(password: &str) -> Result<(), LogbookError> {
    if meets_minimum_length(password) {
        Ok(())
    } else {
        Err(LogbookError::validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )))
    }
}

/// 保存用のbcryptハッシュ（`$2b$`形式）を生成
///
/// CPU負荷が高いため、非同期コンテキストからは`spawn_blocking`経由で呼ぶ。
pub fn hash_password(password: &str) -> Result<String, LogbookError> {
    bcrypt::hash(password, HASH_COST)
        .map_err(|e| LogbookError::PasswordHash(format!("bcrypt hashing failed: {}", e)))
}
