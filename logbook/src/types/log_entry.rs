//! 来訪者ログエントリの型定義

use crate::common::error::CommonError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 所属が未入力の場合に保存されるプレースホルダー
pub const DEFAULT_ORGANIZATION: &str = "N/A";

/// 訪問日の書式（`YYYY-MM-DD`）
pub const VISIT_DATE_FORMAT: &str = "%Y-%m-%d";

/// 性別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    /// 男性
    Male,
    /// 女性
    Female,
    /// その他
    Other,
}

impl Gender {
    /// 表示・保存用の文字列
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            "Other" => Ok(Gender::Other),
            other => Err(CommonError::Validation(format!(
                "Gender must be one of Male, Female, Other (got '{}')",
                other
            ))),
        }
    }
}

/// 年齢の入力値
///
/// フォームからは文字列（`"30"`）、APIクライアントからは数値で届くため両方を受け付ける。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AgeInput {
    /// JSON数値
    Number(i64),
    /// 数字文字列
    Text(String),
}

impl AgeInput {
    /// 空入力かどうか（未入力の必須項目として扱う）
    pub fn is_blank(&self) -> bool {
        matches!(self, AgeInput::Text(text) if text.trim().is_empty())
    }

    /// 整数の年齢に変換
    pub fn parse(&self) -> Result<u32, CommonError> {
        let invalid = || CommonError::Validation("Age must be a whole number".to_string());
        match self {
            AgeInput::Number(value) => u32::try_from(*value).map_err(|_| invalid()),
            AgeInput::Text(text) => text.trim().parse::<u32>().map_err(|_| invalid()),
        }
    }
}

/// 訪問日を解析
pub fn parse_visit_date(value: &str) -> Result<NaiveDate, CommonError> {
    NaiveDate::parse_from_str(value.trim(), VISIT_DATE_FORMAT).map_err(|_| {
        CommonError::Validation(format!("Date must be formatted as YYYY-MM-DD (got '{}')", value))
    })
}

/// 所属の既定値を適用
pub fn normalize_organization(value: Option<String>) -> String {
    match value {
        Some(org) if !org.trim().is_empty() => org,
        _ => DEFAULT_ORGANIZATION.to_string(),
    }
}

fn default_organization() -> String {
    DEFAULT_ORGANIZATION.to_string()
}

/// 来訪者ログエントリ（`logs.json`に保存される形）
///
/// 保存済みデータは入力検証を経ていない場合があるため、読み込みは寛容に行う。
/// 訪問日・性別は文字列のまま保持し、年齢が数値でなければ`None`となる。
/// 入力の厳密な検証は`NewLogEntry`/`LogEntryPatch`を作る側で行う。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// 識別子（作成時刻のミリ秒）
    pub id: u64,
    /// 氏名
    #[serde(default)]
    pub name: String,
    /// 住所
    #[serde(default)]
    pub address: String,
    /// 訪問日（`YYYY-MM-DD`）
    #[serde(default)]
    pub date: String,
    /// 性別
    #[serde(default)]
    pub gender: String,
    /// 年齢
    #[serde(default, deserialize_with = "lenient_age")]
    pub age: Option<u32>,
    /// 所属
    #[serde(default = "default_organization")]
    pub organization: String,
    /// 訪問目的
    #[serde(default)]
    pub purpose: String,
    /// 署名画像（data URL）
    #[serde(default)]
    pub signature: String,
    /// 作成日時
    pub created_at: DateTime<Utc>,
    /// 最終更新日時
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

// 数字文字列は解釈し、null・小数・その他は未設定として読む
fn lenient_age<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        serde_json::Value::String(text) => text.trim().parse().ok(),
        _ => None,
    })
}

impl LogEntry {
    /// 検索語が氏名・所属・目的のいずれかに含まれるか（大文字小文字を区別しない）
    ///
    /// 空の検索語はすべてのエントリに一致する。
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        [&self.name, &self.organization, &self.purpose]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}

/// 検索語で絞り込む（順序は維持）
pub fn filter_entries(entries: Vec<LogEntry>, term: Option<&str>) -> Vec<LogEntry> {
    match term {
        Some(term) if !term.trim().is_empty() => {
            entries.into_iter().filter(|e| e.matches(term)).collect()
        }
        _ => entries,
    }
}

/// 新規エントリの内容（識別子と作成日時はストアが付与する）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLogEntry {
    /// 氏名
    pub name: String,
    /// 住所
    pub address: String,
    /// 訪問日
    pub date: NaiveDate,
    /// 性別
    pub gender: Gender,
    /// 年齢
    pub age: u32,
    /// 所属
    pub organization: String,
    /// 訪問目的
    pub purpose: String,
    /// 署名画像
    pub signature: String,
}

impl NewLogEntry {
    /// 識別子と作成日時を付与してエントリを作る
    pub fn into_entry(self, id: u64, created_at: DateTime<Utc>) -> LogEntry {
        LogEntry {
            id,
            name: self.name,
            address: self.address,
            date: self.date.to_string(),
            gender: self.gender.to_string(),
            age: Some(self.age),
            organization: self.organization,
            purpose: self.purpose,
            signature: self.signature,
            created_at,
            updated_at: None,
        }
    }
}

/// 部分更新の内容
///
/// `None`のフィールドは既存値を維持する。識別子・署名・作成日時は更新対象外。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogEntryPatch {
    /// 氏名
    pub name: Option<String>,
    /// 住所
    pub address: Option<String>,
    /// 訪問日
    pub date: Option<NaiveDate>,
    /// 性別
    pub gender: Option<Gender>,
    /// 年齢
    pub age: Option<u32>,
    /// 所属
    pub organization: Option<String>,
    /// 訪問目的
    pub purpose: Option<String>,
}

impl LogEntryPatch {
    /// 更新フィールドが1つもないか
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// エントリへ反映し更新日時を刻む
    pub fn apply(self, entry: &mut LogEntry, updated_at: DateTime<Utc>) {
        if let Some(name) = self.name {
            entry.name = name;
        }
        if let Some(address) = self.address {
            entry.address = address;
        }
        if let Some(date) = self.date {
            entry.date = date.to_string();
        }
        if let Some(gender) = self.gender {
            entry.gender = gender.to_string();
        }
        if let Some(age) = self.age {
            entry.age = Some(age);
        }
        if let Some(organization) = self.organization {
            entry.organization = organization;
        }
        if let Some(purpose) = self.purpose {
            entry.purpose = purpose;
        }
        entry.updated_at = Some(updated_at);
    }
}
