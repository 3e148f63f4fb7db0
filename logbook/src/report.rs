//! 印刷用レポート
//!
//! ログ一覧をA4横向きの印刷用HTMLに整形する。ブラウザで開くと読み込み後に
//! 印刷ダイアログを表示し、印刷後にウィンドウを閉じる。

use crate::types::log_entry::{LogEntry, DEFAULT_ORGANIZATION};
use chrono::{DateTime, Local};
use std::fmt::Write;

const REPORT_STYLE: &str = r#"
      @media print {
        @page { size: A4 landscape; margin: 15mm; }
        body { -webkit-print-color-adjust: exact; print-color-adjust: exact; }
      }
      * { margin: 0; padding: 0; box-sizing: border-box; }
      body { font-family: Arial, sans-serif; padding: 20px; background: white; }
      .header { text-align: center; margin-bottom: 30px; border-bottom: 3px solid #4F46E5; padding-bottom: 20px; }
      .header h1 { color: #1F2937; font-size: 28px; margin-bottom: 5px; }
      .header p { color: #6B7280; font-size: 14px; }
      .meta-info { display: flex; justify-content: space-between; margin-bottom: 20px; padding: 15px; background: #F3F4F6; border-radius: 8px; }
      .meta-info div { font-size: 13px; }
      .meta-info strong { color: #374151; }
      table { width: 100%; border-collapse: collapse; margin-top: 20px; font-size: 12px; }
      thead { background: #4F46E5; color: white; }
      th { padding: 12px 8px; text-align: left; font-weight: 600; text-transform: uppercase; font-size: 11px; letter-spacing: 0.5px; }
      td { padding: 10px 8px; border-bottom: 1px solid #E5E7EB; color: #374151; }
      tbody tr:nth-child(even) { background: #F9FAFB; }
      .signature-cell { max-width: 80px; }
      .signature-cell img { max-width: 80px; max-height: 40px; border: 1px solid #D1D5DB; border-radius: 4px; }
      .purpose-cell { max-width: 150px; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
      .footer { margin-top: 30px; text-align: center; padding-top: 20px; border-top: 2px solid #E5E7EB; font-size: 11px; color: #6B7280; }
      .no-data { text-align: center; padding: 40px; color: #9CA3AF; font-size: 14px; }
"#;

const AUTO_PRINT_SCRIPT: &str = r#"
      window.onload = function () {
        setTimeout(function () { window.print(); }, 500);
      };
      window.onafterprint = function () { window.close(); };
"#;

/// HTML特殊文字をエスケープ
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// 表示に使う訪問日の範囲（末尾エントリ - 先頭エントリ）
pub fn date_range(entries: &[LogEntry]) -> String {
    match (entries.first(), entries.last()) {
        (Some(first), Some(last)) => {
            format!("{} - {}", escape_html(&last.date), escape_html(&first.date))
        }
        _ => "N/A".to_string(),
    }
}

fn signature_cell(signature: &str) -> String {
    // data URL以外はimgに埋め込まない
    if signature.starts_with("data:image/") {
        format!(
            "<img src=\"{}\" alt=\"Signature\" />",
            escape_html(signature)
        )
    } else {
        String::new()
    }
}

fn render_rows(entries: &[LogEntry]) -> String {
    let mut rows = String::new();
    for (index, entry) in entries.iter().enumerate() {
        let organization = if entry.organization.is_empty() {
            DEFAULT_ORGANIZATION
        } else {
            entry.organization.as_str()
        };
        let purpose = escape_html(&entry.purpose);
        let _ = write!(
            rows,
            "\n          <tr>\
             <td>{}</td>\
             <td><strong>{}</strong></td>\
             <td>{}</td>\
             <td>{}</td>\
             <td>{}</td>\
             <td>{}</td>\
             <td>{}</td>\
             <td class=\"purpose-cell\" title=\"{}\">{}</td>\
             <td class=\"signature-cell\">{}</td>\
             </tr>",
            index + 1,
            escape_html(&entry.name),
            escape_html(&entry.address),
            escape_html(&entry.date),
            escape_html(&entry.gender),
            entry.age.map(|age| age.to_string()).unwrap_or_default(),
            escape_html(organization),
            purpose,
            purpose,
            signature_cell(&entry.signature),
        );
    }
    rows
}

fn render_body(entries: &[LogEntry]) -> String {
    if entries.is_empty() {
        return r#"
    <div class="no-data">
      <p>No visitor logs available to display.</p>
    </div>"#
            .to_string();
    }
    format!(
        r#"
    <table>
      <thead>
        <tr>
          <th style="width: 5%;">#</th>
          <th style="width: 15%;">Name</th>
          <th style="width: 15%;">Address</th>
          <th style="width: 10%;">Date</th>
          <th style="width: 8%;">Gender</th>
          <th style="width: 5%;">Age</th>
          <th style="width: 12%;">Organization</th>
          <th style="width: 20%;">Purpose</th>
          <th style="width: 10%;">Signature</th>
        </tr>
      </thead>
      <tbody>{}
      </tbody>
    </table>"#,
        render_rows(entries)
    )
}

/// 印刷用レポートHTMLを生成
///
/// # Arguments
/// * `entries` - 表示するエントリ（表示順）
/// * `generated_at` - 生成日時
pub fn render_report(entries: &[LogEntry], generated_at: DateTime<Local>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8" />
    <title>Visitor Logbook Report</title>
    <style>{style}</style>
  </head>
  <body>
    <div class="header">
      <h1>Visitor Logbook Report</h1>
      <p>Complete visitor logs and information</p>
    </div>
    <div class="meta-info">
      <div><strong>Total Entries:</strong> {total}</div>
      <div><strong>Generated:</strong> {generated}</div>
      <div><strong>Date Range:</strong> {range}</div>
    </div>
{body}
    <div class="footer">
      <p>This is an official document generated from the Visitor Logbook System</p>
      <p>Printed on {printed_date} at {printed_time}</p>
    </div>
    <script>{script}</script>
  </body>
</html>
"#,
        style = REPORT_STYLE,
        total = entries.len(),
        generated = generated_at.format("%B %-d, %Y, %I:%M %p"),
        range = date_range(entries),
        body = render_body(entries),
        printed_date = generated_at.format("%-m/%-d/%Y"),
        printed_time = generated_at.format("%-I:%M:%S %p"),
        script = AUTO_PRINT_SCRIPT,
    )
}
