//! 画面・静的アセット配信
//!
//! `static/`配下をバイナリに埋め込み、来訪者フォームと管理画面を配信する。

use axum::{
    body::Body,
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use include_dir::{include_dir, Dir};
use serde_json::json;

static STATIC_ASSETS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/static");

/// 埋め込みアセットを取得
pub fn asset(path: &str) -> Option<&'static [u8]> {
    STATIC_ASSETS
        .get_file(path.trim_start_matches('/'))
        .map(|file| file.contents())
}

fn asset_response(path: &str) -> Response {
    let Some(contents) = asset(path) else {
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    };
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CACHE_CONTROL, "no-cache")
        .body(Body::from(contents))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

/// GET / - 来訪者記帳フォーム
pub async fn visitor_form() -> Response {
    asset_response("index.html")
}

/// GET /admin/login - 管理者ログイン画面
pub async fn admin_login_page() -> Response {
    asset_response("admin/login.html")
}

/// GET /admin/register - 管理者登録画面
pub async fn admin_register_page() -> Response {
    asset_response("admin/register.html")
}

/// GET /admin/dashboard - 管理ダッシュボード
pub async fn admin_dashboard_page() -> Response {
    asset_response("admin/dashboard.html")
}

/// GET /static/*path - CSS・JavaScript
pub async fn static_asset(Path(path): Path<String>) -> Response {
    if path.split('/').any(|segment| segment == "..") {
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    }
    asset_response(&path)
}

/// GET /health - 稼働確認
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
