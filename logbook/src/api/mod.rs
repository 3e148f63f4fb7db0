//! REST APIハンドラー
//!
//! 来訪ログCRUD、管理者認証、印刷用レポート、画面配信

pub mod auth;
pub mod dashboard;
pub mod error;
pub mod logs;

use crate::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// リクエストボディ上限（署名画像のdata URLを含むため大きめ）
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// アプリケーションルーターを作成
pub fn create_app(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            "/api/logs",
            get(logs::list_logs)
                .post(logs::create_log)
                .fallback(error::method_not_allowed),
        )
        .route(
            "/api/logs/:id",
            get(logs::get_log)
                .put(logs::update_log)
                .delete(logs::delete_log)
                .fallback(error::method_not_allowed),
        )
        .route(
            "/api/auth/login",
            post(auth::login).fallback(error::method_not_allowed),
        )
        .route(
            "/api/auth/register",
            post(auth::register).fallback(error::method_not_allowed),
        )
        .route("/admin/report", get(logs::print_report));

    let ui_routes = Router::new()
        .route("/", get(dashboard::visitor_form))
        .route("/admin/login", get(dashboard::admin_login_page))
        .route("/admin/register", get(dashboard::admin_register_page))
        .route("/admin/dashboard", get(dashboard::admin_dashboard_page))
        .route("/static/*path", get(dashboard::static_asset))
        .route("/health", get(dashboard::health));

    Router::new()
        .merge(api_routes)
        .merge(ui_routes)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
