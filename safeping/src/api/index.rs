//! ランディングページとヘルスチェック

use axum::{response::Html, Json};
use serde::Serialize;

const LANDING_PAGE: &str = include_str!("../../assets/index.html");

/// ヘルスチェックレスポンス
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving
    pub status: &'static str,
    /// Crate version
    pub version: &'static str,
}

/// GET / - 静的なフォームページ
pub async fn landing_page() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
