//! REST APIハンドラー
//!
//! ランディングページ、ping実行、ヘルスチェック

pub mod error;
pub mod index;
pub mod ping;

use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// APIルーターを作成
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::landing_page))
        .route("/health", get(index::health))
        .route("/ping", post(ping::ping))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
