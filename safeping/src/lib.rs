//! safeping server
//!
//! フォームで受け取ったホスト名を検証し、`ping` を引数ベクタで実行する

#![warn(missing_docs)]

/// REST APIハンドラー
pub mod api;

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// エラー型定義
pub mod error;

/// ホスト名の許可リスト検証
pub mod hostname;

/// ロギング初期化ユーティリティ
pub mod logging;

/// ping実行（タイムアウト付き）
pub mod probe;

use std::sync::Arc;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// 到達性チェックの実行器
    pub prober: Arc<dyn probe::Prober>,
}

impl AppState {
    /// Build state around the system `ping` with the given configuration
    pub fn new(config: config::ProbeConfig) -> Self {
        Self::with_prober(Arc::new(probe::PingProber::new(config)))
    }

    /// Build state around any [`probe::Prober`]
    pub fn with_prober(prober: Arc<dyn probe::Prober>) -> Self {
        Self { prober }
    }
}
