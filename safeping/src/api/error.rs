//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use crate::error::ProbeError;
use crate::hostname::HostnameError;
use axum::{
    http::header,
    response::{IntoResponse, Response},
};

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub ProbeError);

impl From<ProbeError> for AppError {
    fn from(err: ProbeError) -> Self {
        AppError(err)
    }
}

impl From<HostnameError> for AppError {
    fn from(err: HostnameError) -> Self {
        AppError(ProbeError::InvalidHost(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Full error details stay in the server log; clients get external_message()
        if self.0.is_client_error() {
            tracing::warn!(error = %self.0, "Rejected ping request");
        } else {
            tracing::error!(error = %self.0, "Ping request failed");
        }

        (
            self.0.status_code(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.0.external_message(),
        )
            .into_response()
    }
}
