//! POST /ping

use super::error::AppError;
use crate::error::ProbeError;
use crate::hostname::Hostname;
use crate::AppState;
use axum::{
    extract::{rejection::FormRejection, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use tracing::info;

/// Header carrying the probe's exit code
pub const PROBE_EXIT_CODE_HEADER: &str = "x-probe-exit-code";

/// フォーム入力
#[derive(Debug, Clone, Deserialize)]
pub struct PingForm {
    /// 対象ホスト（未指定は明示的に拒否）
    pub host: Option<String>,
}

/// POST /ping - ホストを検証してpingを1回実行
pub async fn ping(
    State(state): State<AppState>,
    form: Result<Form<PingForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(form) =
        form.map_err(|rejection| ProbeError::MalformedRequest(rejection.body_text()))?;
    let raw = form.host.ok_or(ProbeError::MissingHost)?;
    let host = Hostname::parse(&raw)?;

    let outcome = state.prober.probe(&host).await?;
    info!(
        host = %host,
        exit_code = ?outcome.exit_code,
        success = outcome.success,
        elapsed_ms = outcome.elapsed.as_millis() as u64,
        "Probe completed"
    );

    let mut response = (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        outcome.response_body(),
    )
        .into_response();
    if let Some(code) = outcome.exit_code {
        response
            .headers_mut()
            .insert(PROBE_EXIT_CODE_HEADER, HeaderValue::from(code));
    }
    Ok(response)
}
