//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use crate::hostname::HostnameError;
use axum::http::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Probe request error type
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The `host` form field was not supplied
    #[error("missing host field")]
    MissingHost,

    /// The request body could not be read as a form
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// The hostname failed the allow-list
    #[error("invalid host: {0}")]
    InvalidHost(#[from] HostnameError),

    /// The probe program could not be started
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        /// Program that failed to start
        program: String,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// The probe program started but its output could not be collected
    #[error("failed to collect probe output: {0}")]
    Io(#[source] std::io::Error),

    /// The probe did not finish within the configured timeout
    #[error("probe timed out after {0:?}")]
    Timeout(Duration),
}

impl ProbeError {
    /// Returns a safe error message for external clients.
    ///
    /// Never includes OS error text, paths, or the program name. Use the
    /// `Display` implementation for server logs.
    pub fn external_message(&self) -> &'static str {
        match self {
            Self::MissingHost | Self::MalformedRequest(_) | Self::InvalidHost(_) => "Invalid host",
            Self::Spawn { .. } | Self::Io(_) => "Probe unavailable",
            Self::Timeout(_) => "Probe timed out",
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingHost | Self::MalformedRequest(_) | Self::InvalidHost(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Spawn { .. } | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    /// True for errors caused by the request rather than the server
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}
