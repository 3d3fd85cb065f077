//! Logging initialisation
//!
//! `SAFEPING_LOG_LEVEL` (fallback `RUST_LOG`) selects the filter,
//! `SAFEPING_LOG_FORMAT` selects `pretty` or `json` console output, and
//! `SAFEPING_LOG_DIR` additionally writes JSON lines to a daily rolling file.

use crate::config::get_env_with_fallback;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_FILE_PREFIX: &str = "safeping.log";

/// Console output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    /// Parse a format name; unknown names fall back to `Pretty`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }

    /// Read from `SAFEPING_LOG_FORMAT`
    pub fn from_env() -> Self {
        std::env::var("SAFEPING_LOG_FORMAT")
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }
}

/// Filter directive from the environment, `info` if unset
pub fn filter_directive() -> String {
    get_env_with_fallback("SAFEPING_LOG_LEVEL", "RUST_LOG")
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

/// Directory for the rolling log file, if configured
pub fn log_dir() -> Option<PathBuf> {
    std::env::var_os("SAFEPING_LOG_DIR")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Install the global subscriber.
pub fn init() -> anyhow::Result<()> {
    let directive = filter_directive();
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|err| {
        eprintln!("Invalid log filter '{directive}': {err}, using '{DEFAULT_LOG_LEVEL}'");
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    });

    let file_layer = log_dir().map(|dir| {
        fmt::layer()
            .json()
            .with_ansi(false)
            .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
    });

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);
    match LogFormat::from_env() {
        LogFormat::Json => registry.with(fmt::layer().json()).try_init()?,
        LogFormat::Pretty => registry.with(fmt::layer()).try_init()?,
    }
    Ok(())
}
