//! CLI module for safeping
//!
//! Provides the command-line interface for serving and one-off checks.

pub mod check;
pub mod serve;

use crate::config::ProbeConfig;
use clap::{Args, Parser, Subcommand};
use std::time::Duration;

/// safeping - ping a host through a validated HTTP form
#[derive(Parser, Debug)]
#[command(name = "safeping")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    SAFEPING_HOST                 Bind address (default: 0.0.0.0)
    SAFEPING_PORT                 Listen port (default: 5000)
    SAFEPING_PROBE_TIMEOUT_SECS   Per-probe timeout in seconds, 1-60 (default: 5)
    SAFEPING_PROBE_COUNT          Echo requests per probe, 1-10 (default: 1)
    SAFEPING_PING_PROGRAM         Probe program (default: ping)
    SAFEPING_LOG_LEVEL            Log level (default: info)
    SAFEPING_LOG_FORMAT           pretty | json (default: pretty)
    SAFEPING_LOG_DIR              Also write a daily rolling log file here
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Validate and probe a single host, then exit with ping's status
    Check(check::CheckArgs),
}

/// Probe options shared by `serve` and `check`
#[derive(Args, Debug, Clone)]
pub struct ProbeArgs {
    /// Per-probe timeout in seconds (1-60)
    #[arg(long, default_value = "5", env = "SAFEPING_PROBE_TIMEOUT_SECS")]
    pub probe_timeout_secs: u64,

    /// Echo requests per probe (1-10)
    #[arg(long, default_value = "1", env = "SAFEPING_PROBE_COUNT")]
    pub probe_count: u32,

    /// Probe program
    #[arg(long, default_value = "ping", env = "SAFEPING_PING_PROGRAM")]
    pub ping_program: String,
}

impl ProbeArgs {
    /// Convert into a clamped [`ProbeConfig`]
    pub fn to_config(&self) -> ProbeConfig {
        ProbeConfig::new(
            self.ping_program.clone(),
            self.probe_count,
            Duration::from_secs(self.probe_timeout_secs),
        )
    }
}
