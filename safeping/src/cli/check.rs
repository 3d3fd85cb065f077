//! check subcommand
//!
//! Runs the same validation and probe path as `POST /ping` from the terminal.

use super::ProbeArgs;
use crate::error::ProbeError;
use crate::hostname::Hostname;
use crate::probe::{PingProber, Prober};
use anyhow::Result;
use clap::Args;
use std::io::Write;

/// Exit code used when the host fails validation
pub const EXIT_INVALID_HOST: i32 = 2;
/// Exit code used when the probe timed out
pub const EXIT_TIMEOUT: i32 = 124;

/// Arguments for `check`
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Hostname or IP address to probe
    pub host: String,

    /// Probe options
    #[command(flatten)]
    pub probe: ProbeArgs,
}

/// Execute `check`, returning the process exit code.
///
/// Spawn failures are returned as errors; everything else maps to a code.
pub async fn execute(args: &CheckArgs) -> Result<i32> {
    let host = match Hostname::parse(&args.host) {
        Ok(host) => host,
        Err(err) => {
            eprintln!("Invalid host: {err}");
            return Ok(EXIT_INVALID_HOST);
        }
    };

    let prober = PingProber::new(args.probe.to_config());
    match prober.probe(&host).await {
        Ok(outcome) => {
            print!("{}", outcome.response_body());
            std::io::stdout().flush()?;
            Ok(outcome.exit_code.unwrap_or(1))
        }
        Err(ProbeError::Timeout(after)) => {
            eprintln!("Probe timed out after {}s", after.as_secs_f32());
            Ok(EXIT_TIMEOUT)
        }
        Err(err) => Err(err.into()),
    }
}
