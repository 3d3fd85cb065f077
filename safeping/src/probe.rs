//! Probe executor
//!
//! Runs the reachability utility against a validated [`Hostname`] with an
//! argument vector (no shell), under a hard timeout.

use crate::config::ProbeConfig;
use crate::error::ProbeError;
use crate::hostname::Hostname;
use async_trait::async_trait;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Flag limiting the number of echo requests
#[cfg(windows)]
pub const COUNT_FLAG: &str = "-n";
/// Flag limiting the number of echo requests
#[cfg(not(windows))]
pub const COUNT_FLAG: &str = "-c";

/// Result of one completed probe run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    /// Exit code, `None` if the child was terminated by a signal
    pub exit_code: Option<i32>,
    /// True when the child exited with status 0
    pub success: bool,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
    /// Wall time from spawn to exit
    pub elapsed: Duration,
}

impl ProbeOutcome {
    /// Body returned to the HTTP client.
    ///
    /// Stdout only on success. On failure stderr is appended, since that is
    /// where ping reports unknown or unreachable hosts.
    pub fn response_body(&self) -> String {
        if self.success || self.stderr.is_empty() {
            return self.stdout.clone();
        }
        let mut body = self.stdout.clone();
        if !body.is_empty() && !body.ends_with('\n') {
            body.push('\n');
        }
        body.push_str(&self.stderr);
        body
    }
}

/// Something that can check reachability of a host
#[async_trait]
pub trait Prober: Send + Sync {
    /// Probe `host` once. A non-zero exit is an `Ok` outcome, not an error.
    async fn probe(&self, host: &Hostname) -> Result<ProbeOutcome, ProbeError>;
}

/// [`Prober`] backed by the system `ping`
#[derive(Debug, Clone)]
pub struct PingProber {
    config: ProbeConfig,
}

impl PingProber {
    /// Create a prober using `config`
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Argument vector passed after the program name
    pub fn args(&self, host: &Hostname) -> Vec<String> {
        vec![
            COUNT_FLAG.to_string(),
            self.config.count.to_string(),
            host.as_str().to_string(),
        ]
    }
}

#[async_trait]
impl Prober for PingProber {
    async fn probe(&self, host: &Hostname) -> Result<ProbeOutcome, ProbeError> {
        let started = Instant::now();

        let child = Command::new(&self.config.program)
            .args(self.args(host))
            .env("LC_ALL", "C")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ProbeError::Spawn {
                program: self.config.program.clone(),
                source,
            })?;

        // Dropping the future on expiry drops the child, which kills it.
        let output = match timeout(self.config.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(ProbeError::Io)?,
            Err(_) => {
                warn!(
                    host = %host,
                    timeout_ms = self.config.timeout.as_millis() as u64,
                    "Probe timed out, child killed"
                );
                return Err(ProbeError::Timeout(self.config.timeout));
            }
        };

        let outcome = ProbeOutcome {
            exit_code: output.status.code(),
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            elapsed: started.elapsed(),
        };

        debug!(
            host = %host,
            exit_code = ?outcome.exit_code,
            elapsed_ms = outcome.elapsed.as_millis() as u64,
            "Probe finished"
        );

        Ok(outcome)
    }
}
