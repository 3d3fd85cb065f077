//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables, plus the
//! server and probe configuration structures. `from_env` reads the same
//! `SAFEPING_*` names as the clap `env` attributes in `cli`.

use std::time::Duration;

/// Default bind address (all interfaces)
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;
/// Default probe program
pub const DEFAULT_PING_PROGRAM: &str = "ping";
/// Default number of echo requests per probe
pub const DEFAULT_PROBE_COUNT: u32 = 1;
/// Default probe timeout in seconds
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 5;

const MAX_PROBE_COUNT: u32 = 10;
const MIN_PROBE_TIMEOUT_SECS: u64 = 1;
const MAX_PROBE_TIMEOUT_SECS: u64 = 60;

/// Get an environment variable with fallback to a secondary name
///
/// If the primary variable is set, returns its value. Otherwise the fallback
/// variable is consulted and its use is logged at debug level.
///
/// # Example
/// ```
/// use safeping::config::get_env_with_fallback;
///
/// let level = get_env_with_fallback("SAFEPING_LOG_LEVEL", "RUST_LOG");
/// ```
pub fn get_env_with_fallback(name: &str, fallback: &str) -> Option<String> {
    if let Ok(val) = std::env::var(name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(fallback) {
        tracing::debug!("Environment variable '{}' not set, using '{}'", name, fallback);
        return Some(val);
    }
    None
}

/// Get an environment variable or a default value
pub fn get_env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Get an environment variable parsed to a specific type
///
/// Returns `default` if the variable is unset or fails to parse.
pub fn get_env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Environment variable '{}' has invalid value '{}', using default",
                name,
                raw
            );
            default
        }),
        Err(_) => default,
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind, e.g. `0.0.0.0`
    pub bind_address: String,
    /// Port to listen on
    pub port: u16,
}

impl ServerConfig {
    /// Build from explicit values
    pub fn new(bind_address: impl Into<String>, port: u16) -> Self {
        Self {
            bind_address: bind_address.into(),
            port,
        }
    }

    /// Load from `SAFEPING_HOST` / `SAFEPING_PORT`
    ///
    /// Reads the same variables as `serve -H/-p`. Generic `HOST` / `PORT`
    /// are ignored.
    pub fn from_env() -> Self {
        let bind_address = get_env_or("SAFEPING_HOST", DEFAULT_BIND_ADDRESS);
        let port = get_env_parse("SAFEPING_PORT", DEFAULT_PORT);
        Self { bind_address, port }
    }

    /// `host:port` string for `TcpListener::bind`
    pub fn bind_addr(&self) -> String {
        if self.bind_address.contains(':') && !self.bind_address.starts_with('[') {
            format!("[{}]:{}", self.bind_address, self.port)
        } else {
            format!("{}:{}", self.bind_address, self.port)
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BIND_ADDRESS, DEFAULT_PORT)
    }
}

/// Probe executor configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Program launched for each probe
    pub program: String,
    /// Echo requests per probe (1-10)
    pub count: u32,
    /// Upper bound on a single probe run (1-60s)
    pub timeout: Duration,
}

impl ProbeConfig {
    /// Build from explicit values, clamping count and timeout into range.
    pub fn new(program: impl Into<String>, count: u32, timeout: Duration) -> Self {
        let timeout = timeout.clamp(
            Duration::from_secs(MIN_PROBE_TIMEOUT_SECS),
            Duration::from_secs(MAX_PROBE_TIMEOUT_SECS),
        );
        Self {
            program: program.into(),
            count: count.clamp(1, MAX_PROBE_COUNT),
            timeout,
        }
    }

    /// Load from environment variables.
    pub fn from_env() -> Self {
        let program = get_env_or("SAFEPING_PING_PROGRAM", DEFAULT_PING_PROGRAM);
        let count = get_env_parse("SAFEPING_PROBE_COUNT", DEFAULT_PROBE_COUNT);
        let timeout_secs =
            get_env_parse("SAFEPING_PROBE_TIMEOUT_SECS", DEFAULT_PROBE_TIMEOUT_SECS);
        Self::new(program, count, Duration::from_secs(timeout_secs))
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_PING_PROGRAM,
            DEFAULT_PROBE_COUNT,
            Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS),
        )
    }
}
