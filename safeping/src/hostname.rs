//! Hostname allow-list validation
//!
//! A [`Hostname`] can only be built through [`Hostname::parse`], so every value
//! that reaches the probe executor has already passed the allow-list.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use thiserror::Error;

/// Maximum hostname length (RFC 1035)
pub const MAX_HOSTNAME_LENGTH: usize = 253;

static HOSTNAME_ALLOW_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9.-]+$").expect("valid regex"));

/// Reasons a hostname is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostnameError {
    /// Empty input
    #[error("hostname is empty")]
    Empty,

    /// Longer than [`MAX_HOSTNAME_LENGTH`]
    #[error("hostname too long ({0} bytes, max 253)")]
    TooLong(usize),

    /// Contains a character outside `[a-zA-Z0-9.-]`
    #[error("hostname contains characters outside [a-zA-Z0-9.-]")]
    InvalidCharacters,

    /// Starts with `-` and would be read as an option by the probe program
    #[error("hostname must not start with '-'")]
    LeadingHyphen,
}

/// A hostname or IP literal that passed the allow-list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hostname(String);

impl Hostname {
    /// Validate `input` and wrap it.
    ///
    /// Accepts only ASCII letters, digits, `.` and `-`, at most 253 bytes,
    /// not starting with `-`. The pattern is anchored at both ends, so a
    /// trailing newline or any shell metacharacter fails the match.
    pub fn parse(input: &str) -> Result<Self, HostnameError> {
        if input.is_empty() {
            return Err(HostnameError::Empty);
        }
        if input.len() > MAX_HOSTNAME_LENGTH {
            return Err(HostnameError::TooLong(input.len()));
        }
        if !HOSTNAME_ALLOW_LIST.is_match(input) {
            return Err(HostnameError::InvalidCharacters);
        }
        if input.starts_with('-') {
            return Err(HostnameError::LeadingHyphen);
        }
        Ok(Self(input.to_string()))
    }

    /// The validated hostname
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Hostname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
