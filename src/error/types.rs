//! Error types
//!
//! Defines the two validation failures a socket address can report.

use std::fmt;

/// Socket address validation errors
///
/// An invalid IP always wins: the port is only inspected once the address parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressError {
    /// The address text did not parse, or a structured tuple was malformed.
    InvalidIp,
    /// The port was not an integer in `0..=65535`.
    InvalidPort,
}

impl AddressError {
    /// Short classification tag, stable across releases.
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressError::InvalidIp => "invalid_ip",
            AddressError::InvalidPort => "invalid_port",
        }
    }
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::InvalidIp => write!(f, "Invalid IP address"),
            AddressError::InvalidPort => write!(f, "Invalid port: must be between 0 and 65535"),
        }
    }
}

impl std::error::Error for AddressError {}
