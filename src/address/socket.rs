//! Module `socket`
//!
//! Defines `SocketAddress`, the validated pairing of an IP address and a port
//! used to describe where a listener should bind.

use log::debug;
use std::fmt;
use std::net::SocketAddr;

use super::ip::{IpAddress, IpInput};
use super::options::{IP_KEY, ListenerOptions, OptionValue, PORT_KEY};
use super::port::{PortInput, validate_port};
use crate::error::AddressError;

/// A validated socket address.
///
/// Only obtainable through [`SocketAddress::new`], so the address always has
/// a valid arity and range and the port always fits in `0..=65535`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SocketAddress {
    ip: IpAddress,
    port: u16,
}

impl SocketAddress {
    /// Validates an IP input and a port.
    ///
    /// # Arguments
    ///
    /// * `ip` - Dotted-decimal or colon-hex text, or a structured tuple of 4 or 8 elements
    /// * `port` - Candidate port number
    ///
    /// # Returns
    ///
    /// * `Ok(SocketAddress)` - Both parts are valid
    /// * `Err(AddressError::InvalidIp)` - The address did not parse; reported even when the port is also bad
    /// * `Err(AddressError::InvalidPort)` - The address parsed but the port is not an integer in range
    pub fn new(ip: impl Into<IpInput>, port: impl Into<PortInput>) -> Result<Self, AddressError> {
        let ip_input = ip.into();
        let ip = ip_input
            .resolve()
            .inspect_err(|_| debug!("Rejected IP address {:?}", ip_input))?;

        let port_input = port.into();
        let port = validate_port(&port_input)
            .inspect_err(|_| debug!("Rejected port {:?} for {}", port_input, ip))?;

        Ok(Self { ip, port })
    }

    pub fn ip(&self) -> IpAddress {
        self.ip
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Canonical text: `A.B.C.D:PORT` or `[IPV6]:PORT`.
    pub fn to_text(&self) -> String {
        match self.ip {
            IpAddress::V4(_) => format!("{}:{}", self.ip, self.port),
            IpAddress::V6(_) => format!("[{}]:{}", self.ip, self.port),
        }
    }

    /// The `ip` and `port` entries alone.
    pub fn base_options(&self) -> ListenerOptions {
        let mut options = ListenerOptions::new();
        options.set(IP_KEY, OptionValue::Ip(self.ip));
        options.set(PORT_KEY, OptionValue::Port(self.port));
        options
    }

    /// Base options merged with `extra`; a key in `extra` replaces the base
    /// entry in place, unknown keys are appended in the order given.
    pub fn to_options<I, K, V>(&self, extra: I) -> ListenerOptions
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OptionValue>,
    {
        self.base_options().merge(extra)
    }

    pub fn to_std(&self) -> SocketAddr {
        SocketAddr::new(self.ip.to_std(), self.port)
    }
}

impl fmt::Display for SocketAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<SocketAddress> for SocketAddr {
    fn from(addr: SocketAddress) -> Self {
        addr.to_std()
    }
}
