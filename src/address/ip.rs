//! IP address values
//!
//! Holds the validated, fixed-arity form of an IP address and the raw input
//! forms a caller may hand to the validator.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::AddressError;

/// Address family, determined by arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpFamily {
    Ipv4,
    Ipv6,
}

/// A validated IP address.
///
/// IPv4 carries exactly four octets and IPv6 exactly eight 16-bit groups, so
/// an out-of-range element or a wrong arity cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpAddress {
    V4([u8; 4]),
    V6([u16; 8]),
}

impl IpAddress {
    /// Parses dotted-decimal or colon-hex text.
    ///
    /// A colon selects IPv6; anything else must be strict dotted-decimal with
    /// exactly four octets.
    pub fn parse_text(text: &str) -> Result<Self, AddressError> {
        let parsed = if text.contains(':') {
            text.parse::<Ipv6Addr>().map(IpAddr::V6)
        } else {
            text.parse::<Ipv4Addr>().map(IpAddr::V4)
        };
        parsed.map(IpAddress::from).map_err(|_| AddressError::InvalidIp)
    }

    /// Validates an externally supplied structured tuple.
    ///
    /// The elements are range and arity checked first, then rendered to text
    /// and parsed back; both steps must agree.
    pub fn from_tuple(elements: &[i64]) -> Result<Self, AddressError> {
        let checked = check_tuple(elements)?;
        let reparsed = Self::parse_text(&checked.to_string())?;
        if reparsed != checked {
            return Err(AddressError::InvalidIp);
        }
        Ok(reparsed)
    }

    pub fn family(&self) -> IpFamily {
        match self {
            IpAddress::V4(_) => IpFamily::Ipv4,
            IpAddress::V6(_) => IpFamily::Ipv6,
        }
    }

    /// Number of elements in the structured form (4 or 8).
    pub fn arity(&self) -> usize {
        match self {
            IpAddress::V4(octets) => octets.len(),
            IpAddress::V6(groups) => groups.len(),
        }
    }

    /// Elements of the structured form, widened to a common integer type.
    pub fn segments(&self) -> Vec<u32> {
        match self {
            IpAddress::V4(octets) => octets.iter().map(|&o| u32::from(o)).collect(),
            IpAddress::V6(groups) => groups.iter().map(|&g| u32::from(g)).collect(),
        }
    }

    pub fn to_std(&self) -> IpAddr {
        match *self {
            IpAddress::V4(octets) => IpAddr::V4(Ipv4Addr::from(octets)),
            IpAddress::V6(groups) => IpAddr::V6(Ipv6Addr::from(groups)),
        }
    }
}

/// Range and arity check, without the text round trip.
fn check_tuple(elements: &[i64]) -> Result<IpAddress, AddressError> {
    match elements.len() {
        4 => {
            let mut octets = [0u8; 4];
            for (slot, &element) in octets.iter_mut().zip(elements) {
                *slot = u8::try_from(element).map_err(|_| AddressError::InvalidIp)?;
            }
            Ok(IpAddress::V4(octets))
        }
        8 => {
            let mut groups = [0u16; 8];
            for (slot, &element) in groups.iter_mut().zip(elements) {
                *slot = u16::try_from(element).map_err(|_| AddressError::InvalidIp)?;
            }
            Ok(IpAddress::V6(groups))
        }
        _ => Err(AddressError::InvalidIp),
    }
}

/// Dotted-decimal for IPv4; compressed, upper-case colon-hex for IPv6.
impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_std() {
            IpAddr::V4(v4) => write!(f, "{}", v4),
            IpAddr::V6(v6) => write!(f, "{}", v6.to_string().to_ascii_uppercase()),
        }
    }
}

impl FromStr for IpAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_text(s)
    }
}

impl From<IpAddr> for IpAddress {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => IpAddress::V4(v4.octets()),
            IpAddr::V6(v6) => IpAddress::V6(v6.segments()),
        }
    }
}

impl From<IpAddress> for IpAddr {
    fn from(addr: IpAddress) -> Self {
        addr.to_std()
    }
}

/// Raw IP input as supplied by a caller or a configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IpInput {
    Text(String),
    Tuple(Vec<i64>),
}

impl IpInput {
    /// Resolves the input to a validated address; every failure is `InvalidIp`.
    pub fn resolve(&self) -> Result<IpAddress, AddressError> {
        match self {
            IpInput::Text(text) => IpAddress::parse_text(text),
            IpInput::Tuple(elements) => IpAddress::from_tuple(elements),
        }
    }
}

impl From<&str> for IpInput {
    fn from(text: &str) -> Self {
        IpInput::Text(text.to_string())
    }
}

impl From<String> for IpInput {
    fn from(text: String) -> Self {
        IpInput::Text(text)
    }
}

impl From<Vec<i64>> for IpInput {
    fn from(elements: Vec<i64>) -> Self {
        IpInput::Tuple(elements)
    }
}

impl From<&[i64]> for IpInput {
    fn from(elements: &[i64]) -> Self {
        IpInput::Tuple(elements.to_vec())
    }
}

impl From<[u8; 4]> for IpInput {
    fn from(octets: [u8; 4]) -> Self {
        IpInput::Tuple(octets.iter().map(|&o| i64::from(o)).collect())
    }
}

impl From<[u16; 8]> for IpInput {
    fn from(groups: [u16; 8]) -> Self {
        IpInput::Tuple(groups.iter().map(|&g| i64::from(g)).collect())
    }
}

impl From<IpAddress> for IpInput {
    fn from(addr: IpAddress) -> Self {
        match addr {
            IpAddress::V4(octets) => octets.into(),
            IpAddress::V6(groups) => groups.into(),
        }
    }
}

impl From<IpAddr> for IpInput {
    fn from(addr: IpAddr) -> Self {
        IpAddress::from(addr).into()
    }
}

impl From<Ipv4Addr> for IpInput {
    fn from(addr: Ipv4Addr) -> Self {
        addr.octets().into()
    }
}

impl From<Ipv6Addr> for IpInput {
    fn from(addr: Ipv6Addr) -> Self {
        addr.segments().into()
    }
}
