//! Port input and range validation

use serde::Deserialize;

use crate::error::AddressError;

/// Raw port input as supplied by a caller or a configuration file.
///
/// Only `Integer` can ever be valid; the other forms exist so that a
/// non-integer value is reported as `InvalidPort` rather than failing to load.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PortInput {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// Validates a port: an integer in `0..=65535`, both bounds inclusive.
pub fn validate_port(input: &PortInput) -> Result<u16, AddressError> {
    match input {
        PortInput::Integer(port) => u16::try_from(*port).map_err(|_| AddressError::InvalidPort),
        PortInput::Float(_) | PortInput::Text(_) => Err(AddressError::InvalidPort),
    }
}

macro_rules! port_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PortInput {
                fn from(port: $ty) -> Self {
                    PortInput::Integer(i64::from(port))
                }
            }
        )*
    };
}

port_from_integer!(u8, u16, u32, i8, i16, i32, i64);

// Anything beyond i64 is out of range anyway.
impl From<u64> for PortInput {
    fn from(port: u64) -> Self {
        PortInput::Integer(i64::try_from(port).unwrap_or(i64::MAX))
    }
}

impl From<usize> for PortInput {
    fn from(port: usize) -> Self {
        PortInput::Integer(i64::try_from(port).unwrap_or(i64::MAX))
    }
}

impl From<f64> for PortInput {
    fn from(port: f64) -> Self {
        PortInput::Float(port)
    }
}

impl From<&str> for PortInput {
    fn from(port: &str) -> Self {
        PortInput::Text(port.to_string())
    }
}

impl From<String> for PortInput {
    fn from(port: String) -> Self {
        PortInput::Text(port)
    }
}
