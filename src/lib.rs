//! listen-addr
//!
//! Validated socket addresses for building listener-binding configuration.
//! Addresses are parsed and range checked only; nothing is bound or resolved.

pub mod address;
pub mod config;
pub mod error;
pub mod utils;

pub use address::{
    IpAddress, IpFamily, IpInput, ListenerOptions, OptionValue, PortInput, SocketAddress,
};
pub use error::AddressError;
