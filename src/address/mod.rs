//! Socket address validation
//!
//! Parses and validates IP/port pairs and derives their text and option-list forms.

pub mod ip;
pub mod options;
pub mod port;
pub mod socket;

// Re-export the public surface
pub use ip::{IpAddress, IpFamily, IpInput};
pub use options::{IP_KEY, ListenerOptions, OptionValue, PORT_KEY};
pub use port::{PortInput, validate_port};
pub use socket::SocketAddress;
