//! Error handlers
//!
//! Bridges validation errors into the configuration layer.

use crate::error::types::AddressError;

/// Convert a validation error into a configuration error naming the field
pub fn to_config_error(field: &str, err: AddressError) -> config::ConfigError {
    config::ConfigError::Message(format!("{} ({}): {}", field, err.as_str(), err))
}
