//! Configuration management for listen-addr
//!
//! Loads a listener definition (address, port and extra bind options) from
//! `config.toml` with environment overrides and runs it through the validator.

use config::{Config, ConfigError, Environment, File, FileFormat};
use log::{debug, info};
use serde::Deserialize;

use crate::address::{IpInput, ListenerOptions, OptionValue, PortInput, SocketAddress};
use crate::error::AddressError;
use crate::error::handlers::to_config_error;

/// Listener definition as written in configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListenerConfig {
    /// Address text (`"127.0.0.1"`, `"::1"`) or tuple (`[127, 0, 0, 1]`)
    /// Environment: LISTEN_ADDR_IP
    pub ip: IpInput,

    /// Port to bind
    /// Environment: LISTEN_ADDR_PORT
    pub port: PortInput,

    /// Extra bind options, applied in order on top of `ip` and `port` (TOML only)
    #[serde(default)]
    pub options: Vec<OptionEntry>,
}

/// One `{ key = ..., value = ... }` table of the `options` list
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OptionEntry {
    pub key: String,
    pub value: OptionValue,
}

impl ListenerConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        // Try installed path first, then development path
        let config_paths = ["listen-addr/config", "config"];

        let mut last_error = None;

        for config_path in &config_paths {
            match Config::builder()
                .add_source(File::with_name(config_path))
                .add_source(Environment::with_prefix("LISTEN_ADDR").try_parsing(true))
                .build()
            {
                Ok(settings) => {
                    info!("Loaded listener configuration from {}", config_path);
                    return settings.try_deserialize();
                }
                Err(e) => {
                    debug!("Could not load configuration from {}: {}", config_path, e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ConfigError::Message(format!("No configuration found. Tried: {config_paths:?}"))
        }))
    }

    /// Parse configuration from TOML text, without environment overrides
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Validate the address and merge the configured options over `ip` and `port`
    pub fn resolve(&self) -> Result<(SocketAddress, ListenerOptions), ConfigError> {
        let address = SocketAddress::new(self.ip.clone(), self.port.clone()).map_err(|e| {
            let field = match e {
                AddressError::InvalidIp => "ip",
                AddressError::InvalidPort => "port",
            };
            to_config_error(field, e)
        })?;

        let options = address.to_options(
            self.options
                .iter()
                .map(|entry| (entry.key.clone(), entry.value.clone())),
        );

        Ok((address, options))
    }
}
