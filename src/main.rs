//! listen-addr - Entry Point
//!
//! Validates the configured listener address and prints its canonical form
//! and bind options.

use log::{error, info};
use std::process::ExitCode;

use listen_addr::config::ListenerConfig;
use listen_addr::utils::logging::setup_logging;

fn main() -> ExitCode {
    setup_logging();

    info!("Validating listener configuration...");

    let config = match ListenerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load listener configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match config.resolve() {
        Ok((address, options)) => {
            info!("Listener address {} is valid", address);
            println!("{}", address.to_text());
            for (key, value) in options.iter() {
                println!("{} = {}", key, value);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Invalid listener configuration: {}", e);
            ExitCode::FAILURE
        }
    }
}
