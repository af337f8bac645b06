//! Utility functions
//!
//! Provides logging setup for the binary.

pub mod logging;
