//! Error handling
//!
//! Defines error types and their conversion into configuration errors.

pub mod handlers;
pub mod types;

pub use types::*;
