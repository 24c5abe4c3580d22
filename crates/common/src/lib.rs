//! FocusPair Common Utilities
//!
//! Shared infrastructure for all FocusPair crates:
//! - Error types and result aliases
//! - Session configuration loading
//! - Tracing/logging initialization

pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::*;
