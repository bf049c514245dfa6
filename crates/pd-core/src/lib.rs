//! Core types and errors shared across the PrimeDigit crates.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::TransitionReport;

/// Crate version (from Cargo.toml)
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
