//! Core module containing fundamental types for coremem

pub mod types;

pub use types::{AccessError, AccessResult, Address, Direction};

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
