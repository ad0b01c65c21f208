//! nameof version information.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.
//! - Prefer this constant over repeating `env!("CARGO_PKG_VERSION")` in multiple places.

/// The nameof version string (for example, `0.9.0`).
pub const NAMEOF_VERSION: &str = env!("CARGO_PKG_VERSION");
