#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
//! Names of variables, functions, enum values and types, derived from what the toolchain already knows.
//!
//! Diagnostic and logging code can print `"max_depth"` or `"Red"` instead of numbers or hand-written string
//! literals that drift out of sync with renames.
//!
//! ## Pieces
//!
//! - [`extract_identifier`]: trims expression or signature text to the bare identifier it names
//!   (re-exported from `nameof_core`). Backs [`nameof!`], [`nameof_full!`] and [`nameof_raw!`].
//! - [`signature`]: the [`SignatureProvider`] seam that produces name-bearing text, with the [`Rustc`]
//!   provider (`core::any::type_name` and `#[derive(NamedEnum)]`).
//! - [`enums`]: range-bounded enum name tables ([`enum_name`]) and table-free constant lookup
//!   ([`enum_name_const`]).
//! - [`types`]: simple and full type names ([`type_name`], [`full_type_name`]).
//!
//! ## Panic Policy
//!
//! Lookups never panic: every "cannot resolve" outcome is the empty string. Invalid enum ranges are
//! rejected while compiling, not at run time.

// Let `#[derive(NamedEnum)]` expansions refer to `::nameof` inside this crate's own tests.
extern crate self as nameof;

pub mod cli;
pub mod enums;
mod macros;
pub mod signature;
pub mod types;
pub mod version;

pub use nameof_core::{EnumRange, NameSpan, RangeError, extract_identifier, extract_span, is_identifier};
pub use nameof_derive::NamedEnum;

pub use enums::{EnumNameTable, NamedEnum, enum_name, enum_name_const, enum_name_of};
pub use signature::{DefaultProvider, RawSignature, Rustc, SignatureProvider};
pub use types::{full_type_name, full_type_name_of_val, type_name, type_name_of_val};
