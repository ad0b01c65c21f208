//! Provide the pure, const-evaluable pieces of `nameof`: identifier extraction and enum range policy.
//!
//! This crate is intentionally small and dependency-light so both the runtime facade (`nameof`) and the
//! derive macro (`nameof_derive`) apply the same rules.
//!
//! ## Notes
//!
//! - **No IO**, no global state, no allocation.
//! - [`extract_identifier`] is the only text-processing routine; everything else in the workspace feeds it
//!   signatures or consumes its output.

pub mod errors;
pub mod extract;
pub mod range;

pub use errors::RangeError;
pub use extract::{NameSpan, extract_identifier, extract_span, is_identifier};
pub use range::{Discriminant, EnumRange};
