//! Enum name resolution.
//!
//! Every enum deriving [`NamedEnum`](nameof_derive::NamedEnum) gets a table with one entry per integer in
//! its clamped [`EnumRange`]. Each entry is produced the same way: ask the provider for the raw signature of
//! `(Enum, value)`, window it, and run the identifier extractor with the template suffix kept. A value that
//! names no variant yields a numeric signature, which the extractor rejects; there is no other "is this a
//! variant" check in the resolution path.
//!
//! ## Notes
//! - Tables are built once, on first lookup, and cached in a per-type `OnceLock` emitted by the derive.
//! - Table entries are [`NameSpan`]s into signatures owned by the table, so lookups hand out `&'static str`.
//!   Only signatures that resolved to a name are kept.
//! - Out-of-range values, unnamed values and malformed signatures all resolve to `""`.

use nameof_core::{Discriminant, EnumRange, NameSpan, extract_span};

use crate::signature::{DefaultProvider, RawSignature, SignatureProvider};

/// A fieldless enum whose values can be resolved to their variant names.
///
/// Implement with `#[derive(NamedEnum)]`; the optional `#[nameof(range(min = .., max = ..))]` attribute
/// overrides [`NamedEnum::RANGE`].
pub trait NamedEnum: Sized + 'static {
    /// The `#[repr(..)]` integer type; bounds the table together with [`NamedEnum::RANGE`].
    type Repr: Discriminant;

    /// Values outside this range never resolve through [`enum_name`].
    const RANGE: EnumRange = EnumRange::DEFAULT;

    /// The integer value of this variant.
    fn discriminant(&self) -> i64;

    /// The variant whose discriminant is `value`, if any.
    fn from_discriminant(value: i64) -> Option<Self>;

    /// The compile-time signature of this variant.
    fn variant_signature(&self) -> &'static str;

    /// The cached name table for this type.
    fn name_table() -> &'static EnumNameTable;
}

/// Produce the raw signature for `(E, value)` and locate the name inside it.
///
/// ## Returns
/// - (`(RawSignature, NameSpan)`): the signature and the span of the name in it (empty when unnamed).
pub fn signature_for<P: SignatureProvider, E: NamedEnum>(value: i64) -> (RawSignature, NameSpan) {
    let signature = P::enum_signature::<E>(value);
    let span = locate::<P>(&signature);
    (signature, span)
}

fn locate<P: SignatureProvider>(signature: &str) -> NameSpan {
    let window = P::enum_window(signature);
    extract_span(window.slice(signature), true).offset(window.start)
}

/// Stored in place of signatures that name nothing; they are never read back.
const UNNAMED: RawSignature = RawSignature::Borrowed("");

/// Names of every value in an enum's clamped range, indexed by `value - min`.
pub struct EnumNameTable {
    enum_type: &'static str,
    min: i64,
    signatures: Box<[RawSignature]>,
    names: Box<[NameSpan]>,
}

impl EnumNameTable {
    /// Resolve every value of `E` in `E::RANGE ∩ E::Repr`.
    #[tracing::instrument(skip_all, fields(range = %E::RANGE))]
    pub fn build<P: SignatureProvider, E: NamedEnum>() -> Self {
        let enum_type = std::any::type_name::<E>();
        let (min, max) = E::RANGE.clamp(<E::Repr as Discriminant>::MIN, <E::Repr as Discriminant>::MAX);
        let (signatures, names): (Vec<_>, Vec<_>) = (min..=max)
            .map(signature_for::<P, E>)
            .map(|(signature, span)| if span.is_empty() { (UNNAMED, span) } else { (signature, span) })
            .unzip();

        tracing::debug!(
            enum_type,
            min,
            max,
            resolved = names.iter().filter(|span| !span.is_empty()).count(),
            "built enum name table"
        );

        EnumNameTable {
            enum_type,
            min,
            signatures: signatures.into_boxed_slice(),
            names: names.into_boxed_slice(),
        }
    }

    /// The name of `value`, or `""` when it is out of range or names no variant.
    pub fn get(&self, value: i64) -> &str {
        let Some(index) = value.checked_sub(self.min).and_then(|offset| usize::try_from(offset).ok()) else {
            return "";
        };
        match (self.names.get(index), self.signatures.get(index)) {
            (Some(span), Some(signature)) => span.slice(signature),
            _ => "",
        }
    }

    /// The smallest value covered by the table.
    pub fn min(&self) -> i64 {
        self.min
    }

    /// The largest value covered by the table (`min - 1` when empty).
    pub fn max(&self) -> i64 {
        self.min + self.names.len() as i64 - 1
    }

    /// Number of values covered, named or not.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `(value, name)` for every value that resolved to a name, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &str)> + '_ {
        (self.min..)
            .zip(self.names.iter().zip(self.signatures.iter()))
            .filter(|(_, (span, _))| !span.is_empty())
            .map(|(value, (span, signature))| (value, span.slice(signature)))
    }
}

impl std::fmt::Debug for EnumNameTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnumNameTable")
            .field("enum_type", &self.enum_type)
            .field("min", &self.min)
            .field("max", &self.max())
            .field("names", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

/// The variant name of `value`, looked up in the range-bounded table of `E`.
///
/// ## Examples
/// ```rust
/// use nameof::{NamedEnum, enum_name};
///
/// #[derive(NamedEnum)]
/// enum Color {
///     Red,
///     Green = 5,
/// }
///
/// assert_eq!(enum_name(Color::Green), "Green");
/// ```
pub fn enum_name<E: NamedEnum>(value: E) -> &'static str {
    E::name_table().get(value.discriminant())
}

/// The variant name of the raw integer `value` of `E`, or `""` when it names nothing in range.
pub fn enum_name_of<E: NamedEnum>(value: i64) -> &'static str {
    E::name_table().get(value)
}

/// The variant name of `value` resolved directly from its signature.
///
/// Skips the table entirely, so it is not limited by [`NamedEnum::RANGE`].
pub fn enum_name_const<E: NamedEnum>(value: E) -> &'static str {
    enum_name_const_with::<DefaultProvider, E>(&value)
}

/// [`enum_name_const`] with an explicit provider.
pub fn enum_name_const_with<P: SignatureProvider, E: NamedEnum>(value: &E) -> &'static str {
    let signature = P::variant_signature(value);
    locate::<P>(signature).slice(signature)
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;

    #[derive(nameof_derive::NamedEnum, Clone, Copy)]
    enum Sparse {
        Low = 0,
        High = 100,
    }

    #[test]
    fn only_named_signatures_are_kept() {
        let table = Sparse::name_table();
        assert_eq!(table.len(), 257);
        assert_eq!(table.signatures.iter().filter(|signature| !signature.is_empty()).count(), 2);
        assert!(table.signatures.iter().all(|signature| matches!(signature, Cow::Borrowed(_))));
        assert_eq!(table.get(0), "Low");
        assert_eq!(table.get(100), "High");
        assert_eq!(table.get(50), "");
    }
}
