//! Signature providers: where raw, name-bearing text comes from.
//!
//! A provider turns a type, or an enum type plus an integer value, into a *raw signature*: a piece of
//! toolchain text with the interesting name embedded at a fixed, locatable position. It also knows the
//! window inside that text where the name lives. The enum resolver and the type namer only talk to the
//! [`SignatureProvider`] trait, so the text format and its offsets stay in one place.
//!
//! ## Rustc signatures
//!
//! - Types: `core::any::type_name::<Identity<T>>()`, e.g. `nameof::signature::Identity<&i32>`. The window
//!   is everything between `Identity<` and the final `>`; the prefix length is found by probing
//!   `Identity<()>` rather than hard-coding the module path.
//! - Enum values: `nameof::EnumValue<demo::Color, demo::Color::Red>` for variants (emitted at compile time
//!   by `#[derive(NamedEnum)]` through [`__enum_value_signature!`](crate::__enum_value_signature)), and
//!   `nameof::EnumValue<demo::Color, 2>` synthesized for integers that name no variant. The window drops
//!   the final `>`, leaving the value at the very end.

use std::any;
use std::borrow::Cow;
use std::marker::PhantomData;

use nameof_core::NameSpan;

use crate::enums::NamedEnum;

/// Toolchain text embedding a name. Static when produced at compile time.
pub type RawSignature = Cow<'static, str>;

/// Leading text of every Rustc enum value signature.
pub const ENUM_VALUE_PREFIX: &str = "nameof::EnumValue";

/// Zero-sized wrapper whose `type_name` embeds `T`.
pub struct Identity<T: ?Sized>(PhantomData<T>);

/// Produce raw signatures and locate the name inside them.
pub trait SignatureProvider {
    /// Signature of a type instantiation embedding `T`.
    fn type_signature<T: ?Sized>() -> &'static str;

    /// Window of a type signature that holds the type text.
    fn type_window(signature: &str) -> NameSpan;

    /// Signature of a known enum constant. Always compile-time text.
    fn variant_signature<E: NamedEnum>(value: &E) -> &'static str;

    /// Signature for enum type `E` instantiated on an arbitrary integer `value`.
    fn enum_signature<E: NamedEnum>(value: i64) -> RawSignature;

    /// Window of an enum signature that ends right after the embedded value.
    fn enum_window(signature: &str) -> NameSpan;
}

/// The provider for signatures produced by rustc (`core::any::type_name`) and `#[derive(NamedEnum)]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rustc;

/// The provider used by the free functions of this crate.
pub type DefaultProvider = Rustc;

impl Rustc {
    /// Length of the text that precedes the embedded type, e.g. `nameof::signature::Identity<`.
    fn identity_prefix() -> &'static str {
        let probe = any::type_name::<Identity<()>>();
        probe.strip_suffix("()>").unwrap_or(probe)
    }
}

impl SignatureProvider for Rustc {
    fn type_signature<T: ?Sized>() -> &'static str {
        any::type_name::<Identity<T>>()
    }

    fn type_window(signature: &str) -> NameSpan {
        let prefix = Self::identity_prefix();
        match signature.strip_prefix(prefix).and_then(|rest| rest.strip_suffix('>')) {
            Some(inner) => NameSpan::new(prefix.len(), prefix.len() + inner.len()),
            // Not an `Identity<..>` signature: the whole text is the type.
            None => NameSpan::new(0, signature.len()),
        }
    }

    fn variant_signature<E: NamedEnum>(value: &E) -> &'static str {
        value.variant_signature()
    }

    fn enum_signature<E: NamedEnum>(value: i64) -> RawSignature {
        match E::from_discriminant(value) {
            Some(variant) => Cow::Borrowed(variant.variant_signature()),
            None => Cow::Owned(format!("{ENUM_VALUE_PREFIX}<{}, {value}>", any::type_name::<E>())),
        }
    }

    fn enum_window(signature: &str) -> NameSpan {
        NameSpan::new(0, signature.strip_suffix('>').unwrap_or(signature).len())
    }
}

/// Emit the Rustc signature of an enum variant as a string literal.
///
/// Used by `#[derive(NamedEnum)]`; the text is built at compile time with the caller's module path.
#[doc(hidden)]
#[macro_export]
macro_rules! __enum_value_signature {
    ($enum_ty:ident, $variant:ident) => {
        ::core::concat!(
            "nameof::EnumValue<",
            ::core::module_path!(),
            "::",
            ::core::stringify!($enum_ty),
            ", ",
            ::core::module_path!(),
            "::",
            ::core::stringify!($enum_ty),
            "::",
            ::core::stringify!($variant),
            ">"
        )
    };
}
