//! Type names.
//!
//! [`full_type_name`] is the provider's window over the type signature, as rustc prints it:
//! `&mut alloc::vec::Vec<alloc::string::String>`. [`type_name`] is the simple flavor: leading references are
//! dropped and every path is cut to its last segment (`Vec<String>`). Raw pointers are types of their own and
//! stay (`*const u8`).
//!
//! Simple names that had to be rewritten are interned once per distinct text so both flavors can hand
//! out `&'static str`.

use std::borrow::Cow;
use std::collections::HashSet;
use std::marker::PhantomData;
use std::sync::{Mutex, OnceLock, PoisonError};

use crate::signature::{DefaultProvider, SignatureProvider};

/// Reference qualifiers that may lead a type signature; stripped from simple names.
const QUALIFIERS: &[&str] = &["&mut ", "&"];

/// The name of `T` without references or module paths.
///
/// ## Examples
/// ```rust
/// assert_eq!(nameof::type_name::<&i32>(), "i32");
/// assert_eq!(nameof::type_name::<&mut i32>(), "i32");
/// assert_eq!(nameof::type_name::<Vec<String>>(), "Vec<String>");
/// ```
pub fn type_name<T: ?Sized>() -> &'static str {
    type_name_with::<DefaultProvider, T>()
}

/// The name of `T` exactly as the toolchain spells it, qualifiers and paths included.
///
/// ## Examples
/// ```rust
/// assert_eq!(nameof::full_type_name::<&mut i32>(), "&mut i32");
/// ```
pub fn full_type_name<T: ?Sized>() -> &'static str {
    full_type_name_with::<DefaultProvider, T>()
}

/// [`type_name`] of the type of `value`.
pub fn type_name_of_val<T: ?Sized>(_value: &T) -> &'static str {
    type_name::<T>()
}

/// [`full_type_name`] of the type of `value`.
pub fn full_type_name_of_val<T: ?Sized>(_value: &T) -> &'static str {
    full_type_name::<T>()
}

/// Carry the type of `value` out of a closure without carrying the value.
#[doc(hidden)]
pub fn expr_witness<T: ?Sized>(_value: &T) -> PhantomData<T> {
    PhantomData
}

/// [`type_name`] of the type witnessed by a closure that is never called.
#[doc(hidden)]
pub fn type_name_of_witness<T: ?Sized, F: FnOnce() -> PhantomData<T>>(_witness: &F) -> &'static str {
    type_name::<T>()
}

/// [`full_type_name`] of the type witnessed by a closure that is never called.
#[doc(hidden)]
pub fn full_type_name_of_witness<T: ?Sized, F: FnOnce() -> PhantomData<T>>(_witness: &F) -> &'static str {
    full_type_name::<T>()
}

/// [`full_type_name`] with an explicit provider.
pub fn full_type_name_with<P: SignatureProvider, T: ?Sized>() -> &'static str {
    let signature = P::type_signature::<T>();
    let name = P::type_window(signature).slice(signature);
    name.strip_suffix(' ').unwrap_or(name)
}

/// [`type_name`] with an explicit provider.
pub fn type_name_with<P: SignatureProvider, T: ?Sized>() -> &'static str {
    intern(simplify(full_type_name_with::<P, T>()))
}

/// Drop leading qualifiers and shorten every path to its last segment.
pub fn simplify(full: &str) -> Cow<'_, str> {
    let unqualified = strip_qualifiers(full);
    if !unqualified.contains("::") {
        return Cow::Borrowed(unqualified);
    }
    Cow::Owned(shorten_paths(unqualified))
}

fn strip_qualifiers(mut text: &str) -> &str {
    while let Some(rest) = QUALIFIERS.iter().find_map(move |qualifier| text.strip_prefix(qualifier)) {
        text = rest;
    }
    text
}

/// `alloc::vec::Vec<alloc::string::String>` → `Vec<String>`.
///
/// A `::` preceded by an identifier cuts that identifier; a `::` after a closing bracket (`<T as
/// Trait>::Output`) is kept.
fn shorten_paths(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut segment_start = 0;
    let mut rest = text;
    while let Some(ch) = rest.chars().next() {
        if let Some(after) = rest.strip_prefix("::") {
            if out.len() > segment_start {
                out.truncate(segment_start);
            } else {
                out.push_str("::");
                segment_start = out.len();
            }
            rest = after;
            continue;
        }
        out.push(ch);
        if !(ch.is_alphanumeric() || ch == '_') {
            segment_start = out.len();
        }
        rest = &rest[ch.len_utf8()..];
    }
    out
}

fn intern(name: Cow<'static, str>) -> &'static str {
    let owned = match name {
        Cow::Borrowed(name) => return name,
        Cow::Owned(owned) => owned,
    };
    static INTERNED: OnceLock<Mutex<HashSet<&'static str>>> = OnceLock::new();
    let mut interned = INTERNED
        .get_or_init(Default::default)
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(existing) = interned.get(owned.as_str()).copied() {
        return existing;
    }
    tracing::trace!(type_name = %owned, "interning simple type name");
    let leaked: &'static str = Box::leak(owned.into_boxed_str());
    interned.insert(leaked);
    leaked
}
