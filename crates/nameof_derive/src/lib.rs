//! Derive macro for `nameof` enum name resolution.
//!
//! `#[derive(NamedEnum)]` is the enum half of the signature provider: for every variant it emits the
//! signature text the resolver windows and trims, plus the facts the resolver cannot see on its own:
//! - `discriminant()` / `from_discriminant()`: the variant ↔ integer mapping
//! - `Repr`: the `#[repr(..)]` integer type (or `isize`), used to clamp the enum range
//! - `RANGE`: only when `#[nameof(range(min = .., max = ..))]` overrides the default
//! - `name_table()`: a per-type, lazily built `EnumNameTable`
//!
//! Invalid ranges are rejected twice: here, with a spanned error pointing at the attribute, and again by
//! a constant assertion in the expansion.

use nameof_core::EnumRange;
use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, LitInt, parse_macro_input};

/// Integer types accepted in `#[repr(..)]`.
const REPR_TYPES: &[&str] = &["i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize"];

/// Implements `nameof::NamedEnum` for a fieldless enum.
///
/// # Example
/// ```ignore
/// #[derive(NamedEnum, Clone, Copy)]
/// #[nameof(range(min = 0, max = 3))]
/// enum Level {
///     Low = 0,
///     High = 3,
/// }
///
/// assert_eq!(nameof::enum_name(Level::High), "High");
/// ```
#[proc_macro_derive(NamedEnum, attributes(nameof))]
pub fn derive_named_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input).unwrap_or_else(syn::Error::into_compile_error).into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let variants = fieldless_variants(input)?;
    let repr = repr_type(&input.attrs)?;
    let range = range_override(&input.attrs)?;

    let discriminant_arms = variants.iter().map(|variant| {
        quote! { Self::#variant => Self::#variant as i64 }
    });
    let signature_arms = variants.iter().map(|variant| {
        quote! { Self::#variant => ::nameof::__enum_value_signature!(#name, #variant) }
    });
    let from_checks = variants.iter().map(|variant| {
        quote! {
            if value == Self::#variant as i64 {
                return ::core::option::Option::Some(Self::#variant);
            }
        }
    });

    // An empty enum has no values to match on.
    let (discriminant_body, signature_body) = if variants.is_empty() {
        (quote! { match *self {} }, quote! { match *self {} })
    } else {
        (
            quote! { match self { #(#discriminant_arms,)* } },
            quote! { match self { #(#signature_arms,)* } },
        )
    };

    let (range_const, range_guard) = match range {
        Some((min, max)) => (
            quote! { const RANGE: ::nameof::EnumRange = ::nameof::EnumRange::new(#min, #max); },
            // Unnamed consts are always evaluated, so a bad range fails the build even if never used.
            quote! { const _: ::nameof::EnumRange = ::nameof::EnumRange::new(#min, #max); },
        ),
        None => (TokenStream2::new(), TokenStream2::new()),
    };

    Ok(quote! {
        #range_guard

        impl ::nameof::NamedEnum for #name {
            type Repr = #repr;
            #range_const

            fn discriminant(&self) -> i64 {
                #discriminant_body
            }

            #[allow(unused_variables)]
            fn from_discriminant(value: i64) -> ::core::option::Option<Self> {
                #(#from_checks)*
                ::core::option::Option::None
            }

            fn variant_signature(&self) -> &'static str {
                #signature_body
            }

            fn name_table() -> &'static ::nameof::EnumNameTable {
                static TABLE: ::std::sync::OnceLock<::nameof::EnumNameTable> = ::std::sync::OnceLock::new();
                TABLE.get_or_init(::nameof::EnumNameTable::build::<::nameof::DefaultProvider, Self>)
            }
        }
    })
}

/// Validate that the input is a non-generic enum whose variants carry no fields.
fn fieldless_variants(input: &DeriveInput) -> syn::Result<Vec<&Ident>> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(&input.ident, "NamedEnum derive only supports enums"));
    };
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "NamedEnum derive does not support generic enums",
        ));
    }
    data.variants
        .iter()
        .map(|variant| match variant.fields {
            Fields::Unit => Ok(&variant.ident),
            _ => Err(syn::Error::new_spanned(
                variant,
                "NamedEnum derive only supports variants without fields",
            )),
        })
        .collect()
}

/// Find the integer type named in `#[repr(..)]`, defaulting to `isize`.
fn repr_type(attrs: &[Attribute]) -> syn::Result<Ident> {
    let mut repr = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("repr")) {
        attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.get_ident() {
                if REPR_TYPES.iter().any(|ty| ident == ty) {
                    repr = Some(ident.clone());
                } else if ident == "i128" || ident == "u128" {
                    return Err(meta.error("NamedEnum derive does not support 128-bit discriminants"));
                }
            }
            // `align(..)` and friends carry arguments; skip them.
            if meta.input.peek(syn::token::Paren) {
                let content;
                syn::parenthesized!(content in meta.input);
                content.parse::<TokenStream2>()?;
            }
            Ok(())
        })?;
    }
    Ok(repr.unwrap_or_else(|| Ident::new("isize", Span::call_site())))
}

/// Parse `#[nameof(range(min = .., max = ..))]` and validate the bounds.
///
/// ## Returns
/// - (`Option<(i32, i32)>`): the override, or `None` when the enum uses the default range.
fn range_override(attrs: &[Attribute]) -> syn::Result<Option<(i32, i32)>> {
    let mut found = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("nameof")) {
        let mut min = None;
        let mut max = None;
        attr.parse_nested_meta(|meta| {
            if !meta.path.is_ident("range") {
                return Err(meta.error("unsupported nameof attribute, expected `range(min = .., max = ..)`"));
            }
            meta.parse_nested_meta(|bound| {
                let value: i32 = parse_signed(&bound)?;
                if bound.path.is_ident("min") {
                    min = Some(value);
                } else if bound.path.is_ident("max") {
                    max = Some(value);
                } else {
                    return Err(bound.error("expected `min` or `max`"));
                }
                Ok(())
            })
        })?;

        let (Some(min), Some(max)) = (min, max) else {
            return Err(syn::Error::new_spanned(attr, "nameof range requires both `min` and `max`"));
        };
        EnumRange::try_new(min, max).map_err(|err| syn::Error::new_spanned(attr, err))?;
        found = Some((min, max));
    }
    Ok(found)
}

/// Parse `= <int>` or `= -<int>` after a nested meta key.
fn parse_signed(meta: &syn::meta::ParseNestedMeta<'_>) -> syn::Result<i32> {
    let value = meta.value()?;
    let negative = value.peek(syn::Token![-]);
    if negative {
        value.parse::<syn::Token![-]>()?;
    }
    let lit: LitInt = value.parse()?;
    let magnitude: i64 = lit.base10_parse()?;
    let signed = if negative { -magnitude } else { magnitude };
    i32::try_from(signed).map_err(|_| syn::Error::new(lit.span(), "enum range bounds must fit in i32"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn repr_defaults_to_isize() {
        let input: DeriveInput = parse_quote! {
            enum Color { Red, Green }
        };
        assert_eq!(repr_type(&input.attrs).unwrap(), "isize");
    }

    #[test]
    fn repr_ignores_layout_hints() {
        let input: DeriveInput = parse_quote! {
            #[repr(C, u8)]
            #[repr(align(4))]
            enum Color { Red, Green }
        };
        assert_eq!(repr_type(&input.attrs).unwrap(), "u8");
    }

    #[test]
    fn repr_rejects_wide_discriminants() {
        let input: DeriveInput = parse_quote! {
            #[repr(u128)]
            enum Color { Red }
        };
        assert!(repr_type(&input.attrs).is_err());
    }

    #[test]
    fn range_override_is_parsed() {
        let input: DeriveInput = parse_quote! {
            #[nameof(range(min = -4, max = 3))]
            enum Color { Red }
        };
        assert_eq!(range_override(&input.attrs).unwrap(), Some((-4, 3)));
    }

    #[test]
    fn missing_override_uses_default() {
        let input: DeriveInput = parse_quote! {
            enum Color { Red }
        };
        assert_eq!(range_override(&input.attrs).unwrap(), None);
    }

    #[test]
    fn invalid_range_is_rejected() {
        let input: DeriveInput = parse_quote! {
            #[nameof(range(min = 3, max = 3))]
            enum Color { Red }
        };
        let err = range_override(&input.attrs).unwrap_err();
        assert!(err.to_string().contains("max > min"), "{err}");

        let input: DeriveInput = parse_quote! {
            #[nameof(range(min = 0))]
            enum Color { Red }
        };
        assert!(range_override(&input.attrs).is_err());
    }

    #[test]
    fn only_fieldless_enums_are_accepted() {
        let input: DeriveInput = parse_quote! {
            struct Color { red: u8 }
        };
        assert!(expand(&input).is_err());

        let input: DeriveInput = parse_quote! {
            enum Shape { Circle(f32), Square }
        };
        assert!(expand(&input).is_err());
    }

    #[test]
    fn expansion_carries_range_guard() {
        let input: DeriveInput = parse_quote! {
            #[repr(u8)]
            #[nameof(range(min = 0, max = 3))]
            enum Level { Low, High = 3 }
        };
        let tokens = expand(&input).unwrap().to_string();
        assert_eq!(tokens.matches("EnumRange :: new").count(), 2, "{tokens}");
        assert!(tokens.contains("type Repr = u8"), "{tokens}");
        assert!(tokens.contains("const RANGE"), "{tokens}");
    }
}
