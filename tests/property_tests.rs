//! Property-based tests for name extraction and enum ranges
//!
//! These tests use proptest to check the extractor's contracts across many generated inputs, including
//! malformed text that hand-written cases would not think to try.

use nameof::{EnumRange, extract_identifier, is_identifier};
use proptest::prelude::*;

fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,15}"
}

/// Loosely expression-shaped text: identifiers, paths, calls, generics, literals and stray brackets.
fn expression_like_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_:<>(), .&\"']{0,40}"
}

fn path_strategy() -> impl Strategy<Value = (Vec<String>, String)> {
    (prop::collection::vec(ident_strategy(), 0..4), ident_strategy())
}

proptest! {
    /// A bare identifier is its own name, with or without the template flag.
    #[test]
    fn identifiers_pass_through(ident in ident_strategy()) {
        prop_assert_eq!(extract_identifier(&ident, false), ident.as_str());
        prop_assert_eq!(extract_identifier(&ident, true), ident.as_str());
    }

    /// Extraction never makes its own output shorter.
    #[test]
    fn extraction_is_idempotent(raw in expression_like_strategy(), keep in any::<bool>()) {
        let once = extract_identifier(&raw, keep);
        prop_assert_eq!(extract_identifier(once, keep), once);
    }

    /// Without the template flag the result is either empty or a plain identifier.
    #[test]
    fn bare_results_are_identifiers(raw in expression_like_strategy()) {
        let name = extract_identifier(&raw, false);
        prop_assert!(name.is_empty() || is_identifier(name), "{raw:?} -> {name:?}");
    }

    /// Keeping the template suffix only ever extends the bare name.
    #[test]
    fn suffix_extends_the_bare_name(raw in expression_like_strategy()) {
        let bare = extract_identifier(&raw, false);
        let full = extract_identifier(&raw, true);
        prop_assert!(full.starts_with(bare), "{raw:?}: {full:?} vs {bare:?}");
    }

    /// The last segment of a qualified call is its name.
    #[test]
    fn qualified_calls_resolve_to_last_segment((segments, last) in path_strategy(), args in "[0-9a-z, ]{0,10}") {
        let mut raw = segments.join("::");
        if !raw.is_empty() {
            raw.push_str("::");
        }
        raw.push_str(&last);
        raw.push('(');
        raw.push_str(&args);
        raw.push(')');
        prop_assert_eq!(extract_identifier(&raw, false), last.as_str());
    }

    /// Generic arguments are dropped unless asked for.
    #[test]
    fn generic_arguments_follow_the_flag(ident in ident_strategy(), arg in ident_strategy()) {
        let raw = format!("{ident}<{arg}>");
        prop_assert_eq!(extract_identifier(&raw, false), ident.as_str());
        prop_assert_eq!(extract_identifier(&raw, true), raw.as_str());
    }

    /// Literals never name anything.
    #[test]
    fn string_literals_are_empty(body in "[a-z_]{0,12}", prefix in prop::sample::select(vec!["", "b", "c", "r", "br", "u8", "L"])) {
        let raw = format!("{prefix}\"{body}\"");
        prop_assert_eq!(extract_identifier(&raw, true), "");
    }

    /// A range is valid exactly when `min < max` and neither bound is the `i32` extreme.
    #[test]
    fn range_validation_matches_bounds(min in any::<i32>(), max in any::<i32>()) {
        let valid = min != i32::MIN && max != i32::MAX && min < max;
        prop_assert_eq!(EnumRange::try_new(min, max).is_ok(), valid);
    }

    /// Clamping never widens the range.
    #[test]
    fn clamping_stays_inside_both_bounds(min in -1000i32..0, max in 1i32..1000, repr_min in -2000i64..0, repr_max in 0i64..2000) {
        let range = EnumRange::new(min, max);
        let (low, high) = range.clamp(repr_min, repr_max);
        prop_assert!(low >= repr_min && low >= i64::from(min));
        prop_assert!(high <= repr_max && high <= i64::from(max));
    }
}
