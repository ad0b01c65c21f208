//! Enum range policy: which integer values of an enum are eligible for name resolution.
//!
//! ## Notes
//! - The global default is `[-128, 128]`. It can be replaced for a whole build by setting
//!   `NAMEOF_ENUM_RANGE_MIN` / `NAMEOF_ENUM_RANGE_MAX` while compiling this crate; the values are parsed and
//!   validated in constant evaluation, so a bad override stops the build.
//! - Per-type ranges only need `min > i32::MIN`, `max < i32::MAX` and `max > min`; the sign requirements
//!   (`min <= 0 < max`) bind the global default alone.
//! - The effective table bounds are the intersection of the range and the enum's `repr` type.

use std::fmt;

use crate::errors::RangeError;

/// Built-in lower bound of the default range.
pub const DEFAULT_MIN: i32 = -128;
/// Built-in upper bound of the default range.
pub const DEFAULT_MAX: i32 = 128;

/// Build-level override variable for the default lower bound.
pub const MIN_OVERRIDE_VAR: &str = "NAMEOF_ENUM_RANGE_MIN";
/// Build-level override variable for the default upper bound.
pub const MAX_OVERRIDE_VAR: &str = "NAMEOF_ENUM_RANGE_MAX";

/// A closed interval `[min, max]` of enum values that can be resolved to names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumRange {
    min: i32,
    max: i32,
}

impl EnumRange {
    /// The range every enum uses unless it overrides it.
    pub const DEFAULT: EnumRange = match default_from(
        option_env!("NAMEOF_ENUM_RANGE_MIN"),
        option_env!("NAMEOF_ENUM_RANGE_MAX"),
    ) {
        Ok(range) => range,
        Err(err) => err.halt(),
    };

    /// Build a per-type range, halting constant evaluation when it is invalid.
    ///
    /// Use this in `const` items so a misconfigured range is a build error.
    pub const fn new(min: i32, max: i32) -> Self {
        match Self::try_new(min, max) {
            Ok(range) => range,
            Err(err) => err.halt(),
        }
    }

    /// Validate a per-type range.
    ///
    /// ## Returns
    /// - (`Result<EnumRange, RangeError>`): the range, or the first violated requirement.
    pub const fn try_new(min: i32, max: i32) -> Result<Self, RangeError> {
        if min == i32::MIN {
            Err(RangeError::MinTooSmall)
        } else if max == i32::MAX {
            Err(RangeError::MaxTooLarge)
        } else if max <= min {
            Err(RangeError::MinNotBelowMax { min, max })
        } else {
            Ok(EnumRange { min, max })
        }
    }

    /// Validate a candidate global default: a per-type range that also satisfies `min <= 0 < max`.
    pub const fn try_default(min: i32, max: i32) -> Result<Self, RangeError> {
        if min > 0 {
            Err(RangeError::MinPositive { min })
        } else if max <= 0 {
            Err(RangeError::MaxNotPositive { max })
        } else {
            Self::try_new(min, max)
        }
    }

    pub const fn min(self) -> i32 {
        self.min
    }

    pub const fn max(self) -> i32 {
        self.max
    }

    /// Number of values in the range (before clamping to a repr type).
    pub const fn value_count(self) -> usize {
        (self.max as i64 - self.min as i64 + 1) as usize
    }

    /// Intersect the range with the representable bounds of an enum's `repr` type.
    ///
    /// ## Returns
    /// - (`(i64, i64)`): the clamped `(min, max)`; `min > max` when the two do not overlap.
    pub const fn clamp(self, repr_min: i64, repr_max: i64) -> (i64, i64) {
        let min = if (self.min as i64) > repr_min { self.min as i64 } else { repr_min };
        let max = if (self.max as i64) < repr_max { self.max as i64 } else { repr_max };
        (min, max)
    }
}

impl Default for EnumRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for EnumRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Resolve the default range from optional build-level overrides.
const fn default_from(min: Option<&'static str>, max: Option<&'static str>) -> Result<EnumRange, RangeError> {
    let min = match parse_override(MIN_OVERRIDE_VAR, min, DEFAULT_MIN) {
        Ok(min) => min,
        Err(err) => return Err(err),
    };
    let max = match parse_override(MAX_OVERRIDE_VAR, max, DEFAULT_MAX) {
        Ok(max) => max,
        Err(err) => return Err(err),
    };
    EnumRange::try_default(min, max)
}

const fn parse_override(var: &'static str, value: Option<&'static str>, fallback: i32) -> Result<i32, RangeError> {
    match value {
        None => Ok(fallback),
        Some(value) => match i32::from_str_radix(value.trim_ascii(), 10) {
            Ok(parsed) => Ok(parsed),
            Err(_) => Err(RangeError::InvalidOverride { var, value }),
        },
    }
}

/// Integer types usable as an enum `repr`, with their bounds saturated into `i64`.
pub trait Discriminant {
    const MIN: i64;
    const MAX: i64;
}

const fn saturate(value: i128) -> i64 {
    if value > i64::MAX as i128 {
        i64::MAX
    } else if value < i64::MIN as i128 {
        i64::MIN
    } else {
        value as i64
    }
}

macro_rules! impl_discriminant {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Discriminant for $ty {
                const MIN: i64 = saturate(<$ty>::MIN as i128);
                const MAX: i64 = saturate(<$ty>::MAX as i128);
            }
        )*
    };
}

impl_discriminant!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
