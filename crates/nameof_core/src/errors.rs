//! Enum range configuration errors.
//!
//! Every variant is `Copy` so the same checks run inside `const` evaluation, where a violation halts the
//! build, and inside the derive macro, where it becomes a spanned compile error.

use thiserror::Error;

/// A rejected `[min, max]` enum range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("enum range requires max > min (got min = {min}, max = {max})")]
    MinNotBelowMax { min: i32, max: i32 },

    #[error("enum range min must be greater than i32::MIN")]
    MinTooSmall,

    #[error("enum range max must be less than i32::MAX")]
    MaxTooLarge,

    #[error("default enum range min must be less than or equal to 0 (got {min})")]
    MinPositive { min: i32 },

    #[error("default enum range max must be greater than 0 (got {max})")]
    MaxNotPositive { max: i32 },

    #[error("{var} must be an i32 literal (got `{value}`)")]
    InvalidOverride { var: &'static str, value: &'static str },
}

impl RangeError {
    /// Abort constant evaluation with this error.
    ///
    /// Constant panics only accept literal messages, hence one arm per variant.
    pub const fn halt(self) -> ! {
        match self {
            RangeError::MinNotBelowMax { .. } => panic!("nameof: enum range requires max > min"),
            RangeError::MinTooSmall => panic!("nameof: enum range min must be greater than i32::MIN"),
            RangeError::MaxTooLarge => panic!("nameof: enum range max must be less than i32::MAX"),
            RangeError::MinPositive { .. } => {
                panic!("nameof: NAMEOF_ENUM_RANGE_MIN must be less than or equal to 0")
            }
            RangeError::MaxNotPositive { .. } => panic!("nameof: NAMEOF_ENUM_RANGE_MAX must be greater than 0"),
            RangeError::InvalidOverride { .. } => {
                panic!("nameof: NAMEOF_ENUM_RANGE_MIN/NAMEOF_ENUM_RANGE_MAX must be i32 literals")
            }
        }
    }
}
