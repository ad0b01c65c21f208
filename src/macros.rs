//! The `nameof!` family.
//!
//! Expression macros type-check their argument inside a closure that is never called, so the expression
//! must name something real but is not evaluated. The name itself comes from the argument's source text
//! (`stringify!`) run through the identifier extractor.

/// The bare name of a variable, field, function or constant.
///
/// Call arguments, qualification and generic arguments are dropped; literals yield `""`.
///
/// ## Examples
/// ```rust
/// use nameof::nameof;
///
/// struct Config { max_depth: u32 }
/// let config = Config { max_depth: 3 };
///
/// assert_eq!(nameof!(config), "config");
/// assert_eq!(nameof!(config.max_depth), "max_depth");
/// assert_eq!(nameof!(std::mem::size_of::<u8>), "size_of");
/// assert_eq!(nameof!(String::from("x")), "from");
/// ```
#[macro_export]
macro_rules! nameof {
    ($expr:expr $(,)?) => {{
        let _ = || {
            let _ = &$expr;
        };
        $crate::extract_identifier(::core::stringify!($expr), false)
    }};
}

/// Like [`nameof!`], but keeps a trailing generic argument list.
///
/// ## Examples
/// ```rust
/// assert_eq!(nameof::nameof_full!(std::mem::size_of::<u8>), "size_of::<u8>");
/// ```
#[macro_export]
macro_rules! nameof_full {
    ($expr:expr $(,)?) => {{
        let _ = || {
            let _ = &$expr;
        };
        $crate::extract_identifier(::core::stringify!($expr), true)
    }};
}

/// The source text of an expression, unchanged, after checking that it compiles.
#[macro_export]
macro_rules! nameof_raw {
    ($expr:expr $(,)?) => {{
        let _ = || {
            let _ = &$expr;
        };
        ::core::stringify!($expr)
    }};
}

/// The variant name of an enum value, bounded by the enum's range.
#[macro_export]
macro_rules! nameof_enum {
    ($expr:expr $(,)?) => {
        $crate::enum_name($expr)
    };
}

/// The variant name of an enum constant, resolved without the range-bounded table.
#[macro_export]
macro_rules! nameof_const_enum {
    ($expr:expr $(,)?) => {
        $crate::enum_name_const($expr)
    };
}

/// The simple name of a type: no references, pointers or module paths.
#[macro_export]
macro_rules! nameof_type {
    ($ty:ty $(,)?) => {
        $crate::type_name::<$ty>()
    };
}

/// The full name of a type, qualifiers and paths included.
#[macro_export]
macro_rules! nameof_full_type {
    ($ty:ty $(,)?) => {
        $crate::full_type_name::<$ty>()
    };
}

/// The simple type name of an expression's type. The expression is not evaluated.
///
/// ## Examples
/// ```rust
/// let values = vec![1u8, 2];
/// assert_eq!(nameof::nameof_type_expr!(values), "Vec<u8>");
/// assert_eq!(nameof::nameof_type_expr!(values.len()), "usize");
/// ```
#[macro_export]
macro_rules! nameof_type_expr {
    ($expr:expr $(,)?) => {
        $crate::types::type_name_of_witness(&|| $crate::types::expr_witness(&$expr))
    };
}

/// The full type name of an expression's type. The expression is not evaluated.
#[macro_export]
macro_rules! nameof_full_type_expr {
    ($expr:expr $(,)?) => {
        $crate::types::full_type_name_of_witness(&|| $crate::types::expr_witness(&$expr))
    };
}
