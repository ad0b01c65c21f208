//! Trim synthesized source text down to the bare identifier it names.
//!
//! The input is either the text of an expression as written by the caller (`stringify!` output) or a window
//! of a toolchain signature that has the name embedded at its end. Both are reduced the same way:
//!
//! 1. reject string/char literals and numeric literals outright;
//! 2. drop trailing call argument lists (`foo(1, 2)` → `foo`);
//! 3. measure a trailing template/generic suffix (`Type<i32>`, `size_of::<u8>`);
//! 4. drop every qualification prefix (`a::b::`, `self.`, `&`);
//! 5. optionally drop the generic suffix, then require the result to start like an identifier.
//!
//! ## Notes
//! - All helpers are `const fn` so callers can resolve names inside `const` items.
//! - Unbalanced trailing brackets make the whole extraction empty rather than guessing.
//! - Identifiers are ASCII. A name glued to a non-ASCII byte (`größe`) is empty, not its ASCII tail.
//! - An empty result is the single "not resolvable" signal; there is no error type.

/// A byte range inside some text: the non-owning form of a resolved name.
///
/// A span with `len == 0` is the empty name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NameSpan {
    pub start: usize,
    pub len: usize,
}

impl NameSpan {
    /// The empty name.
    pub const EMPTY: NameSpan = NameSpan { start: 0, len: 0 };

    /// Build a span covering `start..end`.
    pub const fn new(start: usize, end: usize) -> Self {
        if end <= start {
            Self::EMPTY
        } else {
            NameSpan {
                start,
                len: end - start,
            }
        }
    }

    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    pub const fn end(self) -> usize {
        self.start + self.len
    }

    /// Shift this span by `offset` bytes, keeping empty spans empty.
    ///
    /// Used to translate a span found inside a window back into the enclosing text.
    pub const fn offset(self, offset: usize) -> Self {
        if self.is_empty() {
            self
        } else {
            NameSpan {
                start: self.start + offset,
                len: self.len,
            }
        }
    }

    /// Borrow the spanned text out of `text`.
    ///
    /// ## Returns
    /// - (`&str`): the spanned text, or `""` when the span is empty, out of bounds, or not on a char boundary.
    pub const fn slice(self, text: &str) -> &str {
        if self.is_empty() || self.end() > text.len() {
            return "";
        }
        let (head, _) = text.as_bytes().split_at(self.end());
        let (_, name) = head.split_at(self.start);
        match core::str::from_utf8(name) {
            Ok(name) => name,
            Err(_) => "",
        }
    }
}

/// Check whether `byte` may appear inside an identifier (`[0-9A-Za-z_]`).
pub const fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Check whether `byte` may start an identifier (`[A-Za-z_]`).
pub const fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

/// Check whether `text` is a bare identifier: `[A-Za-z_][A-Za-z0-9_]*`.
pub const fn is_identifier(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.is_empty() || !is_ident_start(bytes[0]) {
        return false;
    }
    let mut i = 1;
    while i < bytes.len() {
        if !is_ident_byte(bytes[i]) {
            return false;
        }
        i += 1;
    }
    true
}

const fn is_quote(byte: u8) -> bool {
    byte == b'"' || byte == b'\''
}

/// Check whether `bytes` starts with a string or character literal.
///
/// Covers plain quotes, the `R`/`L`/`U`/`u`/`u8` encoding prefixes, and Rust's byte, C-string and raw
/// literals. `r#ident` is a raw identifier, not a literal.
const fn starts_with_literal(bytes: &[u8]) -> bool {
    match bytes {
        [first, ..] if is_quote(*first) => true,
        [b'R' | b'L' | b'U' | b'u' | b'b' | b'c', second, ..] if is_quote(*second) => true,
        [b'u', b'8', third, ..] if is_quote(*third) => true,
        [b'r', b'"', ..] | [b'r', b'#', b'"' | b'#', ..] => true,
        [b'b' | b'c', b'r', b'"' | b'#', ..] => true,
        _ => false,
    }
}

/// Measure the run of balanced `open`/`close` groups that ends at `end`.
///
/// Scans right to left: `close` deepens, `open` surfaces, and the first other byte seen at depth zero stops
/// the scan.
///
/// ## Returns
/// - (`Option<usize>`): length of the trailing group run (`0` when `bytes[..end]` does not end with `close`),
///   or `None` when the run is unbalanced.
const fn trailing_group_len(bytes: &[u8], end: usize, open: u8, close: u8) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = end;
    while i > 0 {
        let byte = bytes[i - 1];
        if byte == close {
            depth += 1;
        } else if byte == open {
            if depth == 0 {
                return None;
            }
            depth -= 1;
        } else if depth == 0 {
            break;
        }
        i -= 1;
    }
    if depth != 0 {
        return None;
    }
    Some(end - i)
}

/// Locate the bare identifier inside `raw`.
///
/// ## Parameters
/// - `raw`: expression or signature text.
/// - `keep_template_suffix`: keep a trailing generic argument list (`Type<i32>`, `size_of::<u8>`).
///
/// ## Returns
/// - (`NameSpan`): where the identifier lives in `raw`, or [`NameSpan::EMPTY`].
pub const fn extract_span(raw: &str, keep_template_suffix: bool) -> NameSpan {
    let bytes = raw.as_bytes();
    if starts_with_literal(bytes) {
        return NameSpan::EMPTY;
    }
    if let [first, ..] = bytes {
        if first.is_ascii_digit() {
            return NameSpan::EMPTY;
        }
    }

    let mut end = bytes.len();
    match trailing_group_len(bytes, end, b'(', b')') {
        Some(call) => end -= call,
        None => return NameSpan::EMPTY,
    }

    let mut suffix = match trailing_group_len(bytes, end, b'<', b'>') {
        Some(suffix) => suffix,
        None => return NameSpan::EMPTY,
    };
    // Turbofish: `::<T>` belongs to the suffix, not to the qualification prefix.
    if suffix > 0 && end - suffix >= 2 && bytes[end - suffix - 1] == b':' && bytes[end - suffix - 2] == b':' {
        suffix += 2;
    }

    let mut start = end - suffix;
    while start > 0 && is_ident_byte(bytes[start - 1]) {
        start -= 1;
    }

    if start > 0 && !bytes[start - 1].is_ascii() {
        return NameSpan::EMPTY;
    }

    if !keep_template_suffix {
        end -= suffix;
    }

    if start < end && is_ident_start(bytes[start]) {
        NameSpan::new(start, end)
    } else {
        NameSpan::EMPTY
    }
}

/// Trim `raw` down to the bare identifier it names.
///
/// ## Parameters
/// - `raw`: expression or signature text.
/// - `keep_template_suffix`: keep a trailing generic argument list.
///
/// ## Returns
/// - (`&str`): a sub-slice of `raw`, or `""` when `raw` does not name a simple identifier.
///
/// ## Examples
/// ```rust
/// use nameof_core::extract_identifier;
///
/// assert_eq!(extract_identifier("foo(1, 2, 3)", true), "foo");
/// assert_eq!(extract_identifier("ns::Type<int>", false), "Type");
/// assert_eq!(extract_identifier("ns::Type<int>", true), "Type<int>");
/// assert_eq!(extract_identifier("\"literal\"", true), "");
/// assert_eq!(extract_identifier("123abc", true), "");
/// ```
pub const fn extract_identifier(raw: &str, keep_template_suffix: bool) -> &str {
    extract_span(raw, keep_template_suffix).slice(raw)
}
