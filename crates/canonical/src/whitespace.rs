//! Whitespace removal.
//!
//! Unlike prose canonicalization, code comparison drops whitespace entirely:
//! `a + b` and `a+b` must compare equal, and so must code re-indented by an
//! editor. The result is a single contiguous run of non-whitespace characters.
//!
//! # Whitespace Definition
//!
//! A character is whitespace if it has the Unicode `White_Space` property
//! (space, tab, newline, carriage return, NBSP, the U+2000 block, ...) or is
//! one of the ASCII information separators U+001C..=U+001F.
//!
//! # Examples
//!
//! ```rust
//! use canonical::strip_whitespace;
//!
//! assert_eq!(strip_whitespace("def solve(a, b):\n    return a + b"), "defsolve(a,b):returna+b");
//! ```

/// Returns true for characters removed by [`strip_whitespace`].
pub fn is_code_whitespace(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '\u{1C}'..='\u{1F}')
}

/// Removes every whitespace character from `text`.
///
/// # Examples
///
/// ```rust
/// use canonical::strip_whitespace;
///
/// assert_eq!(strip_whitespace("  x =\t1\r\n"), "x=1");
/// assert_eq!(strip_whitespace("a\u{00A0}b"), "ab");
/// assert_eq!(strip_whitespace("   \n\t "), "");
/// assert_eq!(strip_whitespace(""), "");
/// ```
///
/// # Performance
///
/// O(n); pre-allocates capacity equal to the input length.
pub fn strip_whitespace(text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());
    stripped.extend(text.chars().filter(|ch| !is_code_whitespace(*ch)));
    stripped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn information_separators_are_whitespace() {
        assert_eq!(strip_whitespace("a\u{1C}b\u{1D}c\u{1E}d\u{1F}e"), "abcde");
    }

    #[test]
    fn unicode_spaces_removed() {
        assert_eq!(strip_whitespace("x\u{2003}=\u{3000}1\u{2028}"), "x=1");
    }

    #[test]
    fn zero_width_space_is_kept() {
        // U+200B has no White_Space property.
        assert_eq!(strip_whitespace("a\u{200B}b"), "a\u{200B}b");
    }
}
