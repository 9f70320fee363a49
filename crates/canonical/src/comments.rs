//! Single-line comment stripping.
//!
//! A marker removes everything from its first occurrence on a line through the
//! end of that line. Lines end at `\n` only; a trailing `\r` belongs to the
//! comment and disappears with it (and would be removed as whitespace anyway).
//!
//! # Known limitation
//!
//! Stripping is purely textual. A marker inside a string literal still starts
//! a comment:
//!
//! ```rust
//! use canonical::strip_line_comments;
//!
//! assert_eq!(strip_line_comments("color = \"#fff\"", "#"), "color = \"");
//! assert_eq!(strip_line_comments("url = \"http://x\"", "//"), "url = \"http:");
//! ```
//!
//! This can push similarity up (two submissions lose different literal tails)
//! or down. Stored similarity scores assume this behavior.

/// Removes `marker`-initiated line comments from `text`.
///
/// An empty marker leaves the text unchanged.
///
/// # Examples
///
/// ```rust
/// use canonical::strip_line_comments;
///
/// assert_eq!(strip_line_comments("x=1 # note\ny=2", "#"), "x=1 \ny=2");
/// assert_eq!(strip_line_comments("int x; // note\n", "//"), "int x; \n");
/// ```
pub fn strip_line_comments(text: &str, marker: &str) -> String {
    if marker.is_empty() {
        return text.to_string();
    }

    let mut stripped = String::with_capacity(text.len());
    for (idx, line) in text.split('\n').enumerate() {
        if idx > 0 {
            stripped.push('\n');
        }
        match line.find(marker) {
            Some(pos) => stripped.push_str(&line[..pos]),
            None => stripped.push_str(line),
        }
    }
    stripped
}
