//! Source-code normalization layer.
//!
//! Reduces a submitted solution to the form the similarity engine compares,
//! so that reformatting, re-commenting or re-casing a copied solution does not
//! hide it.
//!
//! ## What we do
//!
//! In this exact order:
//!
//! 1. Strip `#` line comments (scripting-language style)
//! 2. Strip `//` line comments (C-family style)
//! 3. Remove every whitespace character, anywhere
//! 4. Lowercase
//!
//! Order matters: comments must be found while the code still has its line
//! structure.
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock, no global state. Same code + same config = same output.
//!
//! ## Known limitations
//!
//! - No string-literal awareness: `"#fff"` or `"http://..."` inside a literal
//!   still starts a comment. See [`strip_line_comments`].
//! - Normalization is idempotent except when whitespace removal itself joins
//!   two slashes: `a / / b` becomes `a//b`, which a second pass would treat as
//!   a comment.

mod comments;
mod config;
mod document;
mod error;
mod hash;
mod pipeline;
mod whitespace;

pub use crate::comments::strip_line_comments;
pub use crate::config::{NormalizeConfig, DEFAULT_COMMENT_MARKERS};
pub use crate::document::NormalizedCode;
pub use crate::error::CanonicalError;
pub use crate::hash::{hash_canonical_bytes, hash_text};
pub use crate::pipeline::{canonicalize, normalize, normalize_with};
pub use crate::whitespace::{is_code_whitespace, strip_whitespace};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_comment_stripped() {
        assert_eq!(normalize("x=1 # comment\ny=2"), "x=1y=2");
        assert_eq!(normalize("x=1\ny=2"), "x=1y=2");
    }

    #[test]
    fn formatting_differences_vanish() {
        let tight = "def solve(a,b):\n  return a+b";
        let loose = "def solve(a, b):\n    return a + b";
        assert_eq!(normalize(tight), normalize(loose));
        assert_eq!(normalize(tight), "defsolve(a,b):returna+b");
    }

    #[test]
    fn case_is_folded() {
        assert_eq!(normalize("PRINT(Hello)"), "print(hello)");
    }

    #[test]
    fn hash_comments_removed_before_slash_comments() {
        // `#` wins for the tail of the line, `//` then trims what precedes it.
        assert_eq!(normalize("a // b # c\nd"), "ad");
        assert_eq!(normalize("a # b // c\nd"), "ad");
    }

    #[test]
    fn comment_marker_inside_string_literal_still_strips() {
        assert_eq!(normalize("print(\"#1 team\")"), "print(\"");
        assert_eq!(normalize("fetch('https://example.com')"), "fetch('https:");
    }

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t\r\n"), "");
        assert_eq!(normalize("# only a comment\n// another"), "");
    }

    #[test]
    fn normalization_is_idempotent() {
        let inputs = [
            "",
            "x=1 # comment\ny=2",
            "def solve(a, b):\n    return a + b",
            "int main() {\n  // entry\n  return 0;\n}",
            "CamelCase  Identifiers\tAND\u{00A0}NBSP",
            "url = 'http://host/path'",
            "a / b / c",
            "Straße = ΣΑΣ",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn whitespace_joined_slashes_break_idempotence() {
        let once = normalize("a / / b");
        assert_eq!(once, "a//b");
        assert_eq!(normalize(&once), "a");
    }

    #[test]
    fn default_config_matches_plain_normalize() {
        let cfg = NormalizeConfig::default();
        for code in [
            "Total = A + B  # Sum\nPrint(Total) // Show",
            "url = 'http://x' # link",
            "a = 1 # x // y\nb = 2 // z # w",
            "/ / not a comment",
            "",
            "   \n\t  ",
        ] {
            assert_eq!(normalize_with(code, &cfg), normalize(code), "{code:?}");
        }
    }

    #[test]
    fn custom_markers_and_case() {
        let cfg = NormalizeConfig {
            comment_markers: vec!["--".into()],
            lowercase: false,
            ..Default::default()
        };
        assert_eq!(
            normalize_with("SELECT x -- pick\nFROM t # not a comment", &cfg),
            "SELECTxFROMt#notacomment"
        );
    }

    #[test]
    fn canonicalize_reports_char_len_not_bytes() {
        let doc = canonicalize("é = ü", &NormalizeConfig::default()).expect("valid config");
        assert_eq!(doc.text, "é=ü");
        assert_eq!(doc.char_len, 3);
        assert!(doc.text.len() > doc.char_len);
    }

    #[test]
    fn canonical_hash_tracks_text_and_version() {
        let cfg_v1 = NormalizeConfig::default();
        let cfg_v2 = NormalizeConfig {
            version: 2,
            ..Default::default()
        };

        let a = canonicalize("x = 1", &cfg_v1).expect("v1");
        let b = canonicalize("X=1 # same", &cfg_v1).expect("v1");
        let c = canonicalize("x = 1", &cfg_v2).expect("v2");

        assert_eq!(a.sha256_hex, b.sha256_hex);
        assert_ne!(a.sha256_hex, c.sha256_hex);
        assert_eq!(a.sha256_hex, hash_canonical_bytes(1, b"x=1"));
    }

    #[test]
    fn canonicalize_rejects_invalid_config() {
        let cfg = NormalizeConfig {
            version: 0,
            ..Default::default()
        };
        assert!(matches!(
            canonicalize("x", &cfg),
            Err(CanonicalError::InvalidConfig(_))
        ));
    }
}
