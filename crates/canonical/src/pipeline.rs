use std::borrow::Cow;

use crate::comments::strip_line_comments;
use crate::config::{NormalizeConfig, DEFAULT_COMMENT_MARKERS};
use crate::document::NormalizedCode;
use crate::error::CanonicalError;
use crate::whitespace::strip_whitespace;

/// Normalize source code with the default rules.
///
/// Total over all input, including the empty string. Equivalent to
/// [`normalize_with`] and [`NormalizeConfig::default`].
///
/// ```rust
/// use canonical::normalize;
///
/// assert_eq!(normalize("x=1 # comment\ny=2"), "x=1y=2");
/// assert_eq!(normalize("Int X; // Counter"), "intx;");
/// ```
pub fn normalize(code: &str) -> String {
    normalize_parts(code, DEFAULT_COMMENT_MARKERS, true)
}

/// Normalize source code with explicit rules.
///
/// Comments are stripped first, while line structure still exists; only then
/// is whitespace removed, and lowercasing comes last. The configuration is not
/// validated here; use [`canonicalize`] for that.
pub fn normalize_with(code: &str, cfg: &NormalizeConfig) -> String {
    normalize_parts(
        code,
        cfg.comment_markers.iter().map(String::as_str),
        cfg.lowercase,
    )
}

fn normalize_parts<'m>(
    code: &str,
    markers: impl IntoIterator<Item = &'m str>,
    lowercase: bool,
) -> String {
    // Comment stripping needs the input's line structure.
    let mut text: Cow<str> = Cow::Borrowed(code);
    for marker in markers {
        text = Cow::Owned(strip_line_comments(&text, marker));
    }

    let stripped = strip_whitespace(&text);
    if lowercase {
        stripped.to_lowercase()
    } else {
        stripped
    }
}

/// Validate `cfg` and build the document form of normalized code.
pub fn canonicalize(code: &str, cfg: &NormalizeConfig) -> Result<NormalizedCode, CanonicalError> {
    cfg.validate()?;

    Ok(NormalizedCode::from_normalized(
        normalize_with(code, cfg),
        cfg.version,
    ))
}
