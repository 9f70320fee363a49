//! Document form of normalized code.
//!
//! [`NormalizedCode`] is what [`canonicalize`](crate::canonicalize) returns:
//! the comparison text plus the metadata the matcher needs to avoid
//! recomputing it (character length for the short-snippet cutoff, identity
//! hash for the exact-duplicate fast path).
//!
//! ```rust
//! use canonical::{canonicalize, NormalizeConfig};
//!
//! let doc = canonicalize("X = 1  # set x", &NormalizeConfig::default()).unwrap();
//! assert_eq!(doc.text, "x=1");
//! assert_eq!(doc.char_len, 3);
//! assert_eq!(doc.sha256_hex.len(), 64);
//! assert_eq!(doc.version, 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::hash::hash_canonical_bytes;

/// Normalized source code and its derived metadata.
///
/// Ephemeral by contract: produced per check, never persisted by the core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizedCode {
    /// Comment-free, whitespace-free, lowercased code.
    pub text: String,
    /// Length of `text` in Unicode scalar values (not bytes).
    pub char_len: usize,
    /// Version-aware identity hash, see [`hash_canonical_bytes`](crate::hash_canonical_bytes).
    pub sha256_hex: String,
    /// Normalization rules version used to produce this document.
    pub version: u32,
}

impl NormalizedCode {
    /// Wrap already-normalized text, deriving its length and identity hash.
    pub fn from_normalized(text: String, version: u32) -> Self {
        let char_len = text.chars().count();
        let sha256_hex = hash_canonical_bytes(version, text.as_bytes());
        Self {
            text,
            char_len,
            sha256_hex,
            version,
        }
    }

    /// Characters of the normalized text, the unit the matcher compares.
    pub fn chars(&self) -> Vec<char> {
        self.text.chars().collect()
    }
}
