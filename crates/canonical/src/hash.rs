//! Hashing utilities for normalized code.
//!
//! # Identity Hash
//!
//! ```text
//! SHA-256(version.to_be_bytes() || 0x00 || normalized_bytes)
//! ```
//!
//! Two submissions with the same identity hash under the same version are
//! exact duplicates after normalization, which lets the matcher skip the
//! sequence comparison for them.
//!
//! # Examples
//!
//! ```rust
//! use canonical::{hash_canonical_bytes, hash_text};
//!
//! let hash = hash_text("defsolve(a,b):returna+b");
//! assert_eq!(hash.len(), 64);
//!
//! assert_ne!(hash_canonical_bytes(1, b"x=1"), hash_canonical_bytes(2, b"x=1"));
//! ```

use sha2::{Digest, Sha256};

/// Hash arbitrary text with SHA-256 and return a hex digest.
///
/// Version-agnostic; suitable for logging and diagnostics. For document
/// identity use [`hash_canonical_bytes`].
pub fn hash_text(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Compute the version-aware identity hash of normalized code.
///
/// - `version.to_be_bytes()`: 4-byte big-endian version number
/// - `0x00`: discriminator byte
/// - `canonical_bytes`: UTF-8 bytes of the normalized text
///
/// Returns a 64-character lowercase hex string.
pub fn hash_canonical_bytes(canonical_version: u32, canonical_bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical_version.to_be_bytes());
    hasher.update([0]);
    hasher.update(canonical_bytes);
    hex::encode(hasher.finalize())
}
