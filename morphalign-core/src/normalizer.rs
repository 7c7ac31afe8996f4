//! Comparison-form normalization
//!
//! Words and morphemes are compared case- and accent-insensitively. The
//! comparison form must keep one character per original character, so that
//! a position found in the normalized word indexes the same character in the
//! original word.

use crate::error::{CoreError, Result};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Normalize a string for prefix comparison.
///
/// Applies, in order:
/// 1. canonical decomposition (NFD), so accents become combining marks
/// 2. removal of all combining marks
/// 3. compatibility composition (NFKC)
/// 4. lowercasing
///
/// The result is not guaranteed to have the same length as the input; use
/// [`normalize_chars`] where positions matter.
pub fn normalize(text: &str) -> String {
    let stripped: String = text.nfd().filter(|c| !is_combining_mark(*c)).collect();
    stripped.nfkc().collect::<String>().to_lowercase()
}

/// Normalize a surface word into its comparison characters.
///
/// Fails with [`CoreError::LengthMismatch`] when normalization adds or
/// removes characters (ligatures such as `"ﬁ"`, or a base letter followed
/// by a separate combining mark).
pub fn normalize_chars(text: &str) -> Result<Vec<char>> {
    let normalized: Vec<char> = normalize(text).chars().collect();
    let original = text.chars().count();

    if normalized.len() != original {
        return Err(CoreError::LengthMismatch {
            text: text.to_string(),
            original,
            normalized: normalized.len(),
        });
    }

    Ok(normalized)
}
