// crates/pokedex-core/src/core/naming.rs
// ============================================================================
// Module: Name Normalization
// Description: Canonical slug derivation for requested creature names.
// Purpose: Map arbitrary labels to the key used for upstream lookup and caching.
// Dependencies: serde, unicode-normalization
// ============================================================================

//! ## Overview
//! [`normalize`] turns any label into a lowercase, hyphenated ASCII slug.
//! Gender glyphs become `-f`/`-m` suffixes, periods and apostrophes are
//! dropped outright, diacritics are folded away, and every other run of
//! non-alphanumeric characters collapses into a single hyphen.
//!
//! Invariants:
//! - Normalization is pure and total; blank input yields an empty key.
//! - Normalizing an already-canonical key returns it unchanged.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Glyphs replaced by literal text before slugification.
const GLYPH_SUBSTITUTIONS: &[(char, &str)] = &[('\u{2640}', "-f"), ('\u{2642}', "-m")];

/// Characters removed without leaving a separator behind.
const STRIPPED_CHARACTERS: &[char] = &['.', '\'', '\u{2019}'];

/// Separator emitted between slug segments.
const SEPARATOR: char = '-';

// ============================================================================
// SECTION: Canonical Key
// ============================================================================

/// Canonical cache and lookup key for a creature.
///
/// # Invariants
/// - Contains only `[a-z0-9-]`, with no leading, trailing, or doubled hyphens.
/// - Only produced by [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when normalization left nothing to look up.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// SECTION: Normalization
// ============================================================================

/// Normalizes a raw label into its canonical key.
///
/// Callers are expected to reject blank input before calling; this function
/// never fails.
#[must_use]
pub fn normalize(raw: &str) -> CanonicalKey {
    let substituted = substitute_glyphs(raw);
    let mut slug = String::with_capacity(substituted.len());
    let mut pending_separator = false;
    for ch in substituted.nfd().filter(|ch| !is_combining_mark(*ch)) {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push(SEPARATOR);
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    CanonicalKey(slug)
}

/// Applies glyph replacements and strips characters that vanish entirely.
fn substitute_glyphs(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if STRIPPED_CHARACTERS.contains(&ch) {
            continue;
        }
        match GLYPH_SUBSTITUTIONS.iter().find(|(glyph, _)| *glyph == ch) {
            Some((_, replacement)) => out.push_str(replacement),
            None => out.push(ch),
        }
    }
    out
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only assertions."
    )]

    use super::normalize;

    #[test]
    fn lowercases_and_hyphenates_whitespace() {
        assert_eq!(normalize("MewTwo").as_str(), "mewtwo");
        assert_eq!(normalize("Tapu   Koko").as_str(), "tapu-koko");
        assert_eq!(normalize("  Mr Rime \t").as_str(), "mr-rime");
    }

    #[test]
    fn strips_periods_and_apostrophes_without_separator() {
        assert_eq!(normalize("Mime Jr.").as_str(), "mime-jr");
        assert_eq!(normalize("Mr. Mime").as_str(), "mr-mime");
        assert_eq!(normalize("Farfetch'd").as_str(), "farfetchd");
        assert_eq!(normalize("Sirfetch\u{2019}d").as_str(), "sirfetchd");
    }

    #[test]
    fn gender_glyphs_become_suffixes() {
        assert_eq!(normalize("Nidoran\u{2640}").as_str(), "nidoran-f");
        assert_eq!(normalize("Nidoran\u{2642}").as_str(), "nidoran-m");
        assert_eq!(normalize("Nidoran \u{2642}").as_str(), "nidoran-m");
    }

    #[test]
    fn folds_diacritics_and_collapses_punctuation() {
        assert_eq!(normalize("Flab\u{e9}b\u{e9}").as_str(), "flabebe");
        assert_eq!(normalize("Type: Null").as_str(), "type-null");
        assert_eq!(normalize("--Porygon--Z--").as_str(), "porygon-z");
    }

    #[test]
    fn blank_input_yields_empty_key() {
        assert!(normalize("").is_empty());
        assert!(normalize("   ").is_empty());
        assert!(normalize("...").is_empty());
    }
}
