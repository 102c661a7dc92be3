// crates/pokedex-core/src/core/record.rs
// ============================================================================
// Module: Entity Records
// Description: Cached entity records, translation styles, and display views.
// Purpose: Model the cache value and the projection returned to callers.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! An [`EntityRecord`] is created once per canonical key after the regular
//! description passes validation. Translated variants are attached later, one
//! per [`TranslationStyle`], and never change once set. A [`DisplayRecord`] is
//! a transient view of a record with exactly one description chosen.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Habitat name that routes non-legendary entities to the Yoda style.
pub const RESERVED_HABITAT: &str = "cave";

// ============================================================================
// SECTION: Translation Style
// ============================================================================

/// Stylistic translation applied to a description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationStyle {
    /// Yoda-speak; used for legendary and cave-dwelling entities.
    Yoda,
    /// Shakespearean English; used for everything else.
    Shakespeare,
}

impl TranslationStyle {
    /// Selects the style for an entity from its current fields.
    #[must_use]
    pub fn select(is_legendary: bool, habitat: &str) -> Self {
        if is_legendary || habitat == RESERVED_HABITAT { Self::Yoda } else { Self::Shakespeare }
    }

    /// Returns the stable label, which doubles as the upstream endpoint name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yoda => "yoda",
            Self::Shakespeare => "shakespeare",
        }
    }
}

impl fmt::Display for TranslationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which description a display view exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionVariant {
    /// The validated, untranslated description.
    Regular,
    /// A translated description for the given style.
    Translated(TranslationStyle),
}

// ============================================================================
// SECTION: Entity Record
// ============================================================================

/// Cached entity state for a canonical key.
///
/// # Invariants
/// - `regular` has passed descriptor validation.
/// - A translated field, once `Some`, is never replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRecord {
    /// Display name of the entity.
    pub name: String,
    /// Untranslated description with whitespace runs collapsed.
    pub regular: String,
    /// Legendary flag.
    pub is_legendary: bool,
    /// Habitat name.
    pub habitat: String,
    /// Yoda-style translation, once produced.
    yoda: Option<String>,
    /// Shakespeare-style translation, once produced.
    shakespeare: Option<String>,
}

impl EntityRecord {
    /// Creates a record with no translated variants.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        regular: impl Into<String>,
        is_legendary: bool,
        habitat: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            regular: regular.into(),
            is_legendary,
            habitat: habitat.into(),
            yoda: None,
            shakespeare: None,
        }
    }

    /// Returns the style this record translates to under the current policy.
    #[must_use]
    pub fn translation_style(&self) -> TranslationStyle {
        TranslationStyle::select(self.is_legendary, &self.habitat)
    }

    /// Returns the cached translation for a style, if present.
    #[must_use]
    pub fn translation(&self, style: TranslationStyle) -> Option<&str> {
        match style {
            TranslationStyle::Yoda => self.yoda.as_deref(),
            TranslationStyle::Shakespeare => self.shakespeare.as_deref(),
        }
    }

    /// Sets a translated variant unless one is already present.
    ///
    /// Returns `true` when the variant was written.
    pub fn set_translation(&mut self, style: TranslationStyle, text: impl Into<String>) -> bool {
        let slot = match style {
            TranslationStyle::Yoda => &mut self.yoda,
            TranslationStyle::Shakespeare => &mut self.shakespeare,
        };
        if slot.is_some() {
            return false;
        }
        *slot = Some(text.into());
        true
    }

    /// Copies translated variants from `other` into empty slots of `self`.
    pub fn absorb_translations(&mut self, other: &Self) {
        for style in [TranslationStyle::Yoda, TranslationStyle::Shakespeare] {
            if let Some(text) = other.translation(style) {
                self.set_translation(style, text);
            }
        }
    }

    /// Projects the regular-description view.
    #[must_use]
    pub fn regular_display(&self) -> DisplayRecord {
        self.project(self.regular.clone())
    }

    /// Projects a view for the requested variant.
    ///
    /// Returns `None` when a translated variant has not been produced yet.
    #[must_use]
    pub fn display(&self, variant: DescriptionVariant) -> Option<DisplayRecord> {
        match variant {
            DescriptionVariant::Regular => Some(self.regular_display()),
            DescriptionVariant::Translated(style) => {
                self.translation(style).map(|text| self.project(text.to_string()))
            }
        }
    }

    /// Builds a display view carrying the given description.
    fn project(&self, description: String) -> DisplayRecord {
        DisplayRecord {
            name: self.name.clone(),
            description,
            is_legendary: self.is_legendary,
            habitat: self.habitat.clone(),
        }
    }
}

// ============================================================================
// SECTION: Display Record
// ============================================================================

/// Resolver output: one entity with a single chosen description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    /// Display name of the entity.
    pub name: String,
    /// Description actually returned (regular or translated).
    pub description: String,
    /// Legendary flag.
    pub is_legendary: bool,
    /// Habitat name.
    pub habitat: String,
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

    use super::DescriptionVariant;
    use super::EntityRecord;
    use super::TranslationStyle;

    #[test]
    fn style_policy_prefers_yoda_for_legendary_or_cave() {
        assert_eq!(TranslationStyle::select(true, "swamp"), TranslationStyle::Yoda);
        assert_eq!(TranslationStyle::select(false, "cave"), TranslationStyle::Yoda);
        assert_eq!(TranslationStyle::select(false, "forest"), TranslationStyle::Shakespeare);
        assert_eq!(TranslationStyle::select(false, "Cave"), TranslationStyle::Shakespeare);
    }

    #[test]
    fn translations_are_write_once() {
        let mut record = EntityRecord::new("zubat", "bat", false, "cave");
        assert!(record.set_translation(TranslationStyle::Yoda, "first"));
        assert!(!record.set_translation(TranslationStyle::Yoda, "second"));
        assert_eq!(record.translation(TranslationStyle::Yoda), Some("first"));
        assert_eq!(record.translation(TranslationStyle::Shakespeare), None);
    }

    #[test]
    fn display_of_missing_variant_is_none() {
        let record = EntityRecord::new("pikachu", "mouse", false, "forest");
        let shakespeare = DescriptionVariant::Translated(TranslationStyle::Shakespeare);
        assert!(record.display(shakespeare).is_none());
        let regular = record.display(DescriptionVariant::Regular).unwrap();
        assert_eq!(regular.description, "mouse");
    }

    #[test]
    fn absorb_keeps_existing_variants() {
        let mut fresh = EntityRecord::new("zubat", "bat", false, "cave");
        fresh.set_translation(TranslationStyle::Yoda, "mine");
        let mut older = EntityRecord::new("zubat", "bat", false, "cave");
        older.set_translation(TranslationStyle::Yoda, "theirs");
        older.set_translation(TranslationStyle::Shakespeare, "verily");
        fresh.absorb_translations(&older);
        assert_eq!(fresh.translation(TranslationStyle::Yoda), Some("mine"));
        assert_eq!(fresh.translation(TranslationStyle::Shakespeare), Some("verily"));
    }
}
