// crates/pokedex-core/src/core/descriptor.rs
// ============================================================================
// Module: Species Descriptor
// Description: Wire model and schema validation for species descriptors.
// Purpose: Decide whether an upstream descriptor can be trusted for display.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`SpeciesDescriptor`] is the raw payload returned by the species provider.
//! Every field is optional on the wire so that "absent" and "empty" can be
//! reported separately. [`validate_descriptor`] checks the payload in four
//! independent field groups; within a group the first failing rule wins,
//! while violations from different groups accumulate.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Language code used to select names and descriptions.
pub const ENGLISH_LANGUAGE_CODE: &str = "en";

/// Legendary flag is absent.
const LEGENDARY_MISSING: &str = "Legendary status not found";
/// Description list is absent.
const DESCRIPTIONS_MISSING: &str = "No Description found";
/// Description list is empty.
const DESCRIPTIONS_EMPTY: &str = "Description is empty";
/// Description list has no English entry.
const DESCRIPTIONS_NO_ENGLISH: &str = "No Description found for english language";
/// An English description entry has no text.
const DESCRIPTION_ENGLISH_EMPTY: &str = "Description for english language is empty";
/// Name list is absent.
const NAMES_MISSING: &str = "No Name found";
/// Name list is empty.
const NAMES_EMPTY: &str = "Names are empty";
/// Name list has no English entry.
const NAMES_NO_ENGLISH: &str = "No Name found for english language";
/// An English name entry has no text.
const NAME_ENGLISH_EMPTY: &str = "Name for english language is empty";
/// Habitat is absent.
const HABITAT_MISSING: &str = "No Habitat found";
/// Habitat has no name.
const HABITAT_NAME_MISSING: &str = "No Habitat name found";

// ============================================================================
// SECTION: Wire Model
// ============================================================================

/// Species descriptor as returned by the species provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesDescriptor {
    /// Legendary flag.
    #[serde(default)]
    pub is_legendary: Option<bool>,
    /// Localized description entries.
    #[serde(default)]
    pub flavor_text_entries: Option<Vec<FlavorTextEntry>>,
    /// Localized name entries.
    #[serde(default)]
    pub names: Option<Vec<NameEntry>>,
    /// Habitat reference.
    #[serde(default)]
    pub habitat: Option<NamedResource>,
}

/// Localized description entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorTextEntry {
    /// Description text.
    #[serde(default)]
    pub flavor_text: Option<String>,
    /// Language of the text.
    #[serde(default)]
    pub language: Option<NamedResource>,
}

/// Localized name entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameEntry {
    /// Localized name.
    #[serde(default)]
    pub name: Option<String>,
    /// Language of the name.
    #[serde(default)]
    pub language: Option<NamedResource>,
}

/// Named upstream resource reference (`{ "name": ..., "url": ... }`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    /// Resource name.
    #[serde(default)]
    pub name: Option<String>,
}

impl NamedResource {
    /// Creates a named resource.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Language-tagged entry with optional text, shared by names and descriptions.
trait Localized {
    /// Returns the entry text.
    fn text(&self) -> Option<&str>;
    /// Returns the language code.
    fn language_code(&self) -> Option<&str>;

    /// Returns true when the entry is tagged as English.
    fn is_english(&self) -> bool {
        self.language_code() == Some(ENGLISH_LANGUAGE_CODE)
    }
}

impl Localized for FlavorTextEntry {
    fn text(&self) -> Option<&str> {
        self.flavor_text.as_deref()
    }

    fn language_code(&self) -> Option<&str> {
        self.language.as_ref().and_then(|lang| lang.name.as_deref())
    }
}

impl Localized for NameEntry {
    fn text(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn language_code(&self) -> Option<&str> {
        self.language.as_ref().and_then(|lang| lang.name.as_deref())
    }
}

impl SpeciesDescriptor {
    /// Returns the first English name.
    #[must_use]
    pub fn english_name(&self) -> Option<&str> {
        first_english(self.names.as_deref())
    }

    /// Returns the first English description text.
    #[must_use]
    pub fn english_description(&self) -> Option<&str> {
        first_english(self.flavor_text_entries.as_deref())
    }

    /// Returns the habitat name.
    #[must_use]
    pub fn habitat_name(&self) -> Option<&str> {
        self.habitat.as_ref().and_then(|habitat| habitat.name.as_deref())
    }
}

/// Returns the text of the first English entry.
fn first_english<T: Localized>(entries: Option<&[T]>) -> Option<&str> {
    entries?.iter().find(|entry| entry.is_english()).and_then(Localized::text)
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Message set for one localized entry collection.
struct LocalizedMessages {
    /// Collection is absent.
    missing: &'static str,
    /// Collection is empty.
    empty: &'static str,
    /// Collection has no English entry.
    no_english: &'static str,
    /// An English entry has no text.
    english_empty: &'static str,
}

/// Messages for the description collection.
const DESCRIPTION_MESSAGES: LocalizedMessages = LocalizedMessages {
    missing: DESCRIPTIONS_MISSING,
    empty: DESCRIPTIONS_EMPTY,
    no_english: DESCRIPTIONS_NO_ENGLISH,
    english_empty: DESCRIPTION_ENGLISH_EMPTY,
};

/// Messages for the name collection.
const NAME_MESSAGES: LocalizedMessages = LocalizedMessages {
    missing: NAMES_MISSING,
    empty: NAMES_EMPTY,
    no_english: NAMES_NO_ENGLISH,
    english_empty: NAME_ENGLISH_EMPTY,
};

/// Validates a species descriptor, returning every violation found.
///
/// An empty result means the descriptor is safe to project.
#[must_use]
pub fn validate_descriptor(descriptor: &SpeciesDescriptor) -> Vec<&'static str> {
    let mut violations = Vec::new();
    if descriptor.is_legendary.is_none() {
        violations.push(LEGENDARY_MISSING);
    }
    validate_localized(
        descriptor.flavor_text_entries.as_deref(),
        &DESCRIPTION_MESSAGES,
        &mut violations,
    );
    validate_localized(descriptor.names.as_deref(), &NAME_MESSAGES, &mut violations);
    match &descriptor.habitat {
        None => violations.push(HABITAT_MISSING),
        Some(habitat) if habitat.name.as_deref().is_none_or(str::is_empty) => {
            violations.push(HABITAT_NAME_MISSING);
        }
        Some(_) => {}
    }
    violations
}

/// Applies the staged presence / emptiness / English rules to one collection.
fn validate_localized<T: Localized>(
    entries: Option<&[T]>,
    messages: &LocalizedMessages,
    violations: &mut Vec<&'static str>,
) {
    let Some(entries) = entries else {
        violations.push(messages.missing);
        return;
    };
    if entries.is_empty() {
        violations.push(messages.empty);
        return;
    }
    if !entries.iter().any(Localized::is_english) {
        violations.push(messages.no_english);
        return;
    }
    for entry in entries.iter().filter(|entry| entry.is_english()) {
        if entry.text().is_none_or(str::is_empty) {
            violations.push(messages.english_empty);
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
