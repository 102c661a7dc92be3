// crates/pokedex-core/src/core/mod.rs
// ============================================================================
// Module: Pokedex Core Types
// Description: Canonical keys, entity records, and upstream wire models.
// Purpose: Provide the domain types shared by resolvers, providers, and servers.
// Dependencies: serde, unicode-normalization
// ============================================================================

//! ## Overview
//! Core types cover the three shapes a resolution passes through: the raw
//! upstream payloads ([`descriptor`], [`translation`]), the cached
//! [`EntityRecord`], and the projected [`DisplayRecord`]. Validation lives next
//! to the payload it checks so message catalogs stay with their schema.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod descriptor;
pub mod naming;
pub mod record;
pub mod translation;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use descriptor::ENGLISH_LANGUAGE_CODE;
pub use descriptor::FlavorTextEntry;
pub use descriptor::NameEntry;
pub use descriptor::NamedResource;
pub use descriptor::SpeciesDescriptor;
pub use descriptor::validate_descriptor;
pub use naming::CanonicalKey;
pub use naming::normalize;
pub use record::DescriptionVariant;
pub use record::DisplayRecord;
pub use record::EntityRecord;
pub use record::RESERVED_HABITAT;
pub use record::TranslationStyle;
pub use translation::SuccessCounter;
pub use translation::TranslationContents;
pub use translation::TranslationResponse;
pub use translation::validate_translation;
