// crates/pokedex-core/src/interfaces/mod.rs
// ============================================================================
// Module: Pokedex Interfaces
// Description: Backend-agnostic interfaces for upstream providers and caching.
// Purpose: Define the contract surfaces used by the Pokedex resolvers.
// Dependencies: crate::core, async-trait, thiserror
// ============================================================================

//! ## Overview
//! Interfaces decouple resolution from transport and storage. Providers are
//! async and report failures as [`UpstreamError`]; the cache is synchronous
//! with per-operation atomicity and no guarantees across a
//! read-fetch-write sequence.

// ============================================================================
// SECTION: Imports
// ============================================================================

use async_trait::async_trait;
use thiserror::Error;

use crate::core::CanonicalKey;
use crate::core::EntityRecord;
use crate::core::SpeciesDescriptor;
use crate::core::TranslationResponse;
use crate::core::TranslationStyle;

// ============================================================================
// SECTION: Upstream Providers
// ============================================================================

/// Transport-level failure reported by an upstream provider.
///
/// # Invariants
/// - `status` is the upstream HTTP status when one was received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("upstream request failed: {message}")]
pub struct UpstreamError {
    /// Upstream status code, when available.
    pub status: Option<u16>,
    /// Human-readable failure message.
    pub message: String,
}

impl UpstreamError {
    /// Creates an upstream error.
    #[must_use]
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// Species descriptor provider.
#[async_trait]
pub trait SpeciesProvider: Send + Sync {
    /// Fetches the raw descriptor for a canonical key.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] when the provider cannot be reached or rejects
    /// the request.
    async fn fetch_species(&self, key: &CanonicalKey) -> Result<SpeciesDescriptor, UpstreamError>;
}

/// Stylistic translation provider.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translates `text` into the requested style.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] when the provider cannot be reached or rejects
    /// the request.
    async fn translate(
        &self,
        text: &str,
        style: TranslationStyle,
    ) -> Result<TranslationResponse, UpstreamError>;
}

// ============================================================================
// SECTION: Entity Cache
// ============================================================================

/// Entity cache errors.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Cache backend could not complete the operation.
    #[error("entity cache unavailable: {0}")]
    Unavailable(String),
}

/// Per-entity cache keyed by canonical name.
///
/// # Invariants
/// - Each call is atomic on its own.
/// - Translated variants, once stored, are never replaced.
pub trait EntityCache: Send + Sync {
    /// Returns the cached record for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the backend is unavailable.
    fn get(&self, key: &CanonicalKey) -> Result<Option<EntityRecord>, CacheError>;

    /// Inserts or replaces the base fields for `key`, keeping stored variants.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the backend is unavailable.
    fn put(&self, key: &CanonicalKey, record: EntityRecord) -> Result<(), CacheError>;

    /// Stores a translated variant in place, seeding the entry from `base`
    /// when absent. Returns the record as stored.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the backend is unavailable.
    fn store_translation(
        &self,
        key: &CanonicalKey,
        style: TranslationStyle,
        text: &str,
        base: &EntityRecord,
    ) -> Result<EntityRecord, CacheError>;
}
