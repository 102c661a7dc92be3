// crates/pokedex-core/src/runtime/entity.rs
// ============================================================================
// Module: Entity Resolver
// Description: Resolution of a requested name into a regular display record.
// Purpose: Normalize, consult the cache, fetch, validate, project, and store.
// Dependencies: crate::{core, interfaces}, tracing
// ============================================================================

//! ## Overview
//! [`EntityResolver`] is the only path that creates cache entries from
//! upstream data. A cache hit short-circuits all upstream and validation
//! work. Concurrent misses for the same key may both fetch; the writes are
//! equivalent so the race only costs an extra upstream call.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use tracing::debug;
use tracing::warn;

use crate::core::CanonicalKey;
use crate::core::DisplayRecord;
use crate::core::EntityRecord;
use crate::core::SpeciesDescriptor;
use crate::core::normalize;
use crate::core::validate_descriptor;
use crate::interfaces::EntityCache;
use crate::interfaces::SpeciesProvider;
use crate::runtime::cache::SharedEntityCache;
use crate::runtime::error::ResolveError;

// ============================================================================
// SECTION: Resolver
// ============================================================================

/// Resolves names into regular display records.
#[derive(Clone)]
pub struct EntityResolver {
    /// Species descriptor provider.
    species: Arc<dyn SpeciesProvider>,
    /// Shared entity cache.
    cache: SharedEntityCache,
}

impl EntityResolver {
    /// Creates a resolver over a provider and a shared cache.
    #[must_use]
    pub fn new(species: Arc<dyn SpeciesProvider>, cache: SharedEntityCache) -> Self {
        Self {
            species,
            cache,
        }
    }

    /// Resolves a raw name into its regular display record.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidInput`] for blank names,
    /// [`ResolveError::Upstream`] when the descriptor cannot be fetched,
    /// [`ResolveError::NotFound`] when it fails validation, and
    /// [`ResolveError::Cache`] when the cache is unavailable.
    pub async fn resolve(&self, raw_name: &str) -> Result<DisplayRecord, ResolveError> {
        let key = canonical_key_for(raw_name)?;
        Ok(self.resolve_record(&key).await?.regular_display())
    }

    /// Returns the cached record for `key`, fetching and storing it on a miss.
    pub(crate) async fn resolve_record(
        &self,
        key: &CanonicalKey,
    ) -> Result<EntityRecord, ResolveError> {
        if let Some(record) = self.cache.get(key)? {
            debug!(key = %key, "entity cache hit");
            return Ok(record);
        }
        let descriptor = self.species.fetch_species(key).await.map_err(|err| {
            warn!(key = %key, status = ?err.status, error = %err.message, "species fetch failed");
            ResolveError::from(err)
        })?;
        let violations = validate_descriptor(&descriptor);
        if !violations.is_empty() {
            debug!(key = %key, violations = violations.len(), "species descriptor rejected");
            return Err(ResolveError::NotFound(
                violations.into_iter().map(str::to_string).collect(),
            ));
        }
        let record = project_record(&descriptor)?;
        self.cache.put(key, record.clone())?;
        debug!(key = %key, "entity cached");
        Ok(record)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Rejects blank names and normalizes the rest.
pub(crate) fn canonical_key_for(raw_name: &str) -> Result<CanonicalKey, ResolveError> {
    if raw_name.trim().is_empty() {
        return Err(ResolveError::empty_name());
    }
    Ok(normalize(raw_name))
}

/// Projects a validated descriptor into a cache record.
fn project_record(descriptor: &SpeciesDescriptor) -> Result<EntityRecord, ResolveError> {
    let (Some(name), Some(description), Some(is_legendary), Some(habitat)) = (
        descriptor.english_name(),
        descriptor.english_description(),
        descriptor.is_legendary,
        descriptor.habitat_name(),
    ) else {
        return Err(ResolveError::NotFound(vec![
            "species descriptor is incomplete".to_string(),
        ]));
    };
    Ok(EntityRecord::new(name, collapse_whitespace(description), is_legendary, habitat))
}

/// Replaces every run of whitespace with a single space.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

// ============================================================================
// SECTION: Tests
// ============================================================================
