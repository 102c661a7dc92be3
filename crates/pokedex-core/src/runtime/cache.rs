// crates/pokedex-core/src/runtime/cache.rs
// ============================================================================
// Module: Entity Cache Backends
// Description: In-memory entity cache and shared cache wrapper.
// Purpose: Provide the process-wide cache injected into both resolvers.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! [`InMemoryEntityCache`] keeps records in a mutex-guarded map for the life
//! of the process: no TTL, no size bound, no eviction. [`SharedEntityCache`]
//! wraps any backend behind an `Arc` so resolvers can clone it freely.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::core::CanonicalKey;
use crate::core::EntityRecord;
use crate::core::TranslationStyle;
use crate::interfaces::CacheError;
use crate::interfaces::EntityCache;

// ============================================================================
// SECTION: In-Memory Cache
// ============================================================================

/// In-memory entity cache.
///
/// # Invariants
/// - Entries are never evicted.
/// - `put` keeps translated variants already stored for the key.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEntityCache {
    /// Records keyed by canonical name, protected by a mutex.
    entries: Arc<Mutex<BTreeMap<CanonicalKey, EntityRecord>>>,
}

impl InMemoryEntityCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of cached entities.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the cache mutex is poisoned.
    pub fn len(&self) -> Result<usize, CacheError> {
        Ok(self.lock()?.len())
    }

    /// Returns true when nothing has been cached yet.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the cache mutex is poisoned.
    pub fn is_empty(&self) -> Result<bool, CacheError> {
        Ok(self.lock()?.is_empty())
    }

    /// Acquires the cache lock.
    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<CanonicalKey, EntityRecord>>, CacheError> {
        self.entries
            .lock()
            .map_err(|_| CacheError::Unavailable("entity cache mutex poisoned".to_string()))
    }
}

impl EntityCache for InMemoryEntityCache {
    fn get(&self, key: &CanonicalKey) -> Result<Option<EntityRecord>, CacheError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn put(&self, key: &CanonicalKey, mut record: EntityRecord) -> Result<(), CacheError> {
        let mut guard = self.lock()?;
        if let Some(existing) = guard.get(key) {
            record.absorb_translations(existing);
        }
        guard.insert(key.clone(), record);
        Ok(())
    }

    fn store_translation(
        &self,
        key: &CanonicalKey,
        style: TranslationStyle,
        text: &str,
        base: &EntityRecord,
    ) -> Result<EntityRecord, CacheError> {
        let mut guard = self.lock()?;
        let entry = guard.entry(key.clone()).or_insert_with(|| base.clone());
        entry.set_translation(style, text);
        Ok(entry.clone())
    }
}

// ============================================================================
// SECTION: Shared Cache
// ============================================================================

/// Shared entity cache backed by an `Arc` trait object.
#[derive(Clone)]
pub struct SharedEntityCache {
    /// Inner cache implementation.
    inner: Arc<dyn EntityCache>,
}

impl SharedEntityCache {
    /// Wraps a cache in a shared, clonable wrapper.
    #[must_use]
    pub fn from_cache(cache: impl EntityCache + 'static) -> Self {
        Self {
            inner: Arc::new(cache),
        }
    }
}

impl EntityCache for SharedEntityCache {
    fn get(&self, key: &CanonicalKey) -> Result<Option<EntityRecord>, CacheError> {
        self.inner.get(key)
    }

    fn put(&self, key: &CanonicalKey, record: EntityRecord) -> Result<(), CacheError> {
        self.inner.put(key, record)
    }

    fn store_translation(
        &self,
        key: &CanonicalKey,
        style: TranslationStyle,
        text: &str,
        base: &EntityRecord,
    ) -> Result<EntityRecord, CacheError> {
        self.inner.store_translation(key, style, text, base)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
