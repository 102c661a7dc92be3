// crates/pokedex-core/tests/common/mod.rs
// ============================================================================
// Module: Common Test Utilities
// Description: Scripted providers and descriptor builders for core tests.
// Purpose: Drive the resolvers without network access and count upstream calls.
// Dependencies: pokedex-core
// ============================================================================

//! ## Overview
//! Fakes record every key and style they are asked for so tests can assert
//! both on what reached the upstream boundary and on how often it did.

#![allow(
    dead_code,
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    reason = "Shared helpers are not used by every test binary."
)]

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use pokedex_core::CanonicalKey;
use pokedex_core::EntityResolver;
use pokedex_core::FlavorTextEntry;
use pokedex_core::InMemoryEntityCache;
use pokedex_core::NameEntry;
use pokedex_core::NamedResource;
use pokedex_core::SharedEntityCache;
use pokedex_core::SpeciesDescriptor;
use pokedex_core::SpeciesProvider;
use pokedex_core::TranslationProvider;
use pokedex_core::TranslationResolver;
use pokedex_core::TranslationResponse;
use pokedex_core::TranslationStyle;
use pokedex_core::UpstreamError;

// ============================================================================
// SECTION: Descriptor Builders
// ============================================================================

/// Builds a complete English descriptor.
pub fn descriptor(
    name: &str,
    description: &str,
    legendary: bool,
    habitat: &str,
) -> SpeciesDescriptor {
    SpeciesDescriptor {
        is_legendary: Some(legendary),
        flavor_text_entries: Some(vec![
            FlavorTextEntry {
                flavor_text: Some("texto".to_string()),
                language: Some(NamedResource::named("es")),
            },
            FlavorTextEntry {
                flavor_text: Some(description.to_string()),
                language: Some(NamedResource::named("en")),
            },
        ]),
        names: Some(vec![NameEntry {
            name: Some(name.to_string()),
            language: Some(NamedResource::named("en")),
        }]),
        habitat: Some(NamedResource::named(habitat)),
    }
}

// ============================================================================
// SECTION: Species Fake
// ============================================================================

/// Species provider returning one scripted result for every key.
pub struct ScriptedSpecies {
    /// Result returned for every request.
    result: Result<SpeciesDescriptor, UpstreamError>,
    /// Keys requested, in order.
    requests: Mutex<Vec<String>>,
}

impl ScriptedSpecies {
    /// Provider that always returns `descriptor`.
    pub fn returning(descriptor: SpeciesDescriptor) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(descriptor),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Provider that always fails with `error`.
    pub fn failing(error: UpstreamError) -> Arc<Self> {
        Arc::new(Self {
            result: Err(error),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Keys requested so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of fetches performed.
    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl SpeciesProvider for ScriptedSpecies {
    async fn fetch_species(&self, key: &CanonicalKey) -> Result<SpeciesDescriptor, UpstreamError> {
        self.requests.lock().unwrap().push(key.as_str().to_string());
        self.result.clone()
    }
}

// ============================================================================
// SECTION: Translation Fake
// ============================================================================

/// Translation provider returning one scripted result for every request.
pub struct ScriptedTranslator {
    /// Result returned for every request.
    result: Result<TranslationResponse, UpstreamError>,
    /// Styles and texts requested, in order.
    requests: Mutex<Vec<(TranslationStyle, String)>>,
}

impl ScriptedTranslator {
    /// Provider that always returns `response`.
    pub fn returning(response: TranslationResponse) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(response),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Provider that always fails with `error`.
    pub fn failing(error: UpstreamError) -> Arc<Self> {
        Arc::new(Self {
            result: Err(error),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Styles requested so far.
    pub fn styles(&self) -> Vec<TranslationStyle> {
        self.requests.lock().unwrap().iter().map(|(style, _)| *style).collect()
    }

    /// Texts sent for translation so far.
    pub fn texts(&self) -> Vec<String> {
        self.requests.lock().unwrap().iter().map(|(_, text)| text.clone()).collect()
    }

    /// Number of translation requests performed.
    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl TranslationProvider for ScriptedTranslator {
    async fn translate(
        &self,
        text: &str,
        style: TranslationStyle,
    ) -> Result<TranslationResponse, UpstreamError> {
        self.requests.lock().unwrap().push((style, text.to_string()));
        self.result.clone()
    }
}

// ============================================================================
// SECTION: Wiring
// ============================================================================

/// Resolvers sharing one in-memory cache.
pub struct Harness {
    /// Backing cache, for direct inspection.
    pub cache: InMemoryEntityCache,
    /// Entity resolver.
    pub entities: EntityResolver,
    /// Translation resolver.
    pub translations: TranslationResolver,
}

/// Wires both resolvers over the given fakes and a fresh cache.
pub fn harness(species: Arc<ScriptedSpecies>, translator: Arc<ScriptedTranslator>) -> Harness {
    let cache = InMemoryEntityCache::new();
    let shared = SharedEntityCache::from_cache(cache.clone());
    let entities = EntityResolver::new(species, shared.clone());
    let translations = TranslationResolver::new(entities.clone(), translator, shared);
    Harness {
        cache,
        entities,
        translations,
    }
}
