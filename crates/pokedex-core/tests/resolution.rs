// crates/pokedex-core/tests/resolution.rs
// ============================================================================
// Module: Entity Resolution Tests
// Description: Tests for regular resolution, caching, and validation errors.
// Purpose: Verify normalization keying, cache short-circuit, and error mapping.
// ============================================================================

//! ## Overview
//! Exercises [`EntityResolver`] against scripted providers.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod common;

use common::ScriptedSpecies;
use common::ScriptedTranslator;
use common::descriptor;
use common::harness;
use pokedex_core::DisplayRecord;
use pokedex_core::EntityCache;
use pokedex_core::NamedResource;
use pokedex_core::ResolveError;
use pokedex_core::SpeciesDescriptor;
use pokedex_core::TranslationResponse;
use pokedex_core::UpstreamError;
use pokedex_core::normalize;

fn idle_translator() -> std::sync::Arc<ScriptedTranslator> {
    ScriptedTranslator::returning(TranslationResponse::default())
}

// ============================================================================
// SECTION: End-to-End
// ============================================================================

#[tokio::test]
async fn mewtwo_resolves_with_collapsed_description() {
    let species = ScriptedSpecies::returning(descriptor("mewtwo", "hello   world", true, "swamp"));
    let h = harness(species.clone(), idle_translator());

    let record = h.entities.resolve("MewTwo").await.unwrap();

    assert_eq!(
        record,
        DisplayRecord {
            name: "mewtwo".to_string(),
            description: "hello world".to_string(),
            is_legendary: true,
            habitat: "swamp".to_string(),
        }
    );
    assert_eq!(species.requests(), vec!["mewtwo".to_string()]);
}

#[tokio::test]
async fn trailing_punctuation_is_normalized_before_fetch() {
    let species = ScriptedSpecies::returning(descriptor("Mime Jr.", "mimic", false, "grassland"));
    let h = harness(species.clone(), idle_translator());

    h.entities.resolve("Mime Jr.").await.unwrap();

    assert_eq!(species.requests(), vec!["mime-jr".to_string()]);
}

#[tokio::test]
async fn display_name_is_the_english_name() {
    let species = ScriptedSpecies::returning(descriptor("Mr. Mime", "barrier", false, "urban"));
    let h = harness(species, idle_translator());

    let record = h.entities.resolve("mr mime").await.unwrap();

    assert_eq!(record.name, "Mr. Mime");
}

// ============================================================================
// SECTION: Caching
// ============================================================================

#[tokio::test]
async fn second_resolution_is_served_from_cache() {
    let species =
        ScriptedSpecies::returning(descriptor("pikachu", "electric mouse", false, "forest"));
    let h = harness(species.clone(), idle_translator());

    let first = h.entities.resolve("pikachu").await.unwrap();
    let second = h.entities.resolve("pikachu").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(species.calls(), 1);
    assert_eq!(h.cache.len().unwrap(), 1);
}

#[tokio::test]
async fn names_with_the_same_key_share_one_entry() {
    let species =
        ScriptedSpecies::returning(descriptor("nidoran-f", "poison pin", false, "grassland"));
    let h = harness(species.clone(), idle_translator());

    let variants = ["Nidoran♀", "nidoran-f", "  NIDORAN F ", "Nidoran.♀"];
    let mut records = Vec::new();
    for raw in variants {
        records.push(h.entities.resolve(raw).await.unwrap());
    }

    assert!(records.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(species.calls(), 1);
    assert!(h.cache.get(&normalize("nidoran-f")).unwrap().is_some());
}

#[tokio::test]
async fn failed_resolution_is_not_cached() {
    let species = ScriptedSpecies::failing(UpstreamError::new(Some(404), "Not Found"));
    let h = harness(species.clone(), idle_translator());

    assert!(h.entities.resolve("missingno").await.is_err());
    assert!(h.entities.resolve("missingno").await.is_err());

    assert_eq!(species.calls(), 2);
    assert!(h.cache.is_empty().unwrap());
}

// ============================================================================
// SECTION: Errors
// ============================================================================

#[tokio::test]
async fn blank_name_is_rejected_without_fetch() {
    let species = ScriptedSpecies::returning(descriptor("x", "y", false, "z"));
    let h = harness(species.clone(), idle_translator());

    let err = h.entities.resolve("   ").await.unwrap_err();

    assert_eq!(err, ResolveError::empty_name());
    assert_eq!(err.status_code(), 400);
    assert_eq!(species.calls(), 0);
}

#[tokio::test]
async fn missing_habitat_is_reported() {
    let mut payload = descriptor("onix", "rock snake", false, "cave");
    payload.habitat = None;
    let h = harness(ScriptedSpecies::returning(payload), idle_translator());

    let err = h.entities.resolve("onix").await.unwrap_err();

    assert_eq!(err, ResolveError::NotFound(vec!["No Habitat found".to_string()]));
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn habitat_without_name_is_reported() {
    let mut payload = descriptor("onix", "rock snake", false, "cave");
    payload.habitat = Some(NamedResource::default());
    let h = harness(ScriptedSpecies::returning(payload), idle_translator());

    let err = h.entities.resolve("onix").await.unwrap_err();

    assert_eq!(err, ResolveError::NotFound(vec!["No Habitat name found".to_string()]));
}

#[tokio::test]
async fn violations_from_every_group_are_returned_in_order() {
    let h = harness(ScriptedSpecies::returning(SpeciesDescriptor::default()), idle_translator());

    let err = h.entities.resolve("ghost").await.unwrap_err();

    assert_eq!(
        err.messages(),
        vec![
            "Legendary status not found".to_string(),
            "No Description found".to_string(),
            "No Name found".to_string(),
            "No Habitat found".to_string(),
        ]
    );
}

#[tokio::test]
async fn transport_status_is_propagated() {
    let species = ScriptedSpecies::failing(UpstreamError::new(Some(503), "Service Unavailable"));
    let h = harness(species, idle_translator());

    let err = h.entities.resolve("pikachu").await.unwrap_err();

    assert_eq!(err.status_code(), 503);
    assert_eq!(err.messages(), vec!["Service Unavailable".to_string()]);
}

#[tokio::test]
async fn transport_failure_without_status_is_server_error() {
    let species = ScriptedSpecies::failing(UpstreamError::new(None, "connection refused"));
    let h = harness(species, idle_translator());

    let err = h.entities.resolve("pikachu").await.unwrap_err();

    assert_eq!(err.status_code(), 500);
}
