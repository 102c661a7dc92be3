// crates/pokedex-providers/src/lib.rs
// ============================================================================
// Module: Pokedex Providers
// Description: HTTP implementations of the Pokedex upstream provider traits.
// Purpose: Connect the resolution core to the species and translation APIs.
// Dependencies: pokedex-core, reqwest, serde_json, tracing
// ============================================================================

//! ## Overview
//! This crate ships the two outbound clients used by the Pokedex service: a
//! species descriptor provider and a stylistic translation provider. Both
//! enforce a request timeout, disable redirects, and bound response sizes.
//! Neither retries; failures are handed to the resolver as
//! [`pokedex_core::UpstreamError`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod client;
pub mod species;
pub mod translation;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use client::DEFAULT_MAX_RESPONSE_BYTES;
pub use client::DEFAULT_TIMEOUT_MS;
pub use client::DEFAULT_USER_AGENT;
pub use client::HttpClientConfig;
pub use client::OVERSIZED_BODY_MESSAGE;
pub use client::ProviderBuildError;
pub use species::DEFAULT_SPECIES_BASE_URL;
pub use species::PokeApiSpeciesProvider;
pub use translation::API_SECRET_HEADER;
pub use translation::DEFAULT_TRANSLATION_BASE_URL;
pub use translation::FunTranslationsProvider;
pub use translation::TranslationErrorBody;
