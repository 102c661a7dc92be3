// crates/pokedex-providers/src/species.rs
// ============================================================================
// Module: Species Provider
// Description: HTTP species descriptor provider.
// Purpose: Fetch `pokemon-species/{slug}` descriptors from a PokeAPI-style host.
// Dependencies: pokedex-core, reqwest, serde_json, tracing
// ============================================================================

//! ## Overview
//! [`PokeApiSpeciesProvider`] issues one bounded GET per canonical key and
//! decodes the body into the core descriptor model. Non-success statuses are
//! reported with the upstream status and body text; validation of the
//! descriptor itself is left to the resolver.

// ============================================================================
// SECTION: Imports
// ============================================================================

use async_trait::async_trait;
use pokedex_core::CanonicalKey;
use pokedex_core::SpeciesDescriptor;
use pokedex_core::SpeciesProvider;
use pokedex_core::UpstreamError;
use reqwest::Client;
use tracing::debug;

use crate::client::HttpClientConfig;
use crate::client::ProviderBuildError;
use crate::client::build_client;
use crate::client::normalize_base_url;
use crate::client::read_body_limited;
use crate::client::status_error;
use crate::client::transport_error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default species provider base URL.
pub const DEFAULT_SPECIES_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Path segment for species resources.
const SPECIES_PATH: &str = "pokemon-species";

// ============================================================================
// SECTION: Provider
// ============================================================================

/// Species provider backed by a PokeAPI-compatible HTTP endpoint.
pub struct PokeApiSpeciesProvider {
    /// HTTP client used for outbound requests.
    client: Client,
    /// Base URL without a trailing slash.
    base_url: String,
    /// Maximum response size, in bytes.
    max_response_bytes: usize,
}

impl PokeApiSpeciesProvider {
    /// Creates a species provider.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderBuildError`] when the base URL is invalid or the
    /// client cannot be constructed.
    pub fn new(config: &HttpClientConfig) -> Result<Self, ProviderBuildError> {
        Ok(Self {
            client: build_client(config)?,
            base_url: normalize_base_url(&config.base_url)?,
            max_response_bytes: config.max_response_bytes,
        })
    }

    /// Returns the descriptor URL for a key.
    fn species_url(&self, key: &CanonicalKey) -> String {
        format!("{}/{SPECIES_PATH}/{key}", self.base_url)
    }
}

#[async_trait]
impl SpeciesProvider for PokeApiSpeciesProvider {
    async fn fetch_species(&self, key: &CanonicalKey) -> Result<SpeciesDescriptor, UpstreamError> {
        // An empty slug would address the species listing instead of a species.
        if key.is_empty() {
            return Err(UpstreamError::new(Some(404), "Not Found"));
        }
        let url = self.species_url(key);
        debug!(key = %key, url = %url, "fetching species descriptor");
        let response = self.client.get(&url).send().await.map_err(|err| transport_error(&err))?;
        let status = response.status();
        let body = read_body_limited(response, self.max_response_bytes).await?;
        if !status.is_success() {
            return Err(status_error(status, &body));
        }
        serde_json::from_slice(&body).map_err(|err| {
            UpstreamError::new(None, format!("invalid species descriptor: {err}"))
        })
    }
}
