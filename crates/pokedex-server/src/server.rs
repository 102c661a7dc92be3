// crates/pokedex-server/src/server.rs
// ============================================================================
// Module: Pokedex Server
// Description: HTTP endpoint layer and service wiring for the Pokedex resolvers.
// Purpose: Expose regular and translated lookups over HTTP.
// Dependencies: pokedex-core, pokedex-config, pokedex-providers, axum, tokio
// ============================================================================

//! ## Overview
//! [`PokedexService`] owns both resolvers over one shared cache and applies
//! the inbound name-length guard. [`PokedexServer`] binds a listener and
//! routes requests to the service. Handlers translate resolver failures into
//! an error list with the status chosen by [`ResolveError::status_code`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::middleware;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use pokedex_config::PokedexConfig;
use pokedex_config::UpstreamConfig;
use pokedex_core::DisplayRecord;
use pokedex_core::EntityResolver;
use pokedex_core::InMemoryEntityCache;
use pokedex_core::ResolveError;
use pokedex_core::SharedEntityCache;
use pokedex_core::SpeciesProvider;
use pokedex_core::TranslationProvider;
use pokedex_core::TranslationResolver;
use pokedex_providers::FunTranslationsProvider;
use pokedex_providers::HttpClientConfig;
use pokedex_providers::PokeApiSpeciesProvider;
use serde_json::Value;
use serde_json::json;
use thiserror::Error;
use tracing::info;

use crate::telemetry::log_requests;
use crate::wire::ErrorList;
use crate::wire::PokemonResponse;

// ============================================================================
// SECTION: Service
// ============================================================================

/// Resolver pair plus inbound limits.
#[derive(Clone)]
pub struct PokedexService {
    /// Regular resolver.
    entities: EntityResolver,
    /// Translated resolver sharing the regular resolver's cache.
    translations: TranslationResolver,
    /// Longest accepted name, in characters.
    max_name_length: usize,
}

impl PokedexService {
    /// Wires both resolvers over a shared cache.
    #[must_use]
    pub fn new(
        species: Arc<dyn SpeciesProvider>,
        translator: Arc<dyn TranslationProvider>,
        cache: SharedEntityCache,
        max_name_length: usize,
    ) -> Self {
        let entities = EntityResolver::new(species, cache.clone());
        let translations = TranslationResolver::new(entities.clone(), translator, cache);
        Self {
            entities,
            translations,
            max_name_length,
        }
    }

    /// Builds HTTP providers and an in-memory cache from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Init`] when a provider cannot be constructed.
    pub fn from_config(config: &PokedexConfig) -> Result<Self, ServerError> {
        let species = PokeApiSpeciesProvider::new(&client_config(&config.species))
            .map_err(|err| ServerError::Init(format!("species provider: {err}")))?;
        let translator = FunTranslationsProvider::new(
            &client_config(&config.translation.upstream()),
            config.translation.api_key.clone(),
        )
        .map_err(|err| ServerError::Init(format!("translation provider: {err}")))?;
        let cache = SharedEntityCache::from_cache(InMemoryEntityCache::new());
        Ok(Self::new(
            Arc::new(species),
            Arc::new(translator),
            cache,
            config.server.max_name_length,
        ))
    }

    /// Resolves one name, optionally translated.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidInput`] for names longer than the
    /// configured limit, and otherwise whatever the resolver reports.
    pub async fn lookup(
        &self,
        name: &str,
        translated: bool,
    ) -> Result<DisplayRecord, ResolveError> {
        if name.chars().count() > self.max_name_length {
            return Err(ResolveError::InvalidInput(vec![format!(
                "Pokemon name cannot exceed {} characters",
                self.max_name_length
            )]));
        }
        if translated {
            self.translations.resolve_translated(name).await
        } else {
            self.entities.resolve(name).await
        }
    }

    /// Builds the HTTP router for this service.
    pub fn router(self) -> Router {
        Router::new()
            .route("/pokemon/{name}", get(handle_pokemon))
            .route("/pokemon/translated/{name}", get(handle_translated))
            .route("/health", get(handle_health))
            .layer(middleware::from_fn(log_requests))
            .with_state(Arc::new(self))
    }
}

/// Maps an upstream config section onto provider client settings.
fn client_config(upstream: &UpstreamConfig) -> HttpClientConfig {
    HttpClientConfig {
        base_url: upstream.base_url.clone(),
        timeout_ms: upstream.timeout_ms,
        user_agent: upstream.user_agent.clone(),
        max_response_bytes: upstream.max_response_bytes,
    }
}

// ============================================================================
// SECTION: Server
// ============================================================================

/// Pokedex HTTP server instance.
pub struct PokedexServer {
    /// Listen address.
    bind: SocketAddr,
    /// Request-handling service.
    service: PokedexService,
}

impl PokedexServer {
    /// Builds a server from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] when configuration is invalid or initialization
    /// fails.
    pub fn from_config(mut config: PokedexConfig) -> Result<Self, ServerError> {
        config.validate().map_err(|err| ServerError::Config(err.to_string()))?;
        let bind = config.server.bind_addr().map_err(|err| ServerError::Config(err.to_string()))?;
        let service = PokedexService::from_config(&config)?;
        Ok(Self {
            bind,
            service,
        })
    }

    /// Returns the configured listen address.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind
    }

    /// Binds the listener and serves requests until the server fails.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Transport`] when binding or serving fails.
    pub async fn serve(self) -> Result<(), ServerError> {
        let listener = tokio::net::TcpListener::bind(self.bind)
            .await
            .map_err(|err| ServerError::Transport(format!("http bind failed: {err}")))?;
        info!(bind = %self.bind, "pokedex server listening");
        axum::serve(listener, self.service.router())
            .await
            .map_err(|err| ServerError::Transport(format!("http server failed: {err}")))
    }
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// Handles `GET /pokemon/{name}`.
async fn handle_pokemon(
    State(service): State<Arc<PokedexService>>,
    Path(name): Path<String>,
) -> Response {
    respond(service.lookup(&name, false).await)
}

/// Handles `GET /pokemon/translated/{name}`.
async fn handle_translated(
    State(service): State<Arc<PokedexService>>,
    Path(name): Path<String>,
) -> Response {
    respond(service.lookup(&name, true).await)
}

/// Handles `GET /health`.
async fn handle_health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

/// Converts a resolver result into an HTTP response.
fn respond(result: Result<DisplayRecord, ResolveError>) -> Response {
    match result {
        Ok(record) => (StatusCode::OK, Json(PokemonResponse::from(record))).into_response(),
        Err(err) => {
            let status = StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(ErrorList::from(&err))).into_response()
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Pokedex server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration errors.
    #[error("config error: {0}")]
    Config(String),
    /// Initialization failures.
    #[error("init error: {0}")]
    Init(String),
    /// Transport errors.
    #[error("transport error: {0}")]
    Transport(String),
}

// ============================================================================
// SECTION: Tests
// ============================================================================
