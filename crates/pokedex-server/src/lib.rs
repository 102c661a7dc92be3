// crates/pokedex-server/src/lib.rs
// ============================================================================
// Module: Pokedex Server Library
// Description: HTTP surface, wire types, and telemetry for the Pokedex service.
// Purpose: Wire configuration, providers, and resolvers into a runnable server.
// Dependencies: pokedex-core, pokedex-config, pokedex-providers, axum, tracing
// ============================================================================

//! ## Overview
//! `pokedex-server` exposes `GET /pokemon/{name}`,
//! `GET /pokemon/translated/{name}`, and `GET /health`. All resolution
//! semantics live in `pokedex-core`; this crate only maps requests and
//! failures onto HTTP.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod server;
pub mod telemetry;
pub mod wire;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use server::PokedexServer;
pub use server::PokedexService;
pub use server::ServerError;
pub use telemetry::init_tracing;
pub use wire::ErrorEntry;
pub use wire::ErrorList;
pub use wire::PokemonResponse;
