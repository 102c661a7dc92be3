// crates/pokedex-core/src/runtime/mod.rs
// ============================================================================
// Module: Pokedex Runtime
// Description: Resolvers and the in-memory entity cache.
// Purpose: Orchestrate normalization, caching, upstream fetches, and fallback.
// Dependencies: crate::{core, interfaces}, tracing
// ============================================================================

//! ## Overview
//! The runtime wires the interfaces together. [`EntityResolver`] produces the
//! regular display record; [`TranslationResolver`] layers the best-effort
//! translation pipeline on top of it. Both share one [`SharedEntityCache`].

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod cache;
pub mod entity;
pub mod error;
pub mod translation;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use cache::InMemoryEntityCache;
pub use cache::SharedEntityCache;
pub use entity::EntityResolver;
pub use error::EMPTY_NAME_MESSAGE;
pub use error::ResolveError;
pub use translation::TranslationResolver;
