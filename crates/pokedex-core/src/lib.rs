// crates/pokedex-core/src/lib.rs
// ============================================================================
// Module: Pokedex Core Library
// Description: Public API surface for the Pokedex resolution core.
// Purpose: Expose domain types, provider interfaces, and resolvers.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Pokedex core resolves a requested creature name into a validated display
//! record, optionally rendered through a stylistic translation. It owns name
//! normalization, upstream schema validation, the per-entity variant cache, and
//! the translation fallback policy. Upstream providers and the cache backend
//! are injected through the traits in [`interfaces`]; nothing in this crate
//! performs network I/O.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use self::core::*;

pub use interfaces::CacheError;
pub use interfaces::EntityCache;
pub use interfaces::SpeciesProvider;
pub use interfaces::TranslationProvider;
pub use interfaces::UpstreamError;
pub use runtime::EMPTY_NAME_MESSAGE;
pub use runtime::EntityResolver;
pub use runtime::InMemoryEntityCache;
pub use runtime::ResolveError;
pub use runtime::SharedEntityCache;
pub use runtime::TranslationResolver;
