// crates/pokedex-config/src/lib.rs
// ============================================================================
// Module: Pokedex Config Library
// Description: Canonical config model, validation, and example generation.
// Purpose: Single source of truth for pokedex.toml semantics.
// Dependencies: serde, toml
// ============================================================================

//! ## Overview
//! `pokedex-config` defines the configuration model for the Pokedex service.
//! It provides strict, fail-closed validation and a canonical example file.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use examples::config_toml_example;
