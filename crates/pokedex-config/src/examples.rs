// crates/pokedex-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payload.
// Purpose: Deterministic example printed by `pokedex example-config`.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical example for Pokedex configuration. Values match the defaults
//! applied when a section is omitted.

/// Returns a canonical example `pokedex.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"[server]
bind = "127.0.0.1:8080"
max_name_length = 128

[species]
base_url = "https://pokeapi.co/api/v2"
timeout_ms = 5000
user_agent = "pokedex/0.1"
max_response_bytes = 1048576

[translation]
base_url = "https://api.funtranslations.com/translate"
timeout_ms = 5000
user_agent = "pokedex/0.1"
max_response_bytes = 1048576
# api_key = "..."

[logging]
filter = "info"
format = "text"
"#,
    )
}
