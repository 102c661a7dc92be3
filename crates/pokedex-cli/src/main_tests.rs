// crates/pokedex-cli/src/main_tests.rs
// ============================================================================
// Module: CLI Main Helpers Tests
// Description: Unit tests for argument parsing and lookup rendering.
// Purpose: Keep the command surface and printed bodies stable.
// Dependencies: pokedex-cli main helpers
// ============================================================================

//! ## Overview
//! Parses representative command lines and checks that lookup output matches
//! the HTTP body shapes.

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

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pokedex_core::DisplayRecord;
use pokedex_core::ResolveError;
use serde_json::Value;
use serde_json::json;

use super::Cli;
use super::Commands;
use super::render_lookup;

// ============================================================================
// SECTION: Parsing Tests
// ============================================================================

#[test]
fn lookup_parses_flags() {
    let cli = Cli::try_parse_from([
        "pokedex",
        "lookup",
        "Mime Jr.",
        "--translated",
        "--config",
        "custom.toml",
    ])
    .unwrap();
    let Commands::Lookup(command) = cli.command else {
        panic!("expected lookup command");
    };
    assert_eq!(command.name, "Mime Jr.");
    assert!(command.translated);
    assert_eq!(command.config, Some(PathBuf::from("custom.toml")));
}

#[test]
fn lookup_defaults_to_regular_description() {
    let cli = Cli::try_parse_from(["pokedex", "lookup", "mewtwo"]).unwrap();
    let Commands::Lookup(command) = cli.command else {
        panic!("expected lookup command");
    };
    assert!(!command.translated);
    assert!(command.config.is_none());
}

#[test]
fn serve_accepts_config_path() {
    let cli = Cli::try_parse_from(["pokedex", "serve", "--config", "pokedex.toml"]).unwrap();
    let Commands::Serve(command) = cli.command else {
        panic!("expected serve command");
    };
    assert_eq!(command.config, Some(PathBuf::from("pokedex.toml")));
}

#[test]
fn example_config_is_kebab_case() {
    let cli = Cli::try_parse_from(["pokedex", "example-config"]).unwrap();
    assert!(matches!(cli.command, Commands::ExampleConfig));
}

#[test]
fn missing_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["pokedex"]).is_err());
}

// ============================================================================
// SECTION: Rendering Tests
// ============================================================================

#[test]
fn successful_lookup_prints_record() {
    let record = DisplayRecord {
        name: "mewtwo".to_string(),
        description: "It was created.".to_string(),
        is_legendary: true,
        habitat: "rare".to_string(),
    };

    let (body, code) = render_lookup(Ok(record)).unwrap();

    assert_eq!(code, ExitCode::SUCCESS);
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "mewtwo",
            "description": "It was created.",
            "is_legendary": true,
            "habitat": "rare",
        })
    );
}

#[test]
fn failed_lookup_prints_error_list() {
    let (body, code) = render_lookup(Err(ResolveError::empty_name())).unwrap();

    assert_eq!(code, ExitCode::FAILURE);
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value, json!({"error_list": [{"error_message": "Pokemon name cannot be empty"}]}));
}
