// crates/pokedex-cli/src/main.rs
// ============================================================================
// Module: Pokedex CLI Entry Point
// Description: Command dispatcher for the Pokedex server and one-shot lookups.
// Purpose: Run the HTTP service or resolve names from the command line.
// Dependencies: clap, pokedex-config, pokedex-core, pokedex-server, serde_json, tokio
// ============================================================================

//! ## Overview
//! `pokedex serve` starts the HTTP service. `pokedex lookup` resolves one name
//! through the same service and prints the JSON body the HTTP surface would
//! return. `pokedex normalize` prints the canonical key for a name, and
//! `pokedex example-config` prints a commented configuration file.

// ============================================================================
// SECTION: Modules
// ============================================================================

#[cfg(test)]
mod main_tests;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use pokedex_config::PokedexConfig;
use pokedex_config::config_toml_example;
use pokedex_core::DisplayRecord;
use pokedex_core::ResolveError;
use pokedex_server::ErrorList;
use pokedex_server::PokedexServer;
use pokedex_server::PokedexService;
use pokedex_server::PokemonResponse;
use pokedex_server::init_tracing;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "pokedex", version, disable_help_subcommand = true)]
struct Cli {
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the Pokedex HTTP server.
    Serve(ServeCommand),
    /// Resolve one name and print the response body.
    Lookup(LookupCommand),
    /// Print the canonical key for a name.
    Normalize(NormalizeCommand),
    /// Print an example configuration file.
    ExampleConfig,
}

/// Configuration for the `serve` command.
#[derive(Args, Debug)]
struct ServeCommand {
    /// Optional config file path (defaults to pokedex.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Configuration for the `lookup` command.
#[derive(Args, Debug)]
struct LookupCommand {
    /// Name to resolve.
    #[arg(value_name = "NAME")]
    name: String,
    /// Resolve the translated description instead of the regular one.
    #[arg(long, action = ArgAction::SetTrue)]
    translated: bool,
    /// Optional config file path (defaults to pokedex.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Configuration for the `normalize` command.
#[derive(Args, Debug)]
struct NormalizeCommand {
    /// Name to normalize.
    #[arg(value_name = "NAME")]
    name: String,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`].
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
async fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Serve(command) => command_serve(command).await,
        Commands::Lookup(command) => command_lookup(command).await,
        Commands::Normalize(command) => command_normalize(&command),
        Commands::ExampleConfig => command_example_config(),
    }
}

// ============================================================================
// SECTION: Commands
// ============================================================================

/// Runs the HTTP server until it fails.
async fn command_serve(command: ServeCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config)?;
    init_tracing(&config.logging).map_err(|err| CliError::new(err.to_string()))?;
    let server = PokedexServer::from_config(config)
        .map_err(|err| CliError::new(format!("server init failed: {err}")))?;
    if !server.bind_addr().ip().is_loopback() {
        write_stderr_line(&format!(
            "warning: pokedex is listening on non-loopback address {}",
            server.bind_addr()
        ))
        .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }
    server.serve().await.map_err(|err| CliError::new(format!("server failed: {err}")))?;
    Ok(ExitCode::SUCCESS)
}

/// Resolves one name and prints the JSON body.
async fn command_lookup(command: LookupCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config)?;
    init_tracing(&config.logging).map_err(|err| CliError::new(err.to_string()))?;
    let service = PokedexService::from_config(&config)
        .map_err(|err| CliError::new(format!("service init failed: {err}")))?;
    let result = service.lookup(&command.name, command.translated).await;
    let (body, code) = render_lookup(result)?;
    write_stdout_line(&body).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(code)
}

/// Prints the canonical key for a name.
fn command_normalize(command: &NormalizeCommand) -> CliResult<ExitCode> {
    if command.name.trim().is_empty() {
        return Err(CliError::new(pokedex_core::EMPTY_NAME_MESSAGE.to_string()));
    }
    let key = pokedex_core::normalize(&command.name);
    write_stdout_line(key.as_str()).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Prints the example configuration.
fn command_example_config() -> CliResult<ExitCode> {
    write_stdout_line(config_toml_example().trim_end())
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Loads configuration from an explicit path or the default locations.
fn load_config(path: Option<PathBuf>) -> CliResult<PokedexConfig> {
    PokedexConfig::load(path.as_deref())
        .map_err(|err| CliError::new(format!("failed to load config: {err}")))
}

/// Renders a lookup result as the HTTP body plus a process exit code.
fn render_lookup(result: Result<DisplayRecord, ResolveError>) -> CliResult<(String, ExitCode)> {
    match result {
        Ok(record) => Ok((to_pretty_json(&PokemonResponse::from(record))?, ExitCode::SUCCESS)),
        Err(err) => Ok((to_pretty_json(&ErrorList::from(&err))?, ExitCode::FAILURE)),
    }
}

/// Serializes a value as indented JSON.
fn to_pretty_json<T: Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|err| CliError::new(format!("failed to encode output: {err}")))
}

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write to {stream}: {error}")
}

/// Emits an error message and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
