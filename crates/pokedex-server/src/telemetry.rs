// crates/pokedex-server/src/telemetry.rs
// ============================================================================
// Module: Telemetry
// Description: Tracing subscriber setup and per-request logging.
// Purpose: Emit structured logs for every request and process event.
// Dependencies: axum, pokedex-config, tracing, tracing-subscriber
// ============================================================================

//! ## Overview
//! [`init_tracing`] installs a global subscriber once per process. The filter
//! comes from `RUST_LOG` when set and from configuration otherwise. Logs go to
//! stderr so command output on stdout stays machine-readable.
//! [`log_requests`] is an axum middleware that records method, path, status,
//! and latency for each request.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use pokedex_config::LogFormat;
use pokedex_config::LoggingConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::server::ServerError;

// ============================================================================
// SECTION: Subscriber
// ============================================================================

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns [`ServerError::Config`] when the filter directive is invalid and
/// [`ServerError::Init`] when a subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), ServerError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.filter)
            .map_err(|err| ServerError::Config(format!("invalid logging.filter: {err}")))?,
    };
    let registry = tracing_subscriber::registry().with(filter);
    let installed = match config.format {
        LogFormat::Text => registry.with(fmt::layer().with_writer(std::io::stderr)).try_init(),
        LogFormat::Json => {
            registry.with(fmt::layer().json().with_writer(std::io::stderr)).try_init()
        }
    };
    installed.map_err(|err| ServerError::Init(format!("tracing init failed: {err}")))
}

// ============================================================================
// SECTION: Request Logging
// ============================================================================

/// Logs one line per request after the response is produced.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();
    let response = next.run(request).await;
    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        latency_ms,
        "request completed"
    );
    response
}
