// crates/pokedex-providers/src/client.rs
// ============================================================================
// Module: HTTP Client Plumbing
// Description: Shared client construction and bounded response reading.
// Purpose: Give both providers the same timeout, user agent, and size limits.
// Dependencies: pokedex-core, reqwest, thiserror
// ============================================================================

//! ## Overview
//! Each provider owns one [`reqwest::Client`] built from an
//! [`HttpClientConfig`]. Redirects are not followed and response bodies are
//! read in chunks against a hard byte limit.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use pokedex_core::UpstreamError;
use reqwest::Client;
use reqwest::Response;
use reqwest::StatusCode;
use reqwest::redirect::Policy;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;
/// Default maximum response size, in bytes.
pub const DEFAULT_MAX_RESPONSE_BYTES: usize = 1024 * 1024;
/// Default outbound user agent.
pub const DEFAULT_USER_AGENT: &str = "pokedex/0.1";
/// Message reported when an upstream body exceeds the size limit.
pub const OVERSIZED_BODY_MESSAGE: &str = "upstream response exceeds size limit";

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Outbound HTTP client settings for one provider.
///
/// # Invariants
/// - `timeout_ms` applies to the full request lifecycle.
/// - `max_response_bytes` is a hard upper bound on response bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Provider base URL; a trailing slash is ignored.
    pub base_url: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// User agent string for outbound requests.
    pub user_agent: String,
    /// Maximum response size allowed, in bytes.
    pub max_response_bytes: usize,
}

impl HttpClientConfig {
    /// Creates settings for `base_url` with default limits.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
        }
    }
}

/// Provider construction errors.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// Base URL is empty or not http(s).
    #[error("invalid provider base url: {0}")]
    InvalidBaseUrl(String),
    /// Client could not be constructed.
    #[error("http client build failed: {0}")]
    Client(String),
}

// ============================================================================
// SECTION: Client Construction
// ============================================================================

/// Builds the HTTP client for a provider.
///
/// # Errors
///
/// Returns [`ProviderBuildError`] when the client cannot be constructed.
pub(crate) fn build_client(config: &HttpClientConfig) -> Result<Client, ProviderBuildError> {
    Client::builder()
        .timeout(Duration::from_millis(config.timeout_ms))
        .redirect(Policy::none())
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(|err| ProviderBuildError::Client(err.to_string()))
}

/// Validates a base URL and strips trailing slashes.
///
/// # Errors
///
/// Returns [`ProviderBuildError::InvalidBaseUrl`] for empty or non-http(s) URLs.
pub(crate) fn normalize_base_url(raw: &str) -> Result<String, ProviderBuildError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ProviderBuildError::InvalidBaseUrl(raw.to_string()));
    }
    Ok(trimmed.to_string())
}

// ============================================================================
// SECTION: Response Helpers
// ============================================================================

/// Maps a transport failure to an upstream error.
pub(crate) fn transport_error(err: &reqwest::Error) -> UpstreamError {
    UpstreamError::new(err.status().map(|status| status.as_u16()), err.to_string())
}

/// Reads a response body while enforcing a hard byte limit.
///
/// # Errors
///
/// Returns [`UpstreamError`] when the body cannot be read or exceeds `limit`.
/// An oversized body carries no status, whatever the response status was.
pub(crate) async fn read_body_limited(
    mut response: Response,
    limit: usize,
) -> Result<Vec<u8>, UpstreamError> {
    if let Some(expected) = response.content_length()
        && expected > u64::try_from(limit).unwrap_or(u64::MAX)
    {
        return Err(oversized_body());
    }
    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await.map_err(|err| transport_error(&err))? {
        if body.len().saturating_add(chunk.len()) > limit {
            return Err(oversized_body());
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

/// Error for a body larger than the configured limit.
fn oversized_body() -> UpstreamError {
    UpstreamError::new(None, OVERSIZED_BODY_MESSAGE)
}

/// Builds the error for a non-success status from its raw body.
pub(crate) fn status_error(status: StatusCode, body: &[u8]) -> UpstreamError {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    let message = if text.is_empty() {
        status.canonical_reason().unwrap_or("upstream request failed").to_string()
    } else {
        text.to_string()
    };
    UpstreamError::new(Some(status.as_u16()), message)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
