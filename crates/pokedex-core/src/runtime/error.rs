// crates/pokedex-core/src/runtime/error.rs
// ============================================================================
// Module: Resolution Errors
// Description: Hard-failure taxonomy for the Pokedex resolvers.
// Purpose: Carry status classification and message lists to callers.
// Dependencies: crate::interfaces, thiserror
// ============================================================================

//! ## Overview
//! [`ResolveError`] covers every hard failure a resolver can report. Each
//! variant maps to an HTTP-style status code and a list of human-readable
//! messages so multi-violation validation results survive to the caller.
//! Translation failures never appear here; they degrade to the regular
//! description instead.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::interfaces::CacheError;
use crate::interfaces::UpstreamError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Message reported when the requested name is blank.
pub const EMPTY_NAME_MESSAGE: &str = "Pokemon name cannot be empty";

/// Status for client-input errors.
const STATUS_BAD_REQUEST: u16 = 400;
/// Status for descriptors that fail validation.
const STATUS_NOT_FOUND: u16 = 404;
/// Status when no upstream status is available.
const STATUS_INTERNAL: u16 = 500;

// ============================================================================
// SECTION: Error Type
// ============================================================================

/// Resolver hard failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Requested name was rejected before any lookup.
    #[error("invalid input: {}", .0.join("; "))]
    InvalidInput(Vec<String>),
    /// Upstream descriptor failed validation.
    #[error("not found: {}", .0.join("; "))]
    NotFound(Vec<String>),
    /// Upstream provider could not be reached or rejected the request.
    #[error("upstream error: {message}")]
    Upstream {
        /// Upstream status, when one was received.
        status: Option<u16>,
        /// Transport error message.
        message: String,
    },
    /// Entity cache could not complete an operation.
    #[error("cache error: {0}")]
    Cache(String),
}

impl ResolveError {
    /// Builds the blank-name rejection.
    #[must_use]
    pub fn empty_name() -> Self {
        Self::InvalidInput(vec![EMPTY_NAME_MESSAGE.to_string()])
    }

    /// Returns the HTTP-style status code for this failure.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => STATUS_BAD_REQUEST,
            Self::NotFound(_) => STATUS_NOT_FOUND,
            Self::Upstream {
                status, ..
            } => status.unwrap_or(STATUS_INTERNAL),
            Self::Cache(_) => STATUS_INTERNAL,
        }
    }

    /// Returns the failure as a list of messages.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::InvalidInput(messages) | Self::NotFound(messages) => messages.clone(),
            Self::Upstream {
                message, ..
            } => vec![message.clone()],
            Self::Cache(message) => vec![message.clone()],
        }
    }
}

impl From<UpstreamError> for ResolveError {
    fn from(err: UpstreamError) -> Self {
        Self::Upstream {
            status: err.status,
            message: err.message,
        }
    }
}

impl From<CacheError> for ResolveError {
    fn from(err: CacheError) -> Self {
        Self::Cache(err.to_string())
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::ResolveError;
    use crate::interfaces::UpstreamError;

    #[test]
    fn upstream_without_status_is_server_error() {
        let err = ResolveError::from(UpstreamError::new(None, "connection reset"));
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.messages(), vec!["connection reset".to_string()]);
    }

    #[test]
    fn upstream_status_is_preserved() {
        let err = ResolveError::from(UpstreamError::new(Some(417), "i'm a teapot"));
        assert_eq!(err.status_code(), 417);
    }

    #[test]
    fn validation_failures_keep_every_message() {
        let err = ResolveError::NotFound(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.messages().len(), 2);
        assert_eq!(err.to_string(), "not found: a; b");
    }

    #[test]
    fn empty_name_is_client_error() {
        let err = ResolveError::empty_name();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.messages(), vec!["Pokemon name cannot be empty".to_string()]);
    }
}
