// crates/pokedex-server/src/wire.rs
// ============================================================================
// Module: Wire Types
// Description: JSON response bodies for the Pokedex HTTP surface.
// Purpose: Keep the external field names stable and separate from core types.
// Dependencies: pokedex-core, serde
// ============================================================================

//! ## Overview
//! Success bodies carry one display record. Every failure body is an error
//! list, even when only one message is present.

// ============================================================================
// SECTION: Imports
// ============================================================================

use pokedex_core::DisplayRecord;
use pokedex_core::ResolveError;
use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Success Body
// ============================================================================

/// Resolved entity as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonResponse {
    /// Display name.
    pub name: String,
    /// Regular or translated description.
    pub description: String,
    /// Legendary flag.
    pub is_legendary: bool,
    /// Habitat name.
    pub habitat: String,
}

impl From<DisplayRecord> for PokemonResponse {
    fn from(record: DisplayRecord) -> Self {
        Self {
            name: record.name,
            description: record.description,
            is_legendary: record.is_legendary,
            habitat: record.habitat,
        }
    }
}

// ============================================================================
// SECTION: Error Body
// ============================================================================

/// Error list body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorList {
    /// Individual error entries, in the order produced.
    pub error_list: Vec<ErrorEntry>,
}

/// One error entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    /// Human-readable message.
    pub error_message: String,
}

impl ErrorList {
    /// Builds an error list from messages.
    #[must_use]
    pub fn from_messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            error_list: messages
                .into_iter()
                .map(|message| ErrorEntry {
                    error_message: message.into(),
                })
                .collect(),
        }
    }

    /// Returns the messages in order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.error_list.iter().map(|entry| entry.error_message.as_str()).collect()
    }
}

impl From<&ResolveError> for ErrorList {
    fn from(err: &ResolveError) -> Self {
        Self::from_messages(err.messages())
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
