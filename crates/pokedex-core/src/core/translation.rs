// crates/pokedex-core/src/core/translation.rs
// ============================================================================
// Module: Translation Response
// Description: Wire model and validation for stylistic translation responses.
// Purpose: Decide whether a translation can replace the regular description.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The translation provider answers with a success counter and a content
//! block. [`validate_translation`] checks both; a non-empty result is a soft
//! failure for the caller, which falls back to the untranslated text.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Success counter is absent.
const SUCCESS_MISSING: &str = "No Success Item found";
/// Success counter is zero or negative.
const SUCCESS_NOT_POSITIVE: &str = "Success total is less than 1";
/// Content block is absent.
const CONTENTS_MISSING: &str = "No Translation Content found";
/// Translated text is absent or empty.
const TRANSLATED_EMPTY: &str = "Translation is null or empty";

// ============================================================================
// SECTION: Wire Model
// ============================================================================

/// Translation provider response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResponse {
    /// Success counter.
    #[serde(default)]
    pub success: Option<SuccessCounter>,
    /// Translation content block.
    #[serde(default)]
    pub contents: Option<TranslationContents>,
}

/// Count of successfully translated items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessCounter {
    /// Number of translated items.
    #[serde(default)]
    pub total: i64,
}

/// Translated text plus echo of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationContents {
    /// Translated text.
    #[serde(default)]
    pub translated: Option<String>,
    /// Original text as received by the provider.
    #[serde(default)]
    pub text: Option<String>,
    /// Style reported by the provider.
    #[serde(default)]
    pub translation: Option<String>,
}

impl TranslationResponse {
    /// Builds a successful single-item response.
    #[must_use]
    pub fn translated(text: impl Into<String>, original: impl Into<String>, style: &str) -> Self {
        Self {
            success: Some(SuccessCounter {
                total: 1,
            }),
            contents: Some(TranslationContents {
                translated: Some(text.into()),
                text: Some(original.into()),
                translation: Some(style.to_string()),
            }),
        }
    }

    /// Returns the translated text, if any.
    #[must_use]
    pub fn translated_text(&self) -> Option<&str> {
        self.contents.as_ref().and_then(|contents| contents.translated.as_deref())
    }
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Validates a translation response, returning every violation found.
#[must_use]
pub fn validate_translation(response: &TranslationResponse) -> Vec<&'static str> {
    let mut violations = Vec::new();
    match response.success {
        None => violations.push(SUCCESS_MISSING),
        Some(counter) if counter.total < 1 => violations.push(SUCCESS_NOT_POSITIVE),
        Some(_) => {}
    }
    match &response.contents {
        None => violations.push(CONTENTS_MISSING),
        Some(contents) if contents.translated.as_deref().is_none_or(str::is_empty) => {
            violations.push(TRANSLATED_EMPTY);
        }
        Some(_) => {}
    }
    violations
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only assertions."
    )]

    use serde_json::json;

    use super::SuccessCounter;
    use super::TranslationContents;
    use super::TranslationResponse;
    use super::validate_translation;

    #[test]
    fn translated_response_is_valid() {
        let response = TranslationResponse::translated("Hungry, I am", "I am hungry", "yoda");
        assert!(validate_translation(&response).is_empty());
        assert_eq!(response.translated_text(), Some("Hungry, I am"));
    }

    #[test]
    fn missing_blocks_accumulate() {
        assert_eq!(
            validate_translation(&TranslationResponse::default()),
            vec!["No Success Item found", "No Translation Content found"]
        );
    }

    #[test]
    fn zero_success_and_blank_text_are_rejected() {
        let response = TranslationResponse {
            success: Some(SuccessCounter {
                total: 0,
            }),
            contents: Some(TranslationContents {
                translated: Some(String::new()),
                ..TranslationContents::default()
            }),
        };
        assert_eq!(
            validate_translation(&response),
            vec!["Success total is less than 1", "Translation is null or empty"]
        );
    }

    #[test]
    fn deserializes_provider_payload() {
        let payload = json!({
            "success": {"total": 1},
            "contents": {"translated": "Thee did", "text": "You did", "translation": "shakespeare"}
        });
        let response: TranslationResponse = serde_json::from_value(payload).unwrap();
        assert!(validate_translation(&response).is_empty());
    }
}
