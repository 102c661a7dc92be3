// crates/pokedex-providers/src/translation.rs
// ============================================================================
// Module: Translation Provider
// Description: HTTP stylistic translation provider.
// Purpose: Request Yoda or Shakespeare renderings from a FunTranslations host.
// Dependencies: pokedex-core, reqwest, serde, serde_json, tracing
// ============================================================================

//! ## Overview
//! [`FunTranslationsProvider`] posts the text as a form field to the endpoint
//! named after the style. Failures carry the provider's own error code and
//! message when the body has the documented error shape, and the HTTP status
//! plus raw body otherwise.

// ============================================================================
// SECTION: Imports
// ============================================================================

use async_trait::async_trait;
use pokedex_core::TranslationProvider;
use pokedex_core::TranslationResponse;
use pokedex_core::TranslationStyle;
use pokedex_core::UpstreamError;
use reqwest::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::client::HttpClientConfig;
use crate::client::ProviderBuildError;
use crate::client::build_client;
use crate::client::normalize_base_url;
use crate::client::read_body_limited;
use crate::client::status_error;
use crate::client::transport_error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default translation provider base URL.
pub const DEFAULT_TRANSLATION_BASE_URL: &str = "https://api.funtranslations.com/translate";

/// Header carrying the optional API secret.
pub const API_SECRET_HEADER: &str = "X-Funtranslations-Api-Secret";

/// Form field holding the text to translate.
const TEXT_FIELD: &str = "text";

// ============================================================================
// SECTION: Error Body
// ============================================================================

/// Error envelope returned by the translation provider.
#[derive(Debug, Deserialize)]
pub struct TranslationErrorBody {
    /// Error details.
    pub error: TranslationErrorDetail,
}

/// Error details inside [`TranslationErrorBody`].
#[derive(Debug, Deserialize)]
pub struct TranslationErrorDetail {
    /// Provider error code; mirrors the HTTP status in practice.
    pub code: u16,
    /// Provider error message.
    pub message: String,
}

// ============================================================================
// SECTION: Provider
// ============================================================================

/// Translation provider backed by a FunTranslations-compatible endpoint.
pub struct FunTranslationsProvider {
    /// HTTP client used for outbound requests.
    client: Client,
    /// Base URL without a trailing slash.
    base_url: String,
    /// Optional API secret.
    api_key: Option<String>,
    /// Maximum response size, in bytes.
    max_response_bytes: usize,
}

impl FunTranslationsProvider {
    /// Creates a translation provider.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderBuildError`] when the base URL is invalid or the
    /// client cannot be constructed.
    pub fn new(
        config: &HttpClientConfig,
        api_key: Option<String>,
    ) -> Result<Self, ProviderBuildError> {
        Ok(Self {
            client: build_client(config)?,
            base_url: normalize_base_url(&config.base_url)?,
            api_key: api_key.filter(|key| !key.is_empty()),
            max_response_bytes: config.max_response_bytes,
        })
    }
}

impl std::fmt::Debug for FunTranslationsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunTranslationsProvider")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("max_response_bytes", &self.max_response_bytes)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TranslationProvider for FunTranslationsProvider {
    async fn translate(
        &self,
        text: &str,
        style: TranslationStyle,
    ) -> Result<TranslationResponse, UpstreamError> {
        let url = format!("{}/{style}", self.base_url);
        debug!(style = %style, url = %url, "requesting translation");
        let mut request = self.client.post(&url).form(&[(TEXT_FIELD, text)]);
        if let Some(key) = &self.api_key {
            request = request.header(API_SECRET_HEADER, key);
        }
        let response = request.send().await.map_err(|err| transport_error(&err))?;
        let status = response.status();
        let body = read_body_limited(response, self.max_response_bytes).await?;
        if !status.is_success() {
            return Err(provider_error(status, &body));
        }
        serde_json::from_slice(&body).map_err(|err| {
            UpstreamError::new(None, format!("invalid translation response: {err}"))
        })
    }
}

/// Maps a non-success response to an upstream error.
fn provider_error(status: StatusCode, body: &[u8]) -> UpstreamError {
    match serde_json::from_slice::<TranslationErrorBody>(body) {
        Ok(parsed) => UpstreamError::new(Some(parsed.error.code), parsed.error.message),
        Err(_) => status_error(status, body),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
