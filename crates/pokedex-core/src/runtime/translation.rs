// crates/pokedex-core/src/runtime/translation.rs
// ============================================================================
// Module: Translation Resolver
// Description: Best-effort translated resolution layered on the entity resolver.
// Purpose: Serve cached variants, translate on demand, degrade on failure.
// Dependencies: crate::{core, interfaces, runtime}, tracing
// ============================================================================

//! ## Overview
//! [`TranslationResolver::resolve_translated`] runs a fixed sequence of
//! stages. Each stage either finishes the request with a [`DisplayRecord`] or
//! hands its state to the next stage. Hard failures only come from input
//! rejection and base resolution; every translation failure degrades to the
//! regular description and is logged at `warn`.
//!
//! Only the variant chosen by [`TranslationStyle::select`] is ever consulted
//! or produced for an entity.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use tracing::debug;
use tracing::warn;

use crate::core::CanonicalKey;
use crate::core::DescriptionVariant;
use crate::core::DisplayRecord;
use crate::core::EntityRecord;
use crate::core::TranslationResponse;
use crate::core::TranslationStyle;
use crate::core::validate_translation;
use crate::interfaces::EntityCache;
use crate::interfaces::TranslationProvider;
use crate::runtime::cache::SharedEntityCache;
use crate::runtime::entity::EntityResolver;
use crate::runtime::entity::canonical_key_for;
use crate::runtime::error::ResolveError;

// ============================================================================
// SECTION: Stages
// ============================================================================

/// Outcome of one pipeline stage.
enum Stage<T> {
    /// Request is finished with this record.
    Done(DisplayRecord),
    /// Continue with the carried state.
    Continue(T),
}

/// State carried once the base record is known.
struct Base {
    /// Canonical key of the entity.
    key: CanonicalKey,
    /// Cached or freshly resolved record.
    record: EntityRecord,
}

/// State carried once a style has been chosen.
struct Styled {
    /// Base state.
    base: Base,
    /// Style selected by policy.
    style: TranslationStyle,
}

/// Evaluates a stage, returning early when it finishes the request.
macro_rules! advance {
    ($stage:expr) => {
        match $stage {
            Stage::Done(record) => return Ok(record),
            Stage::Continue(state) => state,
        }
    };
}

// ============================================================================
// SECTION: Resolver
// ============================================================================

/// Resolves names into display records carrying a translated description
/// when one can be produced.
#[derive(Clone)]
pub struct TranslationResolver {
    /// Base entity resolver.
    entities: EntityResolver,
    /// Translation provider.
    translator: Arc<dyn TranslationProvider>,
    /// Shared entity cache; the same instance the entity resolver uses.
    cache: SharedEntityCache,
}

impl TranslationResolver {
    /// Creates a translation resolver.
    #[must_use]
    pub fn new(
        entities: EntityResolver,
        translator: Arc<dyn TranslationProvider>,
        cache: SharedEntityCache,
    ) -> Self {
        Self {
            entities,
            translator,
            cache,
        }
    }

    /// Resolves a raw name into a display record with the translated
    /// description, falling back to the regular one on any translation failure.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`EntityResolver::resolve`]; translation
    /// failures are never reported.
    pub async fn resolve_translated(&self, raw_name: &str) -> Result<DisplayRecord, ResolveError> {
        let key = canonical_key_for(raw_name)?;
        let cached = advance!(self.cached_variant(key)?);
        let base = advance!(self.base_record(cached).await?);
        let styled = advance!(Self::select_style(base));
        let (styled, response) = advance!(self.fetch_translation(styled).await);
        let (styled, text) = advance!(Self::check_translation(styled, &response));
        Ok(self.store_translation(styled, text))
    }

    /// Serves the policy-selected variant straight from the cache.
    fn cached_variant(
        &self,
        key: CanonicalKey,
    ) -> Result<Stage<(CanonicalKey, Option<EntityRecord>)>, ResolveError> {
        let Some(record) = self.cache.get(&key)? else {
            return Ok(Stage::Continue((key, None)));
        };
        let style = record.translation_style();
        if let Some(display) = record.display(DescriptionVariant::Translated(style))
            && !display.description.is_empty()
        {
            debug!(key = %key, style = %style, "translated variant cache hit");
            return Ok(Stage::Done(display));
        }
        Ok(Stage::Continue((key, Some(record))))
    }

    /// Uses the cached record as the base, resolving it when absent.
    async fn base_record(
        &self,
        (key, cached): (CanonicalKey, Option<EntityRecord>),
    ) -> Result<Stage<Base>, ResolveError> {
        let record = match cached {
            Some(record) => record,
            None => self.entities.resolve_record(&key).await?,
        };
        Ok(Stage::Continue(Base {
            key,
            record,
        }))
    }

    /// Applies the style policy to the base record.
    fn select_style(base: Base) -> Stage<Styled> {
        let style = base.record.translation_style();
        Stage::Continue(Styled {
            base,
            style,
        })
    }

    /// Requests one translation of the regular description.
    async fn fetch_translation(&self, styled: Styled) -> Stage<(Styled, TranslationResponse)> {
        match self.translator.translate(&styled.base.record.regular, styled.style).await {
            Ok(response) => Stage::Continue((styled, response)),
            Err(err) => {
                warn!(
                    key = %styled.base.key,
                    style = %styled.style,
                    status = ?err.status,
                    reason = %err.message,
                    "translation request failed; returning regular description"
                );
                Stage::Done(styled.base.record.regular_display())
            }
        }
    }

    /// Validates the translation response.
    fn check_translation(
        styled: Styled,
        response: &TranslationResponse,
    ) -> Stage<(Styled, String)> {
        let violations = validate_translation(response);
        match response.translated_text() {
            Some(text) if violations.is_empty() => Stage::Continue((styled, text.to_string())),
            _ => {
                warn!(
                    key = %styled.base.key,
                    style = %styled.style,
                    reason = %violations.join("; "),
                    "translation rejected; returning regular description"
                );
                Stage::Done(styled.base.record.regular_display())
            }
        }
    }

    /// Stores the translated variant and returns the translated view.
    fn store_translation(&self, styled: Styled, text: String) -> DisplayRecord {
        let Styled {
            base,
            style,
        } = styled;
        let variant = DescriptionVariant::Translated(style);
        match self.cache.store_translation(&base.key, style, &text, &base.record) {
            Ok(stored) => match stored.display(variant) {
                Some(display) => display,
                None => translated_view(&base.record, text),
            },
            Err(err) => {
                warn!(
                    key = %base.key,
                    style = %style,
                    reason = %err,
                    "translated variant not cached"
                );
                translated_view(&base.record, text)
            }
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds a view of `record` carrying `text` as its description.
fn translated_view(record: &EntityRecord, text: String) -> DisplayRecord {
    let mut display = record.regular_display();
    display.description = text;
    display
}
