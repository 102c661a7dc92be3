// crates/pokedex-core/tests/proptest_normalize.rs
// ============================================================================
// Module: Normalizer Property-Based Tests
// Description: Property tests for canonical key shape and stability.
// Purpose: Detect panics and invariant breaks across arbitrary input.
// ============================================================================

//! Property-based tests for name normalization invariants.

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
    reason = "Test-only assertions and helpers are permitted."
)]

use pokedex_core::normalize;
use proptest::prelude::*;

proptest! {
    #[test]
    fn keys_are_lowercase_ascii_slugs(raw in "\\PC{0,40}") {
        let key = normalize(&raw);
        let slug = key.as_str();
        prop_assert!(
            slug.chars().all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
        );
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
    }

    #[test]
    fn normalization_is_idempotent(raw in "\\PC{0,40}") {
        let once = normalize(&raw);
        let twice = normalize(once.as_str());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn case_and_surrounding_space_do_not_matter(raw in "[A-Za-z0-9 .]{0,24}") {
        let padded = format!("  {}\t", raw.to_uppercase());
        prop_assert_eq!(normalize(&raw), normalize(&padded));
    }
}
