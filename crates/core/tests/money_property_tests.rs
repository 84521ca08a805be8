//! Property-based tests for money parsing and range classification.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use worthai_core::analytics::{classify, compute_profit, RangeAccuracy};
use worthai_core::history::ProfitTone;
use worthai_core::money::{format_amount, parse_amount, parse_range};

// =============================================================================
// Generators
// =============================================================================

/// Generates an ordered (min, max) pair of non-negative amounts.
fn arb_range() -> impl Strategy<Value = (i64, i64)> {
    (0i64..10_000_000, 0i64..10_000_000)
        .prop_map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
}

fn formatted_range(min: i64, max: i64) -> String {
    format!(
        "{} - {}",
        format_amount(min, "₦"),
        format_amount(max, "₦")
    )
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    /// Formatting an amount and parsing it back recovers the value exactly.
    #[test]
    fn format_parse_round_trip(n in 0i64..1_000_000_000_000) {
        prop_assert_eq!(parse_amount(&format_amount(n, "₦")), Some(n));
    }

    /// Formatting is stable under a full parse/format cycle.
    #[test]
    fn format_is_idempotent(n in 0i64..1_000_000_000_000) {
        let formatted = format_amount(n, "₦");
        let reparsed = parse_amount(&formatted).unwrap();
        prop_assert_eq!(format_amount(reparsed, "₦"), formatted);
    }

    /// Well-formed range strings parse to their exact bounds.
    #[test]
    fn range_round_trip((min, max) in arb_range()) {
        prop_assert_eq!(parse_range(&formatted_range(min, max)), Some((min, max)));
    }

    /// The three accuracy buckets are a disjoint partition of [0, ∞),
    /// with both bounds classifying as within-range.
    #[test]
    fn classification_partitions_the_axis((min, max) in arb_range(), actual in 0i64..20_000_000) {
        let range = formatted_range(min, max);
        let bucket = classify(&range, actual).unwrap();
        let expected = if actual >= min && actual <= max {
            RangeAccuracy::WithinRange
        } else if actual > max {
            RangeAccuracy::AboveRange
        } else {
            RangeAccuracy::BelowRange
        };
        prop_assert_eq!(bucket, expected);
    }

    /// Range bounds themselves always classify as within-range.
    #[test]
    fn bounds_classify_within((min, max) in arb_range()) {
        let range = formatted_range(min, max);
        prop_assert_eq!(classify(&range, min), Some(RangeAccuracy::WithinRange));
        prop_assert_eq!(classify(&range, max), Some(RangeAccuracy::WithinRange));
    }

    /// Profit sign, display prefix, and tone always agree.
    #[test]
    fn profit_sign_and_tone_are_consistent((min, max) in arb_range(), actual in 0i64..20_000_000) {
        let outcome = compute_profit(&formatted_range(min, max), actual).unwrap();
        match outcome.tone {
            ProfitTone::Gain => {
                prop_assert!(outcome.signed_amount > Decimal::ZERO);
                prop_assert!(outcome.display.starts_with('+'));
            }
            ProfitTone::Loss => {
                prop_assert!(outcome.signed_amount < Decimal::ZERO);
                prop_assert!(outcome.display.starts_with('-'));
            }
            ProfitTone::Neutral => {
                prop_assert!(outcome.signed_amount.is_zero());
                prop_assert!(outcome.display.starts_with('₦'));
            }
        }
    }
}
