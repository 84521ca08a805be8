//! Accuracy classification of resolved records against their AI range.

use serde::{Deserialize, Serialize};

use crate::money::parse_range;

/// Where an actual price landed relative to the AI-suggested range.
///
/// The three buckets partition `[0, ∞)`: both bounds are inclusive-within.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RangeAccuracy {
    WithinRange,
    AboveRange,
    BelowRange,
}

/// Classify an actual price against an AI range string.
///
/// Returns `None` when the range is unparseable; such records are excluded
/// from every accuracy bucket.
pub fn classify(ai_price_range: &str, actual_price: i64) -> Option<RangeAccuracy> {
    let (min, max) = parse_range(ai_price_range)?;
    Some(if actual_price >= min && actual_price <= max {
        RangeAccuracy::WithinRange
    } else if actual_price > max {
        RangeAccuracy::AboveRange
    } else {
        RangeAccuracy::BelowRange
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANGE: &str = "₦1,000 - ₦2,000";

    #[test]
    fn bounds_are_inclusive_within() {
        assert_eq!(classify(RANGE, 1_000), Some(RangeAccuracy::WithinRange));
        assert_eq!(classify(RANGE, 2_000), Some(RangeAccuracy::WithinRange));
        assert_eq!(classify(RANGE, 1_800), Some(RangeAccuracy::WithinRange));
    }

    #[test]
    fn outside_the_range() {
        assert_eq!(classify(RANGE, 2_001), Some(RangeAccuracy::AboveRange));
        assert_eq!(classify(RANGE, 2_500), Some(RangeAccuracy::AboveRange));
        assert_eq!(classify(RANGE, 999), Some(RangeAccuracy::BelowRange));
        assert_eq!(classify(RANGE, 0), Some(RangeAccuracy::BelowRange));
    }

    #[test]
    fn unparseable_range_is_excluded() {
        assert_eq!(classify("corrupt", 1_500), None);
    }
}
