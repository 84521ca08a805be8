//! Statistics domain models.

use serde::{Deserialize, Serialize};

/// Summary metrics over the full history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    /// Number of records, resolved or not.
    pub total_items: usize,
    /// Sum of (actual - midpoint) over resolved records, rounded once at
    /// the end after full-precision summation.
    pub total_profit: i64,
    /// Resolved records with a positive delta (profit-sign heuristic).
    pub items_sold: usize,
    /// Resolved records with a zero or negative delta.
    pub items_bought: usize,
    pub currency: String,
}

/// Counts of resolved records per accuracy bucket.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccuracyTally {
    pub within_range: usize,
    pub above_range: usize,
    pub below_range: usize,
}

/// Rounded percentage share of each accuracy bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccuracyPercentages {
    pub within_range: u8,
    pub above_range: u8,
    pub below_range: u8,
}

impl AccuracyTally {
    pub fn total(&self) -> usize {
        self.within_range + self.above_range + self.below_range
    }

    /// Percentage breakdown, or `None` when no record is resolved — the
    /// accuracy chart is suppressed entirely instead of shown as 0/0/0.
    pub fn percentages(&self) -> Option<AccuracyPercentages> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let percent = |count: usize| ((count as f64 / total as f64) * 100.0).round() as u8;
        Some(AccuracyPercentages {
            within_range: percent(self.within_range),
            above_range: percent(self.above_range),
            below_range: percent(self.below_range),
        })
    }
}
