//! Aggregate statistics over the full estimate history.

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::analytics::accuracy::{classify, RangeAccuracy};
use crate::analytics::stats_model::{AccuracyTally, SummaryStats};
use crate::constants::CURRENCY_SYMBOL;
use crate::errors::Result;
use crate::history::{EstimateRecord, HistoryRepositoryTrait};
use crate::money::{parse_amount, parse_range};

/// Fold the record sequence into summary metrics.
///
/// Only resolved records with a parseable actual price and range contribute
/// to profit and the sold/bought split; unresolved or unparseable records
/// still count toward `total_items`. The sold/bought split follows the
/// profit sign (positive delta counts as sold), a display heuristic rather
/// than the recorded transaction type.
pub fn summarize(records: &[EstimateRecord]) -> SummaryStats {
    let mut total_profit = Decimal::ZERO;
    let mut items_sold = 0;
    let mut items_bought = 0;

    for record in records {
        let Some(delta) = resolved_delta(record) else {
            continue;
        };
        total_profit += delta;
        if delta > Decimal::ZERO {
            items_sold += 1;
        } else {
            items_bought += 1;
        }
    }

    SummaryStats {
        total_items: records.len(),
        total_profit: total_profit
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .unwrap_or(0),
        items_sold,
        items_bought,
        currency: CURRENCY_SYMBOL.to_string(),
    }
}

/// Run the accuracy classifier over every resolved record.
pub fn tally_accuracy(records: &[EstimateRecord]) -> AccuracyTally {
    let mut tally = AccuracyTally::default();
    for record in records {
        if !record.is_resolved() {
            continue;
        }
        let Some(actual) = parse_amount(&record.actual_price) else {
            continue;
        };
        match classify(&record.ai_price_range, actual) {
            Some(RangeAccuracy::WithinRange) => tally.within_range += 1,
            Some(RangeAccuracy::AboveRange) => tally.above_range += 1,
            Some(RangeAccuracy::BelowRange) => tally.below_range += 1,
            None => {}
        }
    }
    tally
}

/// Full-precision (actual - midpoint) delta, `None` for unresolved or
/// unparseable records.
fn resolved_delta(record: &EstimateRecord) -> Option<Decimal> {
    if !record.is_resolved() {
        return None;
    }
    let actual = parse_amount(&record.actual_price)?;
    let (min, max) = parse_range(&record.ai_price_range)?;
    let midpoint = (Decimal::from(min) + Decimal::from(max)) / dec!(2);
    Some(Decimal::from(actual) - midpoint)
}

/// Trait for statistics over the persisted history.
#[async_trait]
pub trait StatsServiceTrait: Send + Sync {
    fn summary(&self) -> Result<SummaryStats>;
    fn accuracy(&self) -> Result<AccuracyTally>;
}

pub struct StatsService {
    history_repository: Arc<dyn HistoryRepositoryTrait>,
}

impl StatsService {
    pub fn new(history_repository: Arc<dyn HistoryRepositoryTrait>) -> Self {
        StatsService { history_repository }
    }
}

#[async_trait]
impl StatsServiceTrait for StatsService {
    fn summary(&self) -> Result<SummaryStats> {
        Ok(summarize(&self.history_repository.load_all()?))
    }

    fn accuracy(&self) -> Result<AccuracyTally> {
        Ok(tally_accuracy(&self.history_repository.load_all()?))
    }
}
