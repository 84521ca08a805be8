//! Analytics module - profit calculation, accuracy classification, and
//! aggregate statistics over the estimate history.

mod accuracy;
mod profit;
mod stats_model;
mod stats_service;

pub use accuracy::{classify, RangeAccuracy};
pub use profit::{compute_profit, ProfitOutcome};
pub use stats_model::{AccuracyPercentages, AccuracyTally, SummaryStats};
pub use stats_service::{summarize, tally_accuracy, StatsService, StatsServiceTrait};
