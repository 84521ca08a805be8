//! Profit calculation against the AI-suggested price range.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::CURRENCY_SYMBOL;
use crate::history::ProfitTone;
use crate::money::{format_signed, parse_range};

/// Result of comparing an actual price against a record's AI range.
///
/// The display string and tone are derived from the same signed amount, so
/// they can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfitOutcome {
    /// Actual price minus range midpoint, full precision.
    pub signed_amount: Decimal,
    /// Signed formatted amount, e.g. `"+₦300"` or `"-₦1,200"`.
    pub display: String,
    pub tone: ProfitTone,
}

/// Compute profit/loss of an actual price against an AI range string.
///
/// The midpoint is the unrounded decimal mean of the parsed bounds. Returns
/// `None` when the range is unparseable; the record is then excluded from
/// profit aggregates rather than the failure propagating.
pub fn compute_profit(ai_price_range: &str, actual_price: i64) -> Option<ProfitOutcome> {
    let (min, max) = parse_range(ai_price_range)?;
    let midpoint = (Decimal::from(min) + Decimal::from(max)) / dec!(2);
    let signed_amount = Decimal::from(actual_price) - midpoint;

    let tone = if signed_amount > Decimal::ZERO {
        ProfitTone::Gain
    } else if signed_amount < Decimal::ZERO {
        ProfitTone::Loss
    } else {
        ProfitTone::Neutral
    };

    Some(ProfitOutcome {
        signed_amount,
        display: format_signed(signed_amount, CURRENCY_SYMBOL),
        tone,
    })
}
