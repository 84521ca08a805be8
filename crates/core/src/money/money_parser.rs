//! Parsing and formatting of currency-formatted display strings.
//!
//! Records persist prices as display strings (`"₦1,000 - ₦2,500"`), so the
//! aggregation side has to recover numbers from them. Parsing never fails
//! past this boundary: unparseable input yields `None` and the caller skips
//! the record instead of aborting the whole computation.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Separator between the two bounds of a formatted price range.
const RANGE_SEPARATOR: &str = " - ";

/// Extract the numeric value from a currency-formatted string.
///
/// Strips every character that is not a decimal digit and parses the
/// remaining run as a base-10 integer. Returns `None` when no digits remain
/// (or the digit run overflows `i64`).
pub fn parse_amount(input: &str) -> Option<i64> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Split a `"<min> - <max>"` range string into its two numeric bounds.
///
/// Returns `None` when the separator is absent or repeated, or when either
/// side has no digits. Malformed ranges from older stored data are thereby
/// excluded from aggregates rather than crashing them.
pub fn parse_range(input: &str) -> Option<(i64, i64)> {
    let mut parts = input.split(RANGE_SEPARATOR);
    let min = parse_amount(parts.next()?)?;
    let max = parse_amount(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some((min, max))
}

/// Render an amount with thousands grouping, no decimal places, and a
/// currency symbol prefix: `format_amount(12500, "₦")` is `"₦12,500"`.
pub fn format_amount(amount: i64, currency_symbol: &str) -> String {
    format!("{}{}", currency_symbol, group_thousands(amount.unsigned_abs()))
}

/// Render a signed profit amount for display.
///
/// Positive amounts get a `+` prefix, negative a `-`, and exactly zero no
/// sign at all. The absolute value is rounded half-away-from-zero before
/// formatting.
pub fn format_signed(amount: Decimal, currency_symbol: &str) -> String {
    let rounded = amount
        .abs()
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(i64::MAX);
    let formatted = format_amount(rounded, currency_symbol);
    if amount.is_zero() {
        formatted
    } else if amount.is_sign_positive() {
        format!("+{}", formatted)
    } else {
        format!("-{}", formatted)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
