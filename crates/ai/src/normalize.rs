//! Field-level normalization of the raw model reply.
//!
//! The remote model is instructed to return JSON but is not trusted to: every
//! field is clamped, coerced, or defaulted so the caller always receives a
//! usable [`AnalysisResult`]. When the model gives no usable range at all,
//! the whole result degrades to a fixed fallback range instead of erroring.

use serde_json::Value;
use worthai_core::constants::{
    BASE_CURRENCY, DEFAULT_CONFIDENCE, FALLBACK_CONFIDENCE, FALLBACK_RANGE_MAX, FALLBACK_RANGE_MIN,
};

use crate::types::{AnalysisResult, MarketDemand, PriceRange};

/// Reasoning text forced onto a fallback result.
const FALLBACK_REASONING: &str =
    "Unable to determine accurate pricing - showing estimated range.";

/// Default reasoning when the model gave none.
const DEFAULT_REASONING: &str = "Analysis completed based on market data.";

const DEFAULT_CONDITION: &str = "Good";
const DEFAULT_DESCRIPTION: &str = "Product";

/// Normalize a raw model reply into a guaranteed-usable analysis result.
pub fn normalize(raw: &Value) -> AnalysisResult {
    let price_range = raw.get("priceRange");
    let mut min = coerce_amount(price_range.and_then(|r| r.get("min")));
    let mut max = coerce_amount(price_range.and_then(|r| r.get("max")));
    let currency = price_range
        .and_then(|r| r.get("currency"))
        .and_then(Value::as_str)
        .unwrap_or(BASE_CURRENCY)
        .to_string();

    if min > max {
        std::mem::swap(&mut min, &mut max);
    }

    let mut confidence = coerce_confidence(raw.get("confidence"));
    let mut reasoning = text_or(raw.get("reasoning"), DEFAULT_REASONING);

    // No usable range at all: degrade gracefully to a fixed estimate rather
    // than surfacing an error.
    if max == 0 {
        min = FALLBACK_RANGE_MIN;
        max = FALLBACK_RANGE_MAX;
        confidence = FALLBACK_CONFIDENCE;
        reasoning = FALLBACK_REASONING.to_string();
    }

    AnalysisResult {
        price_range: PriceRange { min, max, currency },
        confidence,
        condition: text_or(raw.get("condition"), DEFAULT_CONDITION),
        market_demand: coerce_demand(raw.get("marketDemand")),
        product_description: text_or(raw.get("productDescription"), DEFAULT_DESCRIPTION),
        reasoning,
    }
}

/// A non-negative integer amount; missing or non-numeric values become 0.
fn coerce_amount(value: Option<&Value>) -> i64 {
    let numeric = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.parse().unwrap_or(0.0),
        _ => 0.0,
    };
    numeric.max(0.0).round() as i64
}

/// Confidence clamped to 0-100; missing or non-numeric means "unsure".
fn coerce_confidence(value: Option<&Value>) -> u8 {
    let numeric = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.parse().ok(),
        _ => None,
    };
    match numeric {
        Some(n) => n.clamp(0.0, 100.0).round() as u8,
        None => DEFAULT_CONFIDENCE,
    }
}

fn coerce_demand(value: Option<&Value>) -> MarketDemand {
    match value.and_then(Value::as_str) {
        Some("High") => MarketDemand::High,
        Some("Low") => MarketDemand::Low,
        _ => MarketDemand::Moderate,
    }
}

fn text_or(value: Option<&Value>, default: &str) -> String {
    match value.and_then(Value::as_str) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn well_formed_reply_passes_through() {
        let result = normalize(&json!({
            "priceRange": { "min": 12_000, "max": 18_000, "currency": "NGN" },
            "confidence": 85,
            "condition": "Like New",
            "marketDemand": "High",
            "productDescription": "Mirrorless camera",
            "reasoning": "Strong resale demand."
        }));
        assert_eq!(result.price_range, PriceRange { min: 12_000, max: 18_000, currency: "NGN".into() });
        assert_eq!(result.confidence, 85);
        assert_eq!(result.condition, "Like New");
        assert_eq!(result.market_demand, MarketDemand::High);
        assert_eq!(result.reasoning, "Strong resale demand.");
    }

    #[test]
    fn swapped_bounds_are_reordered_and_confidence_clamped() {
        let result = normalize(&json!({
            "priceRange": { "min": 500, "max": 100 },
            "confidence": 150
        }));
        assert_eq!(result.price_range.min, 100);
        assert_eq!(result.price_range.max, 500);
        assert_eq!(result.confidence, 100);
    }

    #[test]
    fn zero_range_triggers_wholesale_fallback() {
        let result = normalize(&json!({
            "priceRange": { "min": 0, "max": 0 }
        }));
        assert_eq!(result.price_range.min, FALLBACK_RANGE_MIN);
        assert_eq!(result.price_range.max, FALLBACK_RANGE_MAX);
        assert_eq!(result.confidence, FALLBACK_CONFIDENCE);
        assert_eq!(result.reasoning, FALLBACK_REASONING);
    }

    #[test]
    fn missing_everything_still_yields_a_usable_result() {
        let result = normalize(&json!({}));
        assert_eq!(result.price_range.min, FALLBACK_RANGE_MIN);
        assert_eq!(result.price_range.max, FALLBACK_RANGE_MAX);
        assert_eq!(result.price_range.currency, BASE_CURRENCY);
        assert_eq!(result.confidence, FALLBACK_CONFIDENCE);
        assert_eq!(result.condition, DEFAULT_CONDITION);
        assert_eq!(result.market_demand, MarketDemand::Moderate);
        assert_eq!(result.product_description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn negative_bounds_clamp_to_zero() {
        let result = normalize(&json!({
            "priceRange": { "min": -500, "max": 2_000 },
            "confidence": -10
        }));
        assert_eq!(result.price_range.min, 0);
        assert_eq!(result.price_range.max, 2_000);
        assert_eq!(result.confidence, 0);
    }

    #[test]
    fn non_numeric_values_take_defaults() {
        let result = normalize(&json!({
            "priceRange": { "min": "about 1000", "max": 3_000 },
            "confidence": "very",
            "marketDemand": "Explosive"
        }));
        assert_eq!(result.price_range.min, 0);
        assert_eq!(result.price_range.max, 3_000);
        assert_eq!(result.confidence, DEFAULT_CONFIDENCE);
        assert_eq!(result.market_demand, MarketDemand::Moderate);
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let result = normalize(&json!({
            "priceRange": { "min": "1500", "max": "2500.4" },
            "confidence": "72"
        }));
        assert_eq!(result.price_range.min, 1_500);
        assert_eq!(result.price_range.max, 2_500);
        assert_eq!(result.confidence, 72);
    }
}
