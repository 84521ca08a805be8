//! History domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{CURRENCY_SYMBOL, PROFIT_PENDING, TEXT_THUMBNAIL};
use crate::money::format_amount;

/// Display classification of a resolved record's profit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProfitTone {
    Gain,
    Loss,
    Neutral,
}

/// Whether the user was buying or selling the analyzed item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Buy,
    Sell,
}

/// One saved price analysis.
///
/// Prices are stored as display strings; the aggregation side recovers
/// numbers through [`crate::money`]. A record with an empty `actual_price`
/// is unresolved: its `profit` holds the pending sentinel and it is excluded
/// from profit and accuracy aggregates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRecord {
    /// Timestamp-derived identity key, unique within the collection.
    pub id: i64,
    /// Image reference, or a glyph fallback when no image was supplied.
    pub thumbnail: String,
    pub item_name: String,
    /// The user's originally stated expected price, empty if none.
    pub input_price: String,
    /// Formatted `"<min> - <max>"` range, min ≤ max (enforced at creation).
    pub ai_price_range: String,
    /// Formatted actual sale/purchase price, empty until resolved.
    pub actual_price: String,
    pub timestamp: DateTime<Utc>,
    /// Signed formatted profit, or the pending sentinel while unresolved.
    pub profit: String,
    pub profit_color: ProfitTone,
    /// Model confidence, 0-100.
    pub confidence: u8,
    pub condition: String,
    pub reasoning: String,
    pub category: String,
    pub transaction_type: TransactionType,
    pub image_uri: Option<String>,
}

/// Input model for saving an accepted analysis to history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEstimate {
    pub item_name: String,
    /// Raw expected-price text from the form, may be empty.
    pub input_price: String,
    pub range_min: i64,
    pub range_max: i64,
    pub confidence: u8,
    pub condition: String,
    pub reasoning: String,
    pub category: String,
    pub transaction_type: TransactionType,
    pub image_uri: Option<String>,
}

impl EstimateRecord {
    /// Build a fresh unresolved record from an accepted analysis.
    ///
    /// The id is the creation instant in epoch milliseconds, which doubles
    /// as the insertion-order key. Profit starts at the pending sentinel
    /// with a neutral tone.
    pub fn from_analysis(new_estimate: NewEstimate, created_at: DateTime<Utc>) -> Self {
        let input_price = if new_estimate.input_price.is_empty() {
            String::new()
        } else {
            format!("{}{}", CURRENCY_SYMBOL, new_estimate.input_price)
        };

        EstimateRecord {
            id: created_at.timestamp_millis(),
            thumbnail: new_estimate
                .image_uri
                .clone()
                .unwrap_or_else(|| TEXT_THUMBNAIL.to_string()),
            item_name: new_estimate.item_name,
            input_price,
            ai_price_range: format!(
                "{} - {}",
                format_amount(new_estimate.range_min, CURRENCY_SYMBOL),
                format_amount(new_estimate.range_max, CURRENCY_SYMBOL)
            ),
            actual_price: String::new(),
            timestamp: created_at,
            profit: PROFIT_PENDING.to_string(),
            profit_color: ProfitTone::Neutral,
            confidence: new_estimate.confidence,
            condition: new_estimate.condition,
            reasoning: new_estimate.reasoning,
            category: new_estimate.category,
            transaction_type: new_estimate.transaction_type,
            image_uri: new_estimate.image_uri,
        }
    }

    /// Whether an actual price has been supplied for this record.
    pub fn is_resolved(&self) -> bool {
        !self.actual_price.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_estimate() -> NewEstimate {
        NewEstimate {
            item_name: "Thrifted denim jacket".to_string(),
            input_price: "4,000".to_string(),
            range_min: 3_000,
            range_max: 6_000,
            confidence: 72,
            condition: "Good".to_string(),
            reasoning: "Mid-range brand, light wear.".to_string(),
            category: "Clothing".to_string(),
            transaction_type: TransactionType::Sell,
            image_uri: None,
        }
    }

    #[test]
    fn new_record_starts_unresolved() {
        let now = Utc::now();
        let record = EstimateRecord::from_analysis(sample_estimate(), now);
        assert_eq!(record.id, now.timestamp_millis());
        assert_eq!(record.ai_price_range, "₦3,000 - ₦6,000");
        assert_eq!(record.actual_price, "");
        assert_eq!(record.profit, PROFIT_PENDING);
        assert_eq!(record.profit_color, ProfitTone::Neutral);
        assert!(!record.is_resolved());
    }

    #[test]
    fn missing_image_falls_back_to_glyph() {
        let record = EstimateRecord::from_analysis(sample_estimate(), Utc::now());
        assert_eq!(record.thumbnail, TEXT_THUMBNAIL);

        let mut with_image = sample_estimate();
        with_image.image_uri = Some("file:///photos/42.jpg".to_string());
        let record = EstimateRecord::from_analysis(with_image, Utc::now());
        assert_eq!(record.thumbnail, "file:///photos/42.jpg");
    }

    #[test]
    fn empty_input_price_stays_empty() {
        let mut estimate = sample_estimate();
        estimate.input_price = String::new();
        let record = EstimateRecord::from_analysis(estimate, Utc::now());
        assert_eq!(record.input_price, "");
    }

    #[test]
    fn serializes_camel_case() {
        let record = EstimateRecord::from_analysis(sample_estimate(), Utc::now());
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("itemName").is_some());
        assert!(json.get("aiPriceRange").is_some());
        assert_eq!(json["profitColor"], "neutral");
        assert_eq!(json["transactionType"], "sell");
    }
}
