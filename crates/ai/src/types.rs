//! Request and result types shared between the pipeline and its callers.

use serde::{Deserialize, Serialize};
use worthai_core::errors::ValidationError;
use worthai_core::history::TransactionType;

/// Structured form input for one analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub product_name: String,
    pub product_description: String,
    pub category: String,
    pub condition: String,
    /// The user's expected price in base currency units.
    pub expected_price: i64,
    pub transaction_type: TransactionType,
    /// ISO currency code, e.g. "NGN".
    pub currency: String,
}

impl AnalysisRequest {
    /// Form-level checks: required text fields present and a positive
    /// expected price. Runs before any network traffic; a failing request
    /// is surfaced inline and never submitted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.product_name.trim().is_empty() {
            return Err(ValidationError::MissingField("productName".to_string()));
        }
        if self.product_description.trim().is_empty() {
            return Err(ValidationError::MissingField(
                "productDescription".to_string(),
            ));
        }
        if self.expected_price <= 0 {
            return Err(ValidationError::InvalidPrice(
                self.expected_price.to_string(),
            ));
        }
        Ok(())
    }
}

/// Market demand assessment, coerced to one of three levels.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum MarketDemand {
    High,
    #[default]
    Moderate,
    Low,
}

/// The AI-suggested price range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
    pub currency: String,
}

/// Normalized analysis result.
///
/// Every field is guaranteed usable regardless of what the remote model
/// returned: bounds are non-negative with min ≤ max, confidence is within
/// 0-100, and text fields carry defaults instead of being absent. The
/// caller may discard it or hand it to the history store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub price_range: PriceRange,
    pub confidence: u8,
    pub condition: String,
    pub market_demand: MarketDemand,
    pub product_description: String,
    pub reasoning: String,
}
