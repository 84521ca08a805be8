//! Prompt construction for the pricing analyst persona.

use worthai_core::history::TransactionType;
use worthai_core::money::format_amount;

use crate::types::AnalysisRequest;

/// System message pinning the model to JSON-only replies.
pub const SYSTEM_PROMPT: &str = "You are a professional product pricing analyst. \
Always respond with valid JSON only, no additional text or formatting.";

/// Build the user message describing the product and the response contract.
pub fn build_analysis_prompt(request: &AnalysisRequest) -> String {
    let transaction = match request.transaction_type {
        TransactionType::Buy => "Buyer wants to purchase",
        TransactionType::Sell => "Seller wants to sell",
    };

    format!(
        r#"You are a professional product pricing analyst specializing in second-hand and thrift market valuations. Analyze the following product and provide a detailed pricing assessment.

PRODUCT DETAILS:
- Name: {name}
- Description: {description}
- Category: {category}
- Condition: {condition}
- User's Expected Price: {expected}
- Transaction Type: {transaction}

ANALYSIS REQUIREMENTS:
1. Provide a realistic price range for this item in the current market
2. Consider the item's condition, brand reputation, market demand, and rarity
3. Factor in typical depreciation for second-hand items
4. Assess market demand (High/Moderate/Low)
5. Provide confidence level (0-100%)
6. Give reasoning for your assessment

RESPONSE FORMAT (JSON only, no additional text):
{{
  "priceRange": {{
    "min": [minimum_price_number],
    "max": [maximum_price_number],
    "currency": "{currency}"
  }},
  "confidence": [confidence_percentage_number],
  "condition": "{condition}",
  "marketDemand": "[High/Moderate/Low]",
  "productDescription": "{name}",
  "reasoning": "[Brief explanation of pricing factors and market analysis]"
}}"#,
        name = request.product_name,
        description = request.product_description,
        category = request.category,
        condition = request.condition,
        expected = format_amount(request.expected_price, &request.currency),
        transaction = transaction,
        currency = request.currency,
    )
}
