//! WorthAI AI - the analysis request pipeline.
//!
//! Turns structured form input into a normalized price analysis:
//!
//! - `prompt`: pricing-analyst prompt construction
//! - `key_client`: key-issuance client with an explicit cached-credential slot
//! - `analysis_service`: the DeepSeek chat-completions call
//! - `normalize`: field-level validation of the raw model reply
//! - `types`: request/result DTOs shared with callers
//!
//! The pipeline never persists anything; its output is a candidate the
//! caller may discard or hand to the history store's `append`.

pub mod analysis_service;
pub mod error;
pub mod key_client;
pub mod normalize;
pub mod prompt;
pub mod types;

// Re-export main types for convenience
pub use analysis_service::{AnalysisConfig, AnalysisService, AnalysisServiceTrait};
pub use error::AiError;
pub use key_client::KeyClient;
pub use normalize::normalize;
pub use types::{AnalysisRequest, AnalysisResult, MarketDemand, PriceRange};
