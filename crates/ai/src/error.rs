//! Analysis pipeline error types.

use thiserror::Error;

/// Errors surfaced by the analysis pipeline and its HTTP collaborators.
///
/// Callers treat every variant uniformly: map to a user-facing notice and do
/// not retry automatically.
#[derive(Debug, Error)]
pub enum AiError {
    /// The backend rejected the static token, or the model API rejected the
    /// issued key. The cached credential has been invalidated.
    #[error("Authentication failed - please try again later")]
    AuthenticationFailed,

    /// The model API returned 429.
    #[error("Rate limit exceeded - please wait a moment and try again")]
    RateLimited,

    /// The reply body was not valid JSON or lacked the expected shape.
    #[error("Invalid response format from AI: {0}")]
    MalformedResponse(String),

    /// The model API rejected the request as malformed (400).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Any other provider-side failure.
    #[error("Provider error: {0}")]
    Provider(String),

    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl AiError {
    /// Error code for programmatic handling by the client.
    pub fn code(&self) -> &'static str {
        match self {
            AiError::AuthenticationFailed => "AUTHENTICATION_FAILED",
            AiError::RateLimited => "RATE_LIMITED",
            AiError::MalformedResponse(_) => "MALFORMED_RESPONSE",
            AiError::InvalidRequest(_) => "INVALID_REQUEST",
            AiError::Provider(_) => "PROVIDER_ERROR",
            AiError::Http(_) => "HTTP_ERROR",
        }
    }
}
