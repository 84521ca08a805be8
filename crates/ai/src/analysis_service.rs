//! Analysis service: prompt, model call, and reply normalization.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client as HttpClient, StatusCode};
use serde_json::{json, Value};

use crate::error::AiError;
use crate::key_client::KeyClient;
use crate::normalize::normalize;
use crate::prompt::{build_analysis_prompt, SYSTEM_PROMPT};
use crate::types::{AnalysisRequest, AnalysisResult};

/// Configuration of the analysis pipeline's HTTP endpoints.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Base URL of the key-issuance backend.
    pub backend_url: String,
    /// Static bearer token the backend expects.
    pub secret_token: String,
    /// Base URL of the model API.
    pub deepseek_base_url: String,
    /// Model identifier for chat completions.
    pub model: String,
    /// Nominal request budget; not otherwise enforced by pipeline logic.
    pub timeout: Duration,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            backend_url: "https://securebackend-orcin.vercel.app".to_string(),
            secret_token: String::new(),
            deepseek_base_url: "https://api.deepseek.com".to_string(),
            model: "deepseek-chat".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Trait for running one product analysis.
#[async_trait]
pub trait AnalysisServiceTrait: Send + Sync {
    /// Build the prompt, call the model, and normalize its reply.
    ///
    /// Never persists anything; the result is a candidate the caller may
    /// discard or hand to the history store. Failures are not retried.
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AiError>;
}

pub struct AnalysisService {
    http: HttpClient,
    key_client: KeyClient,
    config: AnalysisConfig,
}

impl AnalysisService {
    pub fn new(config: AnalysisConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();
        let key_client = KeyClient::new(
            http.clone(),
            format!("{}/api/key", config.backend_url),
            config.secret_token.clone(),
        );
        AnalysisService {
            http,
            key_client,
            config,
        }
    }

    fn completion_body(&self, request: &AnalysisRequest) -> Value {
        json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": build_analysis_prompt(request) },
            ],
            "stream": false,
            // Low temperature for consistent pricing.
            "temperature": 0.3,
            "max_tokens": 1000,
        })
    }
}

#[async_trait]
impl AnalysisServiceTrait for AnalysisService {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AiError> {
        // Form-level validation blocks submission before any network call.
        request
            .validate()
            .map_err(|err| AiError::InvalidRequest(err.to_string()))?;

        let api_key = self.key_client.get_key().await?;

        debug!("requesting analysis for '{}'", request.product_name);
        let response = self
            .http
            .post(format!(
                "{}/chat/completions",
                self.config.deepseek_base_url
            ))
            .bearer_auth(api_key)
            .json(&self.completion_body(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                // The issued key is no longer valid; drop it so the next
                // attempt re-fetches.
                self.key_client.invalidate();
            }
            return Err(map_error_status(status));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AiError::MalformedResponse(e.to_string()))?;
        let reply = extract_reply(&body)?;
        let parsed: Value = serde_json::from_str(reply.trim()).map_err(|e| {
            warn!("model reply was not valid JSON: {}", e);
            AiError::MalformedResponse(e.to_string())
        })?;

        Ok(normalize(&parsed))
    }
}

/// Map a non-2xx model API status onto a pipeline error.
fn map_error_status(status: StatusCode) -> AiError {
    match status {
        StatusCode::UNAUTHORIZED => AiError::AuthenticationFailed,
        StatusCode::TOO_MANY_REQUESTS => AiError::RateLimited,
        StatusCode::BAD_REQUEST => AiError::InvalidRequest("bad request".to_string()),
        other => AiError::Provider(format!("model API returned status {}", other)),
    }
}

/// The assistant's reply text from a chat-completions body.
fn extract_reply(body: &Value) -> Result<&str, AiError> {
    body.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .ok_or_else(|| AiError::MalformedResponse("no response from model API".to_string()))
}
