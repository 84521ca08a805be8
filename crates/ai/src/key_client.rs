//! Client for the key-issuance backend.
//!
//! The DeepSeek API key never ships with the app; it is fetched from a
//! backend route guarded by a static bearer token. The fetched key is held
//! in a single per-instance cache slot and invalidated on authentication
//! failure - there is no other cache.

use std::sync::RwLock;

use log::{debug, warn};
use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;

use crate::error::AiError;

#[derive(Deserialize)]
struct KeyResponse {
    key: Option<String>,
}

/// Fetches and caches the model API credential.
pub struct KeyClient {
    http: HttpClient,
    key_url: String,
    secret_token: String,
    cached_key: RwLock<Option<String>>,
}

impl KeyClient {
    pub fn new(http: HttpClient, key_url: String, secret_token: String) -> Self {
        KeyClient {
            http,
            key_url,
            secret_token,
            cached_key: RwLock::new(None),
        }
    }

    /// The cached key, or a fresh fetch from the backend.
    pub async fn get_key(&self) -> Result<String, AiError> {
        if let Some(key) = self.cached_key.read().unwrap().clone() {
            return Ok(key);
        }

        debug!("fetching model API key from backend");
        let response = self
            .http
            .get(&self.key_url)
            .bearer_auth(&self.secret_token)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED => {
                warn!("backend rejected the static bearer token");
                Err(AiError::AuthenticationFailed)
            }
            status if !status.is_success() => Err(AiError::Provider(format!(
                "key backend returned status {}",
                status
            ))),
            _ => {
                let body: KeyResponse = response
                    .json()
                    .await
                    .map_err(|e| AiError::MalformedResponse(e.to_string()))?;
                let key = body.key.filter(|k| !k.is_empty()).ok_or_else(|| {
                    AiError::MalformedResponse("no API key received from backend".to_string())
                })?;
                *self.cached_key.write().unwrap() = Some(key.clone());
                Ok(key)
            }
        }
    }

    /// Drop the cached key so the next call re-fetches. Called when the
    /// model API rejects the key.
    pub fn invalidate(&self) {
        *self.cached_key.write().unwrap() = None;
    }

    #[cfg(test)]
    pub(crate) fn prime(&self, key: &str) {
        *self.cached_key.write().unwrap() = Some(key.to_string());
    }
}
