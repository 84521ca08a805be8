//! Key-issuance route: hands the model API key to clients presenting the
//! static bearer token.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::api::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// GET /api/key - return the model API key behind the bearer check.
async fn get_key(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    if !is_authorized(&headers, &state.secret_token) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Unauthorized" })),
        );
    }
    (StatusCode::OK, Json(json!({ "key": state.deepseek_api_key })))
}

fn is_authorized(headers: &HeaderMap, secret_token: &str) -> bool {
    if secret_token.is_empty() {
        // Refuse to hand out keys when no token is configured at all.
        return false;
    }
    let Some(auth_header) = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    match auth_header.strip_prefix(BEARER_PREFIX) {
        Some(token) => token == secret_token,
        None => false,
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/key", get(get_key))
}
