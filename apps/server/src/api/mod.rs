//! HTTP API surface: the key-issuance route plus CORS handling.

mod key;

use std::sync::Arc;

use axum::extract::Request;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;

/// Shared server state: the guarded credentials.
pub struct AppState {
    pub secret_token: String,
    pub deepseek_api_key: String,
}

impl AppState {
    pub fn from_config(config: &Config) -> Arc<Self> {
        Arc::new(AppState {
            secret_token: config.secret_token.clone(),
            deepseek_api_key: config.deepseek_api_key.clone(),
        })
    }
}

/// Build the application router with CORS and request tracing.
pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    Router::new()
        .merge(key::router())
        .layer(cors_layer(config))
        .layer(middleware::from_fn(preflight_no_content))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The CORS layer answers every OPTIONS request itself with 200; the wire
/// contract is 204 with no body, so rewrite the status on the way out.
async fn preflight_no_content(request: Request, next: Next) -> Response {
    let is_options = request.method() == Method::OPTIONS;
    let mut response = next.run(request).await;
    if is_options && response.status() == StatusCode::OK {
        *response.status_mut() = StatusCode::NO_CONTENT;
    }
    response
}

/// Permissive origins outside production, a single configured origin (or
/// none at all) in production.
fn cors_layer(config: &Config) -> CorsLayer {
    let origin = if !config.production {
        AllowOrigin::any()
    } else {
        match &config.cors_origin {
            Some(origin) => match origin.parse::<HeaderValue>() {
                Ok(value) => AllowOrigin::exact(value),
                Err(_) => {
                    tracing::warn!("invalid CORS_ORIGIN '{}', allowing none", origin);
                    AllowOrigin::list(Vec::<HeaderValue>::new())
                }
            },
            None => AllowOrigin::list(Vec::<HeaderValue>::new()),
        }
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
