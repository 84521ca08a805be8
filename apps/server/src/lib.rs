//! WorthAI key-proxy server library.
//!
//! The mobile client never ships the model API key; it asks this server for
//! it, authenticating with a static bearer token. This crate is the whole
//! backend surface.

pub mod api;
pub mod config;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub use api::{app_router, AppState};
pub use config::Config;

pub fn init_tracing() {
    let log_format = std::env::var("WORTHAI_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}
