//! Server configuration from environment variables.

/// Runtime configuration for the key-proxy server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind, e.g. `0.0.0.0:8787`.
    pub listen_addr: String,
    /// Static bearer token clients must present.
    pub secret_token: String,
    /// The model API key handed out to authorized clients.
    pub deepseek_api_key: String,
    /// Allowed CORS origin in production; `None` allows none.
    pub cors_origin: Option<String>,
    /// Outside production every origin is allowed.
    pub production: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            listen_addr: std::env::var("WORTHAI_LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8787".to_string()),
            secret_token: std::env::var("SECRET_TOKEN").unwrap_or_default(),
            deepseek_api_key: std::env::var("DEEPSEEK_API_KEY").unwrap_or_default(),
            cors_origin: std::env::var("CORS_ORIGIN").ok().filter(|o| !o.is_empty()),
            production: std::env::var("WORTHAI_ENV")
                .map(|env| env.eq_ignore_ascii_case("production"))
                .unwrap_or(false),
        }
    }
}
