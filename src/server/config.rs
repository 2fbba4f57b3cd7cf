//! Environment driven server configuration.

use crate::server::error::config::ConfigError;

pub const DEFAULT_SEARCH_API_URL: &str = "https://api.github.com";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

/// Minimum length of the session signing secret, in bytes.
pub const MIN_SECRET_KEY_LEN: usize = 64;

#[derive(Clone, Debug)]
pub struct Config {
    /// Secret used to sign the session cookie
    pub secret_key: String,
    /// User agent sent with every upstream search request
    pub user_agent: String,
    /// Base URL of the upstream repository search API, without trailing slash
    pub search_api_url: String,
    pub listen_addr: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `SECRET_KEY` or `USER_AGENT` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - `SECRET_KEY` is too short or `SEARCH_API_URL`
    ///   is not a valid URL
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = required_var("SECRET_KEY")?;
        if secret_key.len() < MIN_SECRET_KEY_LEN {
            return Err(ConfigError::InvalidEnvValue {
                var: "SECRET_KEY".to_string(),
                reason: format!("must be at least {} bytes long", MIN_SECRET_KEY_LEN),
            });
        }

        let search_api_url =
            std::env::var("SEARCH_API_URL").unwrap_or_else(|_| DEFAULT_SEARCH_API_URL.to_string());
        if let Err(e) = reqwest::Url::parse(&search_api_url) {
            return Err(ConfigError::InvalidEnvValue {
                var: "SEARCH_API_URL".to_string(),
                reason: e.to_string(),
            });
        }

        Ok(Self {
            secret_key,
            user_agent: required_var("USER_AGENT")?,
            search_api_url: search_api_url.trim_end_matches('/').to_string(),
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
        })
    }
}

fn required_var(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}
