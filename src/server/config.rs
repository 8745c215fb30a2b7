use crate::server::error::config::ConfigError;

pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Bearer token required on API requests; token checks are disabled
    /// when unset (local development, tests)
    pub api_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match std::env::var("PORT") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidVar("PORT"))?,
            Err(_) => 8000,
        };

        let api_token = std::env::var("API_TOKEN").ok();

        Ok(Self {
            database_url,
            host,
            port,
            api_token,
        })
    }
}
