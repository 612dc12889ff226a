use crate::server::error::config::ConfigError;

pub struct Config {
    pub database_url: String,
    pub feed_base_url: String,
    pub feed_api_key: String,
    pub maintenance_secret: String,
    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            feed_base_url: require("FEED_BASE_URL")?,
            feed_api_key: require("FEED_API_KEY")?,
            maintenance_secret: require("MAINTENANCE_SECRET")?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
