use crate::server::error::config::ConfigError;

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub listen_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            database_url: require("DATABASE_URL")?,
            jwt_secret: require("JWT_SECRET")?,
            listen_addr: require("LISTEN_ADDR")?,
        };

        if config.jwt_secret.is_empty() {
            return Err(ConfigError::InvalidEnvValue {
                var: "JWT_SECRET".to_string(),
                reason: "secret must not be empty".to_string(),
            });
        }

        Ok(config)
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
