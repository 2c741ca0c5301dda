use crate::token::TokenConfig;
use crate::token::config::{DEFAULT_ACCESS_TTL_SECONDS, DEFAULT_REFRESH_TTL_MULTIPLIER};
use dotenv::dotenv;
use std::env;
use thiserror::Error;
use tracing::{info, warn};

const DEFAULT_JWT_SECRET: &str = "un segreto meno bello";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid env var {0}: {1}")]
    Invalid(&'static str, &'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub token: TokenConfig,
    pub server_host: String,
    pub server_port: u16,
    pub app_env: String,
    using_default_secret: bool,
}

impl Config {
    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let (jwt_secret, using_default_secret) = match env::var("JWT_SECRET") {
            Ok(secret) if secret.is_empty() => {
                return Err(ConfigError::Invalid("JWT_SECRET", "must not be empty"));
            }
            Ok(secret) => (secret, false),
            Err(_) => {
                warn!("JWT_SECRET not set, using default (not secure for production!)");
                (DEFAULT_JWT_SECRET.to_string(), true)
            }
        };

        let access_ttl_seconds = positive_i64("ACCESS_TTL_SECONDS", DEFAULT_ACCESS_TTL_SECONDS)?;
        let refresh_ttl_multiplier =
            positive_i64("REFRESH_TTL_MULTIPLIER", DEFAULT_REFRESH_TTL_MULTIPLIER)?;

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::Invalid("SERVER_PORT", "must be a number between 0-65535")
            })?;

        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            token: TokenConfig::new(jwt_secret)
                .with_access_ttl(access_ttl_seconds)
                .with_refresh_multiplier(refresh_ttl_multiplier),
            server_host,
            server_port,
            app_env,
            using_default_secret,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Logga la configurazione (nascondendo i segreti)
    pub fn print_info(&self) {
        info!("Server Configuration:");
        info!("   Environment: {}", self.app_env);
        info!("   Server Address: {}", self.bind_address());
        info!("   Access token TTL: {}s", self.token.access_ttl_seconds);
        info!("   Refresh token TTL: {}s", self.token.refresh_ttl_seconds());
        if self.using_default_secret {
            warn!("   JWT Secret: USING DEFAULT (INSECURE!)");
        } else {
            info!("   JWT Secret: custom secret configured");
        }
    }
}

fn positive_i64(key: &'static str, default: i64) -> Result<i64, ConfigError> {
    let value = match env::var(key) {
        Ok(raw) => raw
            .parse::<i64>()
            .map_err(|_| ConfigError::Invalid(key, "must be an integer"))?,
        Err(_) => default,
    };

    if value <= 0 {
        return Err(ConfigError::Invalid(key, "must be positive"));
    }
    Ok(value)
}
