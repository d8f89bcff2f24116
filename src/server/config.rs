/**
 * Server Configuration
 *
 * Process configuration from the environment, validated once at startup.
 * Required values missing at boot abort the process; there is no
 * degraded mode, because every endpoint needs the store and the signing
 * secret.
 *
 * # Variables
 *
 * - `DATABASE_URL` (required) - PostgreSQL connection string
 * - `JWT_SECRET` (required) - token signing secret
 * - `APP_ENV` - `production` enables the secure cookie flag; anything
 *   else is development
 * - `SERVER_PORT` - listen port, default 5000
 * - `CORS_ORIGIN` - allowed frontend origin, default
 *   `http://localhost:5174`
 */

use axum::http::HeaderValue;
use sqlx::PgPool;
use thiserror::Error;

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;
/// Default allowed CORS origin for local frontend development
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5174";

/// Runtime mode, controlling the secure cookie flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Configuration failures that abort startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingVar(&'static str),

    #[error("SERVER_PORT is not a valid port number: {0}")]
    InvalidPort(String),

    #[error("CORS_ORIGIN is not a valid origin value: {0}")]
    InvalidCorsOrigin(String),
}

/// Validated process configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub environment: Environment,
    pub port: u16,
    pub cors_origin: HeaderValue,
}

impl AppConfig {
    /// Load and validate configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = required("DATABASE_URL")?;
        let jwt_secret = required("JWT_SECRET")?;

        let environment = match std::env::var("APP_ENV").as_deref() {
            Ok("production") => Environment::Production,
            _ => Environment::Development,
        };

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let raw_origin =
            std::env::var("CORS_ORIGIN").unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string());
        let cors_origin = raw_origin
            .parse::<HeaderValue>()
            .map_err(|_| ConfigError::InvalidCorsOrigin(raw_origin))?;

        Ok(Self {
            database_url,
            jwt_secret,
            environment,
            port,
            cors_origin,
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

/// Connect the database pool and run the embedded migrations
pub async fn load_database(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_flag() {
        assert!(Environment::Production.is_production());
        assert!(!Environment::Development.is_production());
    }

    #[test]
    fn test_config_error_messages() {
        assert_eq!(
            ConfigError::MissingVar("JWT_SECRET").to_string(),
            "JWT_SECRET is not set"
        );
        assert_eq!(
            ConfigError::InvalidPort("eighty".to_string()).to_string(),
            "SERVER_PORT is not a valid port number: eighty"
        );
    }
}
