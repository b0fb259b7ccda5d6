use crate::core::{AppError, Currency, Result};
use std::env;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub quotes: QuoteConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub cors_allowed_origin: Option<String>,
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        self.env.eq_ignore_ascii_case("production")
    }
}

/// Settings shared by the quote calculator and the export renderers
#[derive(Debug, Clone)]
pub struct QuoteConfig {
    pub currency: Currency,
    pub company_name: String,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            company_name: "Event Quotes".to_string(),
        }
    }
}

impl QuoteConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(QuoteConfig {
            currency: match env::var("QUOTE_CURRENCY") {
                Ok(value) => value.parse().map_err(AppError::Configuration)?,
                Err(_) => defaults.currency,
            },
            company_name: env::var("COMPANY_NAME").unwrap_or(defaults.company_name),
        })
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                    .ok()
                    .filter(|origin| !origin.trim().is_empty()),
            },
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
            quotes: QuoteConfig::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "SERVER_PORT must be greater than 0".to_string(),
            ));
        }

        if self.database.max_connections == 0 {
            return Err(AppError::Configuration(
                "DATABASE_MAX_CONNECTIONS must be greater than 0".to_string(),
            ));
        }

        if self.database.pool_size > self.database.max_connections {
            return Err(AppError::Configuration(format!(
                "DATABASE_POOL_SIZE ({}) cannot exceed DATABASE_MAX_CONNECTIONS ({})",
                self.database.pool_size, self.database.max_connections
            )));
        }

        if self.quotes.company_name.trim().is_empty() {
            return Err(AppError::Configuration(
                "COMPANY_NAME cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
