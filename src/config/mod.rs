use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

pub mod database;

pub use database::DatabaseConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Config {
            app: AppConfig {
                env: var("APP_ENV").unwrap_or_else(|| "development".to_string()),
                log_level: var("LOG_LEVEL").unwrap_or_else(|| "warn".to_string()),
            },
            database: DatabaseConfig::from_vars(&var)?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.database.max_connections == 0 {
            return Err(AppError::Configuration(
                "Database max connections must be greater than 0".to_string(),
            ));
        }

        if self.database.pool_size > self.database.max_connections {
            return Err(AppError::Configuration(format!(
                "Database pool size ({}) cannot exceed max connections ({})",
                self.database.pool_size, self.database.max_connections
            )));
        }

        let prefix = &self.database.table_prefix;
        if !prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(AppError::Configuration(format!(
                "Invalid DATABASE_TABLE_PREFIX '{}': only ASCII letters, digits and '_' are allowed",
                prefix
            )));
        }

        Ok(())
    }
}
