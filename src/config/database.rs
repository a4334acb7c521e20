use crate::core::{AppError, Result};
use serde::Deserialize;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Name of the tax rate table without the installation prefix
pub const RATE_TABLE: &str = "tax_calculation_rate";

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
    pub max_connections: u32,
    pub table_prefix: String,
}

impl DatabaseConfig {
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(DatabaseConfig {
            url: var("DATABASE_URL")
                .ok_or_else(|| AppError::Configuration("DATABASE_URL not set".to_string()))?,
            pool_size: var("DATABASE_POOL_SIZE")
                .unwrap_or_else(|| "1".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid DATABASE_POOL_SIZE".to_string())
                })?,
            max_connections: var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|| "2".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid DATABASE_MAX_CONNECTIONS".to_string())
                })?,
            table_prefix: var("DATABASE_TABLE_PREFIX").unwrap_or_default(),
        })
    }

    /// Fully qualified tax rate table name
    pub fn rate_table(&self) -> String {
        format!("{}{}", self.table_prefix, RATE_TABLE)
    }

    /// Create a MySQL connection pool
    ///
    /// No connection is opened until the first query, so commands can
    /// reject bad input before the database is reached.
    pub fn create_pool(&self) -> Result<MySqlPool> {
        let options = MySqlConnectOptions::from_str(&self.url).map_err(AppError::Database)?;

        Ok(MySqlPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.pool_size)
            .acquire_timeout(Duration::from_secs(30))
            .test_before_acquire(true)
            .connect_lazy_with(options))
    }
}
