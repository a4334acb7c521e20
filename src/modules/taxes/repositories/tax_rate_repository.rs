use async_trait::async_trait;
use sqlx::{MySql, MySqlPool, QueryBuilder};

use crate::core::{AppError, Result};
use crate::modules::taxes::models::{RateFilter, RateId, TaxRate};

/// Columns selected for every rate query, aliased onto `TaxRate` fields
const RATE_COLUMNS: &str = "CAST(tax_calculation_rate_id AS SIGNED) AS id, \
     tax_country_id AS country_code, code, rate AS percent";

/// Lookup and persistence of tax rate records
///
/// Each call is its own unit of work; nothing spans several records.
#[async_trait]
pub trait RateStore: Send + Sync {
    /// Fetch a single rate, `AppError::NotFound` when the ID is unknown
    async fn get(&self, id: RateId) -> Result<TaxRate>;

    /// Fetch every rate matching all criteria of the filter
    async fn find(&self, filter: &RateFilter) -> Result<Vec<TaxRate>>;

    /// Persist code and percent of an existing rate
    async fn save(&self, rate: &TaxRate) -> Result<()>;
}

/// `RateStore` backed by the platform's MySQL tax rate table
#[derive(Clone)]
pub struct MySqlRateStore {
    pool: MySqlPool,
    table: String,
}

impl MySqlRateStore {
    /// `table` must already be validated (see `Config::validate`)
    pub fn new(pool: MySqlPool, table: impl Into<String>) -> Self {
        Self {
            pool,
            table: table.into(),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }
}

#[async_trait]
impl RateStore for MySqlRateStore {
    async fn get(&self, id: RateId) -> Result<TaxRate> {
        tracing::debug!(rate_id = id, table = %self.table, "Loading tax rate");

        let sql = format!(
            "SELECT {} FROM {} WHERE tax_calculation_rate_id = ?",
            RATE_COLUMNS, self.table
        );

        sqlx::query_as::<_, TaxRate>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Tax rate {}", id)))
    }

    async fn find(&self, filter: &RateFilter) -> Result<Vec<TaxRate>> {
        tracing::debug!(
            country = ?filter.country_code(),
            percent = ?filter.percent(),
            table = %self.table,
            "Searching tax rates"
        );

        let mut query =
            QueryBuilder::<MySql>::new(format!("SELECT {} FROM {}", RATE_COLUMNS, self.table));

        if !filter.is_empty() {
            query.push(" WHERE ");
        }

        let mut conditions = query.separated(" AND ");
        if let Some(country_code) = filter.country_code() {
            conditions
                .push("tax_country_id = ")
                .push_bind_unseparated(country_code.to_string());
        }
        if let Some(percent) = filter.percent() {
            conditions.push("rate = ").push_bind_unseparated(percent);
        }

        query.push(" ORDER BY tax_calculation_rate_id");

        let rates = query
            .build_query_as::<TaxRate>()
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(count = rates.len(), "Tax rate search finished");

        Ok(rates)
    }

    async fn save(&self, rate: &TaxRate) -> Result<()> {
        rate.validate()?;

        let sql = format!(
            "UPDATE {} SET code = ?, rate = ? WHERE tax_calculation_rate_id = ?",
            self.table
        );

        sqlx::query(&sql)
            .bind(&rate.code)
            .bind(rate.percent)
            .bind(rate.id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_unique_violation() {
                        return AppError::validation(format!(
                            "Code '{}' is already used by another tax rate",
                            rate.code
                        ));
                    }
                }
                AppError::Database(e)
            })?;

        tracing::debug!(rate_id = rate.id, percent = %rate.percent, "Tax rate updated");

        Ok(())
    }
}
