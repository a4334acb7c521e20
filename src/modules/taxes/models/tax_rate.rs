use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Identifier of a tax rate record
pub type RateId = i64;

/// Maximum decimal places the rate column stores
pub const MAX_PERCENT_SCALE: u32 = 4;

/// A tax rate record as stored by the commerce platform
///
/// `code` is a free-form label that conventionally embeds the percent
/// (e.g. `DE-VAT-19%`), but nothing enforces that it stays in sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TaxRate {
    pub id: RateId,
    pub country_code: String,
    pub code: String,
    pub percent: Decimal,
}

impl TaxRate {
    pub fn new(
        id: RateId,
        country_code: impl Into<String>,
        code: impl Into<String>,
        percent: Decimal,
    ) -> Self {
        Self {
            id,
            country_code: country_code.into(),
            code: code.into(),
            percent,
        }
    }

    /// Validate the record before it is persisted
    pub fn validate(&self) -> Result<()> {
        if self.percent < Decimal::ZERO {
            return Err(AppError::Validation(
                "Tax rate percent cannot be negative".to_string(),
            ));
        }

        if self.percent.normalize().scale() > MAX_PERCENT_SCALE {
            return Err(AppError::Validation(format!(
                "Tax rate percent cannot have more than {} decimal places",
                MAX_PERCENT_SCALE
            )));
        }

        if self.code.trim().is_empty() {
            return Err(AppError::Validation(
                "Tax rate code cannot be empty".to_string(),
            ));
        }

        if self.country_code.len() != 2
            || !self.country_code.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(AppError::Validation(format!(
                "Invalid country code '{}'",
                self.country_code
            )));
        }

        Ok(())
    }
}
