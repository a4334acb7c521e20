//! `tax:rate:update`: rewrite the percent of existing tax rates
//!
//! Target rates are resolved either by ID or by country code plus current
//! percent. Every resolved rate gets the new percent and a best-effort
//! rewrite of its code label, then is saved one by one. A failed save is
//! reported and the remaining rates are still processed; the batch is not
//! atomic.

use rust_decimal::Decimal;

use super::parse_percent;
use crate::cli::{Output, RateUpdateArgs};
use crate::core::{ExitStatus, Result};
use crate::modules::taxes::models::{RateFilter, RateId, TaxRate};
use crate::modules::taxes::repositories::RateStore;
use crate::modules::taxes::services::{percent_label, rewrite_code};

pub struct RateUpdateCommand<'a> {
    store: &'a dyn RateStore,
}

impl<'a> RateUpdateCommand<'a> {
    pub fn new(store: &'a dyn RateStore) -> Self {
        Self { store }
    }

    /// Run the command
    ///
    /// Returns `ExitStatus::Failure` for usage errors and unknown IDs. Once
    /// rates are resolved the status is `Success`, even when saves failed.
    /// Store errors other than Not-Found during resolution are returned.
    pub async fn execute(
        &self,
        args: &RateUpdateArgs,
        output: &mut dyn Output,
    ) -> Result<ExitStatus> {
        let new_percent = match parse_percent(args.new_rate.as_deref()) {
            Ok(percent) if !percent.is_zero() => percent,
            Ok(_) => {
                output.error("New tax rate must be specified")?;
                return Ok(ExitStatus::Failure);
            }
            Err(raw) => {
                output.error(&format!("Invalid new tax rate '{}'", raw))?;
                return Ok(ExitStatus::Failure);
            }
        };

        // A blank or zero ID counts as not given
        let id = args
            .id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty() && id.parse::<RateId>() != Ok(0));

        let status = match id {
            Some(id) => self.update_by_id(id, new_percent, args.dry_run, output).await?,
            None => self.update_by_country(args, new_percent, output).await?,
        };

        if !status.is_success() {
            return Ok(status);
        }

        if args.dry_run {
            output.comment("Dry Run Mode. No data has been modified")?;
        }

        Ok(ExitStatus::Success)
    }

    async fn update_by_id(
        &self,
        raw_id: &str,
        new_percent: Decimal,
        dry_run: bool,
        output: &mut dyn Output,
    ) -> Result<ExitStatus> {
        let not_found = format!("No Tax Rate with ID {} found", raw_id);

        let id = match raw_id.parse::<RateId>() {
            Ok(id) if id > 0 => id,
            _ => {
                output.warning(&not_found)?;
                return Ok(ExitStatus::Failure);
            }
        };

        let rate = match self.store.get(id).await {
            Ok(rate) => rate,
            Err(err) if err.is_not_found() => {
                tracing::debug!(rate_id = id, "Tax rate does not exist");
                output.warning(&not_found)?;
                return Ok(ExitStatus::Failure);
            }
            Err(err) => return Err(err),
        };

        self.apply(rate, new_percent, dry_run, output).await?;

        Ok(ExitStatus::Success)
    }

    async fn update_by_country(
        &self,
        args: &RateUpdateArgs,
        new_percent: Decimal,
        output: &mut dyn Output,
    ) -> Result<ExitStatus> {
        let country_code = args.country.as_deref().map(str::trim).unwrap_or("");

        let old_percent = match parse_percent(args.old_rate.as_deref()) {
            Ok(percent) => percent,
            Err(raw) => {
                output.error(&format!("Invalid old tax rate '{}'", raw))?;
                return Ok(ExitStatus::Failure);
            }
        };

        if country_code.is_empty() || old_percent.is_zero() {
            output.error("Tax rate ID or either country code and rate must be specified")?;
            return Ok(ExitStatus::Failure);
        }

        let filter = RateFilter::new()
            .with_country(country_code)
            .with_percent(old_percent);
        let rates = self.store.find(&filter).await?;

        if rates.is_empty() {
            output.comment(&format!(
                "No tax rates for {} with rate {} have been found",
                country_code,
                percent_label(old_percent)
            ))?;
            return Ok(ExitStatus::Success);
        }

        tracing::info!(
            country = country_code,
            old_percent = %old_percent,
            count = rates.len(),
            "Updating tax rates"
        );

        for rate in rates {
            self.apply(rate, new_percent, args.dry_run, output).await?;
        }

        Ok(ExitStatus::Success)
    }

    /// Mutate one rate, persist it unless dry-run, and report
    async fn apply(
        &self,
        mut rate: TaxRate,
        new_percent: Decimal,
        dry_run: bool,
        output: &mut dyn Output,
    ) -> Result<()> {
        rate.code = rewrite_code(&rate.code, rate.percent, new_percent);
        rate.percent = new_percent;

        if dry_run {
            tracing::debug!(rate_id = rate.id, code = %rate.code, "Dry run, not saving tax rate");
        } else if let Err(err) = self.store.save(&rate).await {
            tracing::warn!(rate_id = rate.id, error = %err, "Failed to save tax rate");
            output.error(&format!(
                "Cannot save Tax Rate with ID {}. Error message: {}",
                rate.id, err
            ))?;
        }

        output.info(&format!(
            "Tax Rate with ID {} for country {} has been saved with new percent rate {}",
            rate.id,
            rate.country_code,
            percent_label(rate.percent)
        ))?;

        Ok(())
    }
}
