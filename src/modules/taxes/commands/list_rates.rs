//! `tax:rate:list`: show the rates an update by country/rate would touch

use super::parse_percent;
use crate::cli::{Output, RateListArgs, Severity};
use crate::core::{ExitStatus, Result};
use crate::modules::taxes::models::RateFilter;
use crate::modules::taxes::repositories::RateStore;
use crate::modules::taxes::services::percent_label;

pub struct RateListCommand<'a> {
    store: &'a dyn RateStore,
}

impl<'a> RateListCommand<'a> {
    pub fn new(store: &'a dyn RateStore) -> Self {
        Self { store }
    }

    pub async fn execute(&self, args: &RateListArgs, output: &mut dyn Output) -> Result<ExitStatus> {
        let percent = match parse_percent(args.rate.as_deref()) {
            Ok(percent) => percent,
            Err(raw) => {
                output.error(&format!("Invalid tax rate '{}'", raw))?;
                return Ok(ExitStatus::Failure);
            }
        };

        let filter = RateFilter::new()
            .with_country(args.country.as_deref().map(str::trim).unwrap_or(""))
            .with_percent(percent);
        let rates = self.store.find(&filter).await?;

        if args.json {
            output.write_line(Severity::Plain, &serde_json::to_string_pretty(&rates)?)?;
            return Ok(ExitStatus::Success);
        }

        if rates.is_empty() {
            output.comment("No tax rates found")?;
            return Ok(ExitStatus::Success);
        }

        for rate in &rates {
            output.info(&format!(
                "ID {} | {} | {} | {}",
                rate.id,
                rate.country_code,
                rate.code,
                percent_label(rate.percent)
            ))?;
        }

        Ok(ExitStatus::Success)
    }
}
