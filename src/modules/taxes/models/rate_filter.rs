use rust_decimal::Decimal;

use super::TaxRate;

/// AND-combined search criteria for tax rates
///
/// A criterion is only recorded when its value is set: an empty country
/// code or a zero percent adds no filter at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateFilter {
    country_code: Option<String>,
    percent: Option<Decimal>,
}

impl RateFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_country(mut self, country_code: &str) -> Self {
        if !country_code.is_empty() {
            self.country_code = Some(country_code.to_string());
        }
        self
    }

    pub fn with_percent(mut self, percent: Decimal) -> Self {
        if !percent.is_zero() {
            self.percent = Some(percent);
        }
        self
    }

    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }

    pub fn percent(&self) -> Option<Decimal> {
        self.percent
    }

    pub fn is_empty(&self) -> bool {
        self.country_code.is_none() && self.percent.is_none()
    }

    /// Evaluate the criteria against a record held in memory
    pub fn matches(&self, rate: &TaxRate) -> bool {
        let country_ok = self
            .country_code
            .as_deref()
            .map_or(true, |code| rate.country_code == code);
        // Decimal equality ignores scale, so 19 matches 19.0000
        let percent_ok = self.percent.map_or(true, |p| rate.percent == p);

        country_ok && percent_ok
    }
}
