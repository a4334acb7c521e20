//! Console commands operating on tax rates

pub mod list_rates;
pub mod update_rate;

pub use list_rates::RateListCommand;
pub use update_rate::RateUpdateCommand;

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a numeric rate option
///
/// An absent or blank value reads as zero, which every caller treats as
/// "not given". Returns the offending text when it is not a number.
pub(crate) fn parse_percent(raw: Option<&str>) -> std::result::Result<Decimal, String> {
    let text = match raw.map(str::trim) {
        None | Some("") => return Ok(Decimal::ZERO),
        Some(text) => text,
    };

    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| text.to_string())
}
