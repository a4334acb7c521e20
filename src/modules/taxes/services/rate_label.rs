//! Percent formatting and best-effort rewriting of tax rate codes
//!
//! Rate codes conventionally embed the percent as `<percent>%`, e.g.
//! `DE-VAT-19%`. When a percent changes, the code is kept roughly in sync by
//! replacing the formatted old percent with the formatted new one. This is a
//! plain textual substitution: codes that spell the percent differently
//! (`19.0%`, `19 %`, `19,5%`) are left untouched.

use rust_decimal::{Decimal, RoundingStrategy};

/// Significant digits kept by the general numeric format
const SIGNIFICANT_DIGITS: u32 = 6;

/// Format a percent with the general numeric rule (`%g`)
///
/// Rounds to six significant digits and drops insignificant trailing zeros:
/// `19.0000` → `19`, `19.50` → `19.5`. Values whose decimal exponent is
/// below -4 or at least 6 switch to scientific notation in the C `printf`
/// style: at least two exponent digits, no forced fraction (`1e-05`,
/// `1.23457e+06`).
pub fn format_percent(value: Decimal) -> String {
    if value.is_zero() {
        return "0".to_string();
    }

    let rounded = value
        .round_sf_with_strategy(SIGNIFICANT_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .unwrap_or(value)
        .normalize();

    let digits = rounded.mantissa().unsigned_abs().to_string();
    let exponent = digits.len() as i64 - 1 - rounded.scale() as i64;

    if (-4..SIGNIFICANT_DIGITS as i64).contains(&exponent) {
        return rounded.to_string();
    }

    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let significant = digits.trim_end_matches('0');
    let (lead, rest) = significant.split_at(1);
    let mantissa = if rest.is_empty() {
        lead.to_string()
    } else {
        format!("{}.{}", lead, rest)
    };
    let exponent_sign = if exponent < 0 { '-' } else { '+' };

    format!(
        "{}{}e{}{:02}",
        sign,
        mantissa,
        exponent_sign,
        exponent.unsigned_abs()
    )
}

/// The label form of a percent as it appears inside rate codes
pub fn percent_label(value: Decimal) -> String {
    format!("{}%", format_percent(value))
}

/// Replace every occurrence of the old percent label in `code`
pub fn rewrite_code(code: &str, old_percent: Decimal, new_percent: Decimal) -> String {
    code.replace(&percent_label(old_percent), &percent_label(new_percent))
}
