// Unit tests for tax rate record validation
//
// Validates the checks applied before a rate is persisted:
// - percent >= 0
// - percent has at most 4 decimal places (column scale)
// - code not blank
// - two letter country code

use rust_decimal_macros::dec;
use tax_updater::taxes::TaxRate;
use tax_updater::AppError;

#[test]
fn test_valid_rates() {
    let rates = vec![
        TaxRate::new(1, "DE", "DE-19%", dec!(19)),
        TaxRate::new(2, "DE", "DE-0%", dec!(0)),
        TaxRate::new(3, "CH", "CH-8.1%", dec!(8.1000)),
        TaxRate::new(4, "us", "US-CA-7.25%", dec!(7.25)),
        TaxRate::new(5, "NL", "NL-0.0001%", dec!(0.0001)),
    ];

    for rate in rates {
        assert!(rate.validate().is_ok(), "{:?} should be valid", rate);
    }
}

#[test]
fn test_negative_percent() {
    let rate = TaxRate::new(1, "DE", "DE--1%", dec!(-1));
    let err = rate.validate().unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(
        err.to_string(),
        "Validation error: Tax rate percent cannot be negative"
    );
}

#[test]
fn test_precision_limit() {
    assert!(TaxRate::new(1, "DE", "DE", dec!(7.0001)).validate().is_ok());
    assert!(TaxRate::new(1, "DE", "DE", dec!(7.00001)).validate().is_err());
}

#[test]
fn test_blank_code() {
    let err = TaxRate::new(1, "DE", "   ", dec!(19)).validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Validation error: Tax rate code cannot be empty"
    );
}

#[test]
fn test_country_code_shape() {
    for country in ["", "D", "DEU", "1A", "D-"] {
        let rate = TaxRate::new(1, country, "X-19%", dec!(19));
        assert!(rate.validate().is_err(), "country {:?} should be rejected", country);
    }
}
