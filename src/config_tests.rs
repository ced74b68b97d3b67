#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal_macros::dec;
use std::io::Write;

fn make_config_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults_match_loan_planner() {
    let settings = Settings::default();
    assert_eq!(settings.currency_symbol, "₹");
    assert_eq!(settings.loan.annual_rate_percent, dec!(10.5));
    assert_eq!(settings.loan.default_amount, dec!(500000));
    assert_eq!(settings.loan.default_tenure, 24);
    assert_eq!(settings.loan.offers.len(), 2);
    assert_eq!(settings.budget.warn_percent, dec!(80));
    assert_eq!(settings.budget.alert_percent, dec!(90));
    assert!(settings.validate().is_ok());
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let file = make_config_file(
        "currency_symbol = \"$\"\n\n[loan]\nannual_rate_percent = 7.25\ntenure_max = 360\n",
    );
    let settings = load_from(file.path()).unwrap();
    assert_eq!(settings.currency_symbol, "$");
    assert_eq!(settings.loan.annual_rate_percent, dec!(7.25));
    assert_eq!(settings.loan.tenure_max, 360);
    assert_eq!(settings.loan.tenure_min, 6);
    assert_eq!(settings.budget, BudgetSettings::default());
}

#[test]
fn test_offers_can_be_replaced() {
    let file = make_config_file(
        "[[loan.offers]]\nlender = \"SBI\"\nproduct = \"Home Loan\"\nannual_rate_percent = 8.4\n",
    );
    let settings = load_from(file.path()).unwrap();
    assert_eq!(settings.loan.offers.len(), 1);
    assert_eq!(settings.loan.offers[0].lender, "SBI");
    assert_eq!(settings.loan.offers[0].annual_rate_percent, dec!(8.4));
}

#[test]
fn test_malformed_file_is_error() {
    let file = make_config_file("currency_symbol = [\n");
    let err = load_from(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_inverted_range_is_rejected() {
    let file = make_config_file("[loan]\ntenure_min = 60\ntenure_max = 6\n");
    let err = load_from(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("tenure_min"));
}

#[test]
fn test_zero_step_is_rejected() {
    let file = make_config_file("[loan]\namount_step = 0\n");
    assert!(load_from(file.path()).is_err());
}

#[test]
fn test_inverted_thresholds_are_rejected() {
    let file = make_config_file("[budget]\nwarn_percent = 95\nalert_percent = 90\n");
    assert!(load_from(file.path()).is_err());
}

#[test]
fn test_printed_settings_parse_back() {
    let printed = to_toml(&Settings::default()).unwrap();
    let file = make_config_file(&printed);
    assert_eq!(load_from(file.path()).unwrap(), Settings::default());
}
