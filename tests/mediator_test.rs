//! Library-level tests for the mediator and tax calculators working together.

use bank_mediator::{
    run_scenario, Amount, Bank, BankError, Config, Operation, TaxCalculator, TaxStrategy,
};
use std::fs;
use std::io;
use std::str::FromStr;
use tempfile::TempDir;

#[test]
fn test_scenario_report_matches_reference_values() {
    let dir = TempDir::new().unwrap();
    let config = Config::with_log_path(dir.path().join("ops.txt"));

    let report = run_scenario(&config, io::sink()).unwrap();

    let taxes: Vec<(&str, String)> = report
        .iter()
        .map(|a| (a.jurisdiction.code(), a.tax.to_string()))
        .collect();
    assert_eq!(
        taxes,
        vec![
            ("PL", "576.61".to_string()),
            ("IS", "777.17".to_string()),
            ("DE", "476.33".to_string()),
            ("SE", "752.10".to_string()),
        ]
    );
}

#[test]
fn test_scenario_with_custom_amount() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        log_path: dir.path().join("ops.txt"),
        scenario_amount: Amount::from_str("100").unwrap(),
    };
    let mut out = Vec::new();

    run_scenario(&config, &mut out).unwrap();

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("Poland tax on amount 100: 23.00"));
    assert!(output.contains("Germany tax on amount 100: 19.00"));
}

#[test]
fn test_scenario_zero_amount() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        log_path: dir.path().join("ops.txt"),
        scenario_amount: Amount::ZERO,
    };

    let report = run_scenario(&config, io::sink()).unwrap();

    assert!(report.iter().all(|a| a.tax.is_zero()));
}

#[test]
fn test_repeated_scenarios_grow_log() {
    let dir = TempDir::new().unwrap();
    let config = Config::with_log_path(dir.path().join("ops.txt"));

    for _ in 0..3 {
        run_scenario(&config, io::sink()).unwrap();
    }

    let content = fs::read_to_string(&config.log_path).unwrap();
    assert_eq!(content.lines().count(), 6);
    assert!(content.ends_with("Operation: Withdrawal\n"));
}

#[test]
fn test_log_in_missing_directory_is_log_append_error() {
    let dir = TempDir::new().unwrap();
    let bank = Bank::new(dir.path().join("missing").join("ops.txt"));

    let withdrawal = Operation::withdrawal(&bank);
    let err = bank.execute(withdrawal, io::sink()).unwrap_err();

    assert!(matches!(err, BankError::LogAppend { .. }));
    let message = err.to_string();
    assert!(message.contains("failed to append to operation log"));
}

#[test]
fn test_negative_amount_rejected_before_taxing() {
    let err = Amount::from_str("-2507").unwrap_err();
    assert!(matches!(err, BankError::NegativeAmount(_)));

    // Any accepted amount produces a non-negative tax
    let cent = Amount::from_str("0.01").unwrap();
    let tax = TaxCalculator::new(TaxStrategy::Iceland).compute(cent);
    assert_eq!(tax.to_string(), "0.0031");
}
