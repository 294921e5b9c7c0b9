//! The fixed reference run: two mediated operations, then four tax lines.

use crate::bank::Bank;
use crate::config::Config;
use crate::error::Result;
use crate::operation::Operation;
use crate::tax::{TaxAssessment, TaxCalculator, TaxStrategy};
use log::info;
use std::io::Write;

/// Executes a deposit and a withdrawal through a bank built from `config`,
/// then prints the tax on `config.scenario_amount` for every jurisdiction.
///
/// All user-facing lines go to `out`. The first failure stops the run.
pub fn run_scenario<W: Write>(config: &Config, mut out: W) -> Result<Vec<TaxAssessment>> {
    let bank = Bank::from_config(config);
    info!("Operation log: {}", bank.log_path().display());

    bank.execute(Operation::deposit(&bank), &mut out)?;
    bank.execute(Operation::withdrawal(&bank), &mut out)?;

    let calculators: Vec<TaxCalculator> = TaxStrategy::ALL
        .into_iter()
        .map(TaxCalculator::new)
        .collect();

    let mut report = Vec::with_capacity(calculators.len());
    for calculator in &calculators {
        let assessment = calculator.assess(config.scenario_amount);
        writeln!(out, "{}", assessment)?;
        report.push(assessment);
    }

    info!("Computed {} tax assessments", report.len());
    Ok(report)
}
