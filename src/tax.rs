//! Flat-rate tax strategies and the calculator that applies them.

use crate::amount::Amount;
use rust_decimal::Decimal;
use std::fmt;

/// A jurisdiction's tax formula.
///
/// The set is closed, so selection is plain enum dispatch. Each variant's
/// rate is a fixed constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxStrategy {
    /// 23%
    Poland,
    /// 31%
    Iceland,
    /// 19%
    Germany,
    /// 30%
    Sweden,
}

impl TaxStrategy {
    /// Every supported jurisdiction, in reporting order.
    pub const ALL: [TaxStrategy; 4] = [
        TaxStrategy::Poland,
        TaxStrategy::Iceland,
        TaxStrategy::Germany,
        TaxStrategy::Sweden,
    ];

    /// The flat rate as an exact two-place decimal.
    pub fn rate(self) -> Decimal {
        match self {
            TaxStrategy::Poland => Decimal::new(23, 2),
            TaxStrategy::Iceland => Decimal::new(31, 2),
            TaxStrategy::Germany => Decimal::new(19, 2),
            TaxStrategy::Sweden => Decimal::new(30, 2),
        }
    }

    /// ISO 3166 alpha-2 country code.
    pub fn code(self) -> &'static str {
        match self {
            TaxStrategy::Poland => "PL",
            TaxStrategy::Iceland => "IS",
            TaxStrategy::Germany => "DE",
            TaxStrategy::Sweden => "SE",
        }
    }

    /// Human-readable country name.
    pub fn label(self) -> &'static str {
        match self {
            TaxStrategy::Poland => "Poland",
            TaxStrategy::Iceland => "Iceland",
            TaxStrategy::Germany => "Germany",
            TaxStrategy::Sweden => "Sweden",
        }
    }

    /// Returns `amount * rate`. Pure and exact.
    pub fn compute_tax(self, amount: Amount) -> Amount {
        amount.scaled_by(self.rate())
    }
}

impl fmt::Display for TaxStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Computes tax with the strategy it was built with.
#[derive(Debug, Clone)]
pub struct TaxCalculator {
    strategy: TaxStrategy,
}

impl TaxCalculator {
    pub fn new(strategy: TaxStrategy) -> Self {
        TaxCalculator { strategy }
    }

    /// Delegates to the held strategy and returns its result unchanged.
    pub fn compute(&self, amount: Amount) -> Amount {
        self.strategy.compute_tax(amount)
    }

    pub fn strategy(&self) -> TaxStrategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: TaxStrategy) {
        self.strategy = strategy;
    }

    /// Computes the tax and records it together with its inputs.
    pub fn assess(&self, amount: Amount) -> TaxAssessment {
        TaxAssessment {
            jurisdiction: self.strategy,
            amount,
            tax: self.compute(amount),
        }
    }
}

/// One computed tax, as printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxAssessment {
    pub jurisdiction: TaxStrategy,
    pub amount: Amount,
    pub tax: Amount,
}

impl fmt::Display for TaxAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} tax on amount {}: {}",
            self.jurisdiction.label(),
            self.amount,
            self.tax
        )
    }
}
