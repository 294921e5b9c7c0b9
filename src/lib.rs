//! # Bank Mediator
//!
//! Routes deposits and withdrawals through a central [`Bank`] that runs each
//! operation and appends it to a plain-text log, and computes flat-rate
//! taxes for a closed set of countries.
//!
//! ## Design Principles
//!
//! - **Mediator**: operations are bound to their bank at construction and
//!   only ever executed through [`Bank::execute`]
//! - **Strategy**: [`TaxCalculator`] holds one [`TaxStrategy`], a closed enum
//! - **Fixed-point arithmetic**: amounts and rates use `rust_decimal`
//! - **Append-only log**: one line per executed operation, never truncated
//!
//! ## Example
//!
//! ```no_run
//! use bank_mediator::{Amount, Bank, Operation, TaxCalculator, TaxStrategy};
//!
//! let bank = Bank::new("operacje.txt");
//! bank.execute(Operation::deposit(&bank), std::io::stdout()).unwrap();
//!
//! let tax = TaxCalculator::new(TaxStrategy::Poland).compute(Amount::from_units(2507));
//! assert_eq!(tax.to_string(), "576.61");
//! ```

pub mod amount;
pub mod bank;
pub mod config;
pub mod error;
pub mod operation;
pub mod scenario;
pub mod tax;

pub use amount::Amount;
pub use bank::Bank;
pub use config::Config;
pub use error::{BankError, Result};
pub use operation::{Operation, OperationKind};
pub use scenario::run_scenario;
pub use tax::{TaxAssessment, TaxCalculator, TaxStrategy};
