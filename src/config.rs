//! Run configuration.

use crate::amount::Amount;
use std::path::PathBuf;

/// Default operation log file, relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "operacje.txt";

/// Amount taxed by the reference scenario.
pub const DEFAULT_SCENARIO_AMOUNT: u64 = 2507;

/// Values the bank and the reference scenario are built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Append-only file receiving one line per executed operation.
    pub log_path: PathBuf,

    /// Amount every jurisdiction's tax is computed on.
    pub scenario_amount: Amount,
}

impl Config {
    /// Default configuration with a different log file.
    pub fn with_log_path(log_path: impl Into<PathBuf>) -> Self {
        Config {
            log_path: log_path.into(),
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            scenario_amount: Amount::from_units(DEFAULT_SCENARIO_AMOUNT),
        }
    }
}
