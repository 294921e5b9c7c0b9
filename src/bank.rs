//! The bank mediator: executes operations and appends them to the log.

use crate::config::Config;
use crate::error::{BankError, Result};
use crate::operation::Operation;
use log::{debug, error, warn};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Central coordinator through which all operations pass.
///
/// `Bank` is `Sync`: callers may share one instance across threads. Each
/// `execute` runs its operation before logging it, and log appends are
/// serialized so lines from concurrent callers never interleave.
///
/// # Partial failure
///
/// If the append fails, the operation's notification has already been
/// written and is not undone. The error is returned to the caller.
#[derive(Debug)]
pub struct Bank {
    /// Operation log, opened in append mode for every write.
    log_path: PathBuf,

    /// Guards appends to `log_path`.
    log_lock: Mutex<()>,
}

impl Bank {
    /// Creates a bank that logs to `log_path`. The file is created lazily.
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        Bank {
            log_path: log_path.into(),
            log_lock: Mutex::new(()),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.log_path.clone())
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Runs `operation`, writing its notification to `out`, then appends
    /// its description to the log.
    pub fn execute<W: Write>(&self, operation: Operation<'_>, out: W) -> Result<()> {
        if !std::ptr::eq(operation.mediator(), self) {
            warn!(
                "{} was bound to another bank, executing here anyway",
                operation.kind().log_label()
            );
        }

        operation.run(out)?;
        debug!("Ran {:?}", operation.kind());

        self.append(operation.describe()).map_err(|source| {
            error!(
                "Could not log {:?} to {}: {}",
                operation.kind(),
                self.log_path.display(),
                source
            );
            BankError::LogAppend {
                path: self.log_path.clone(),
                source,
            }
        })?;

        debug!(
            "Logged '{}' to {}",
            operation.describe(),
            self.log_path.display()
        );
        Ok(())
    }

    /// Appends one line in a single write while holding the lock.
    fn append(&self, line: &str) -> std::io::Result<()> {
        let _guard = self.log_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        let record = format!("{}\n", line);
        file.write_all(record.as_bytes())?;
        file.flush()
    }
}
