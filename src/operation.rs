//! Financial operations routed through the bank mediator.

use crate::bank::Bank;
use std::fmt;
use std::io::{self, Write};

/// What an operation does. Doubles as its capability tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Puts money into the account.
    Deposit,

    /// Takes money out of the account.
    Withdrawal,
}

impl OperationKind {
    /// Line written to the operation log.
    pub fn log_label(self) -> &'static str {
        match self {
            OperationKind::Deposit => "Operation: Deposit",
            OperationKind::Withdrawal => "Operation: Withdrawal",
        }
    }

    /// Notification shown to the user once the operation has run.
    pub fn notification(self) -> &'static str {
        match self {
            OperationKind::Deposit => "Deposit operation completed.",
            OperationKind::Withdrawal => "Withdrawal operation completed.",
        }
    }
}

/// A single deposit or withdrawal, bound to the bank that will execute it.
///
/// The mediator is fixed at construction, so an operation can never exist
/// without one.
#[derive(Debug, Clone, Copy)]
pub struct Operation<'b> {
    kind: OperationKind,
    mediator: &'b Bank,
}

impl<'b> Operation<'b> {
    pub fn new(kind: OperationKind, mediator: &'b Bank) -> Self {
        Operation { kind, mediator }
    }

    pub fn deposit(mediator: &'b Bank) -> Self {
        Self::new(OperationKind::Deposit, mediator)
    }

    pub fn withdrawal(mediator: &'b Bank) -> Self {
        Self::new(OperationKind::Withdrawal, mediator)
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn mediator(&self) -> &'b Bank {
        self.mediator
    }

    /// Announces completion on `out`. Write failures are returned as-is.
    pub fn run<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "{}", self.kind.notification())
    }

    /// Deterministic log label for this operation's kind.
    pub fn describe(&self) -> &'static str {
        self.kind.log_label()
    }
}

impl fmt::Display for Operation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}
