//! Ledger error types.
//!
//! These only arise when a ledger is assembled from configuration. Editing an
//! existing ledger never fails.

use flipcalc_shared::{AppError, types::ExpenseId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while building an expense ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Two entries share the same id.
    #[error("Duplicate expense id: {0}")]
    DuplicateId(ExpenseId),

    /// An entry has an empty id.
    #[error("Expense id cannot be blank (entry {position})")]
    BlankId {
        /// Zero-based position of the offending entry.
        position: usize,
    },

    /// An entry starts with a negative amount.
    #[error("Expense {id} has a negative amount: {amount}")]
    NegativeAmount {
        /// Offending entry.
        id: ExpenseId,
        /// Configured amount.
        amount: Decimal,
    },
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        Self::Validation(err.to_string())
    }
}
