//! Expense ledger.
//!
//! This module implements the editable side of the calculator:
//! - Expense entries (id, label, amount)
//! - The ordered ledger and its single `update(id, amount)` entry point
//! - Error types for ledgers assembled from configuration

pub mod entry;
pub mod error;
pub mod expenses;

#[cfg(test)]
mod expenses_props;

pub use entry::ExpenseEntry;
pub use error::LedgerError;
pub use expenses::ExpenseLedger;
