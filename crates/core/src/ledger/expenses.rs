//! The ordered expense ledger.

use std::collections::HashSet;

use flipcalc_shared::types::ExpenseId;
use rust_decimal::Decimal;
use tracing::debug;

use super::entry::ExpenseEntry;
use super::error::LedgerError;

/// Ordered collection of expense entries with unique ids.
///
/// Order is the row order shown to the user. No total depends on it.
/// The set of entries is fixed once the ledger is built; edits replace amounts
/// only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpenseLedger {
    entries: Vec<ExpenseEntry>,
}

impl ExpenseLedger {
    /// Builds a ledger, checking id uniqueness and amount sign.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::BlankId` for an empty id,
    /// `LedgerError::DuplicateId` when an id repeats, and
    /// `LedgerError::NegativeAmount` for an entry below zero.
    pub fn new(entries: Vec<ExpenseEntry>) -> Result<Self, LedgerError> {
        let mut seen = HashSet::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            if entry.id().is_blank() {
                return Err(LedgerError::BlankId { position });
            }
            if !seen.insert(entry.id()) {
                return Err(LedgerError::DuplicateId(entry.id().clone()));
            }
            if entry.amount().is_sign_negative() && !entry.amount().is_zero() {
                return Err(LedgerError::NegativeAmount {
                    id: entry.id().clone(),
                    amount: entry.amount(),
                });
            }
        }

        Ok(Self { entries })
    }

    /// Returns a ledger identical to this one except that the entry matching
    /// `id` carries `amount`.
    ///
    /// `amount` is expected to be coerced already (see
    /// [`crate::input::coerce_amount`]). An unknown `id` is not an error: the
    /// ledger comes back unchanged.
    #[must_use]
    pub fn update(&self, id: &ExpenseId, amount: Decimal) -> Self {
        if self.get(id).is_none() {
            debug!(expense_id = %id, "Ignoring update for unknown expense");
            return self.clone();
        }

        let entries = self
            .entries
            .iter()
            .map(|entry| {
                if entry.id() == id {
                    entry.with_amount(amount)
                } else {
                    entry.clone()
                }
            })
            .collect();

        Self { entries }
    }

    /// Looks up an entry by id.
    #[must_use]
    pub fn get(&self, id: &ExpenseId) -> Option<&ExpenseEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Entries in row order.
    #[must_use]
    pub fn entries(&self) -> &[ExpenseEntry] {
        &self.entries
    }

    /// Iterates entries in row order.
    pub fn iter(&self) -> std::slice::Iter<'_, ExpenseEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the ledger has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all amounts.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.entries
            .iter()
            .fold(Decimal::ZERO, |sum, entry| sum.saturating_add(entry.amount()))
    }
}

impl<'a> IntoIterator for &'a ExpenseLedger {
    type Item = &'a ExpenseEntry;
    type IntoIter = std::slice::Iter<'a, ExpenseEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
