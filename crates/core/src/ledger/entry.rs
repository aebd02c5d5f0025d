//! Expense entry domain type.

use flipcalc_shared::types::ExpenseId;
use rust_decimal::Decimal;
use serde::Serialize;

/// A single named expense line-item.
///
/// `id` and `name` are fixed at creation; only the amount changes, and only
/// by producing a new entry through [`ExpenseEntry::with_amount`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseEntry {
    id: ExpenseId,
    name: String,
    amount: Decimal,
}

impl ExpenseEntry {
    /// Creates a new expense entry.
    #[must_use]
    pub fn new(id: impl Into<ExpenseId>, name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount,
        }
    }

    /// Stable identifier of the entry.
    #[must_use]
    pub const fn id(&self) -> &ExpenseId {
        &self.id
    }

    /// Display label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current amount in whole currency units.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns a copy of this entry carrying `amount`.
    #[must_use]
    pub fn with_amount(&self, amount: Decimal) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            amount,
        }
    }
}
