//! The calculator's process-lifetime state and the edits that mutate it.

use flipcalc_shared::{SeedConfig, types::ExpenseId};
use rust_decimal::Decimal;

use crate::input::coerce_amount;
use crate::ledger::{ExpenseEntry, ExpenseLedger, LedgerError};

/// One field-level edit coming from the front end.
///
/// Amounts carried by an edit are already coerced; use the `*_from_input`
/// constructors to go from raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Replace the property (purchase) amount.
    PropertyAmount(Decimal),
    /// Replace the commercial (sale) price.
    CommercialPrice(Decimal),
    /// Replace one expense amount.
    Expense {
        /// Target entry.
        id: ExpenseId,
        /// New amount.
        amount: Decimal,
    },
}

impl Edit {
    /// Property amount edit from raw text.
    #[must_use]
    pub fn property_amount_from_input(raw: &str) -> Self {
        Self::PropertyAmount(coerce_amount(raw))
    }

    /// Commercial price edit from raw text.
    #[must_use]
    pub fn commercial_price_from_input(raw: &str) -> Self {
        Self::CommercialPrice(coerce_amount(raw))
    }

    /// Expense edit from raw text.
    #[must_use]
    pub fn expense_from_input(id: impl Into<ExpenseId>, raw: &str) -> Self {
        Self::Expense {
            id: id.into(),
            amount: coerce_amount(raw),
        }
    }
}

/// Everything the derivation engine reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialState {
    property_amount: Decimal,
    commercial_price: Decimal,
    expenses: ExpenseLedger,
}

impl FinancialState {
    /// Creates a state from its parts.
    #[must_use]
    pub const fn new(
        property_amount: Decimal,
        commercial_price: Decimal,
        expenses: ExpenseLedger,
    ) -> Self {
        Self {
            property_amount,
            commercial_price,
            expenses,
        }
    }

    /// Creates the initial state from seed configuration.
    ///
    /// # Errors
    ///
    /// Returns a `LedgerError` when the configured expenses break the ledger
    /// invariants (blank or duplicate ids, negative amounts).
    pub fn from_seed(seed: &SeedConfig) -> Result<Self, LedgerError> {
        let entries = seed
            .expenses
            .iter()
            .map(|e| ExpenseEntry::new(e.id.as_str(), e.name.as_str(), e.amount))
            .collect();

        Ok(Self::new(
            seed.property_amount,
            seed.commercial_price,
            ExpenseLedger::new(entries)?,
        ))
    }

    /// Applies one edit in place. Never fails; unknown expense ids are ignored.
    pub fn apply(&mut self, edit: Edit) {
        match edit {
            Edit::PropertyAmount(amount) => self.property_amount = amount,
            Edit::CommercialPrice(amount) => self.commercial_price = amount,
            Edit::Expense { id, amount } => {
                self.expenses = self.expenses.update(&id, amount);
            }
        }
    }

    /// Purchase/acquisition price.
    #[must_use]
    pub const fn property_amount(&self) -> Decimal {
        self.property_amount
    }

    /// Sale/commercial price.
    #[must_use]
    pub const fn commercial_price(&self) -> Decimal {
        self.commercial_price
    }

    /// The expense ledger.
    #[must_use]
    pub const fn expenses(&self) -> &ExpenseLedger {
        &self.expenses
    }
}
