//! Derived figure types.

use flipcalc_shared::types::ExpenseId;
use rust_decimal::Decimal;
use serde::Serialize;

/// Net outcome classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Surplus/deficit is zero or positive.
    Surplus,
    /// Surplus/deficit is negative.
    Deficit,
}

impl Verdict {
    /// Classifies a surplus/deficit amount. Zero counts as a surplus.
    #[must_use]
    pub fn from_amount(surplus_deficit: Decimal) -> Self {
        if surplus_deficit >= Decimal::ZERO {
            Self::Surplus
        } else {
            Self::Deficit
        }
    }

    /// Banner label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Surplus => "SUPERÁVIT",
            Self::Deficit => "DÉFICIT",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-row figures, in ledger order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseFigure {
    /// Entry id.
    pub id: ExpenseId,
    /// Entry label.
    pub name: String,
    /// Entry amount.
    pub amount: Decimal,
    /// `amount / commercial_price * 100`, or zero when the price is zero.
    pub percentage: Decimal,
}

/// Every figure derived from one financial state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedFigures {
    /// Per-expense figures.
    pub expenses: Vec<ExpenseFigure>,
    /// Sum of per-expense percentages.
    pub total_percentage: Decimal,
    /// `100 - total_percentage`; negative when expenses exceed the price.
    pub percentage_in_favor: Decimal,
    /// Sum of expense amounts.
    pub total_expenses: Decimal,
    /// `commercial_price * percentage_in_favor / 100`.
    pub amount_in_favor: Decimal,
    /// `property_amount - commercial_price + amount_in_favor`.
    pub surplus_deficit: Decimal,
    /// Classification of `surplus_deficit`.
    pub verdict: Verdict,
}

impl DerivedFigures {
    /// Percentage of a single expense, if the id exists.
    #[must_use]
    pub fn percentage_of(&self, id: &ExpenseId) -> Option<Decimal> {
        self.expenses
            .iter()
            .find(|figure| &figure.id == id)
            .map(|figure| figure.percentage)
    }
}
