//! The derivation engine.
//!
//! `derive` is total: a zero commercial price zeroes every percentage, and any
//! step that would leave the `Decimal` range saturates instead of panicking.
//! Once a percentage saturates, the amount in favor is taken as price minus
//! total expenses, which the percentage route equals when nothing overflows.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::types::{DerivedFigures, ExpenseFigure, Verdict};
use crate::state::FinancialState;

/// Computes every derived figure from `state`.
///
/// Order of evaluation: per-expense percentages, their sum, percentage and
/// amount in favor, then surplus/deficit. No caching: call it again after
/// each edit.
#[must_use]
pub fn derive(state: &FinancialState) -> DerivedFigures {
    let commercial_price = state.commercial_price();
    let mut saturated = false;

    let expenses: Vec<ExpenseFigure> = state
        .expenses()
        .iter()
        .map(|entry| {
            let percentage = percentage_of(entry.amount(), commercial_price)
                .unwrap_or_else(|| {
                    saturated = true;
                    saturate(entry.amount(), commercial_price)
                });
            ExpenseFigure {
                id: entry.id().clone(),
                name: entry.name().to_string(),
                amount: entry.amount(),
                percentage,
            }
        })
        .collect();

    let total_percentage = expenses.iter().fold(Decimal::ZERO, |sum, figure| {
        sum.checked_add(figure.percentage).unwrap_or_else(|| {
            saturated = true;
            sum.saturating_add(figure.percentage)
        })
    });
    let percentage_in_favor = Decimal::ONE_HUNDRED.saturating_sub(total_percentage);
    let total_expenses = state.expenses().total();
    let amount_in_favor = if saturated {
        warn!(%commercial_price, "Percentages out of range, amount in favor taken from totals");
        commercial_price.saturating_sub(total_expenses)
    } else {
        commercial_price.saturating_mul(percentage_in_favor / Decimal::ONE_HUNDRED)
    };
    let surplus_deficit = state
        .property_amount()
        .saturating_sub(commercial_price)
        .saturating_add(amount_in_favor);

    debug!(
        %total_percentage,
        %total_expenses,
        %surplus_deficit,
        "Derived figures recomputed"
    );

    DerivedFigures {
        expenses,
        total_percentage,
        percentage_in_favor,
        total_expenses,
        amount_in_favor,
        surplus_deficit,
        verdict: Verdict::from_amount(surplus_deficit),
    }
}

/// `amount / commercial_price * 100`, zero when the price is zero and `None`
/// when the result leaves the `Decimal` range.
fn percentage_of(amount: Decimal, commercial_price: Decimal) -> Option<Decimal> {
    if commercial_price.is_zero() {
        return Some(Decimal::ZERO);
    }

    amount
        .checked_div(commercial_price)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
}

fn saturate(amount: Decimal, commercial_price: Decimal) -> Decimal {
    if amount.is_sign_negative() == commercial_price.is_sign_negative() {
        Decimal::MAX
    } else {
        Decimal::MIN
    }
}
