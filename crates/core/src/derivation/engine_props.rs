//! Property-based tests for the derivation engine.

use flipcalc_shared::types::ExpenseId;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::engine::derive;
use super::types::Verdict;
use crate::ledger::{ExpenseEntry, ExpenseLedger};
use crate::state::FinancialState;

/// Strategy to generate whole-unit amounts (0 to 1,000,000,000).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(Decimal::from)
}

/// Strategy to generate a non-zero commercial price.
fn price() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(Decimal::from)
}

fn ledger(amounts: &[Decimal]) -> ExpenseLedger {
    let entries = amounts
        .iter()
        .enumerate()
        .map(|(i, amount)| ExpenseEntry::new(format!("gasto_{i}"), format!("Gasto {i}"), *amount))
        .collect();
    ExpenseLedger::new(entries).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Percentage in favor is exactly the complement of the total percentage.
    #[test]
    fn prop_percentage_in_favor_is_complement(
        property in amount(),
        commercial in amount(),
        amounts in prop::collection::vec(amount(), 0..20),
    ) {
        let figures = derive(&FinancialState::new(property, commercial, ledger(&amounts)));
        prop_assert_eq!(figures.percentage_in_favor, dec!(100) - figures.total_percentage);
    }

    /// A zero commercial price zeroes every percentage.
    #[test]
    fn prop_zero_price_zeroes_percentages(
        property in amount(),
        amounts in prop::collection::vec(amount(), 0..20),
    ) {
        let figures = derive(&FinancialState::new(property, Decimal::ZERO, ledger(&amounts)));

        prop_assert!(figures.expenses.iter().all(|f| f.percentage.is_zero()));
        prop_assert_eq!(figures.total_percentage, Decimal::ZERO);
        prop_assert_eq!(figures.percentage_in_favor, dec!(100));
        prop_assert_eq!(figures.amount_in_favor, Decimal::ZERO);
    }

    /// Total expenses ignore row order.
    #[test]
    fn prop_total_expenses_order_independent(
        commercial in amount(),
        amounts in prop::collection::vec(amount(), 0..20),
    ) {
        let mut reversed = amounts.clone();
        reversed.reverse();

        let forward = derive(&FinancialState::new(Decimal::ZERO, commercial, ledger(&amounts)));
        let backward = derive(&FinancialState::new(Decimal::ZERO, commercial, ledger(&reversed)));

        prop_assert_eq!(forward.total_expenses, amounts.iter().copied().sum::<Decimal>());
        prop_assert_eq!(forward.total_expenses, backward.total_expenses);
    }

    /// The verdict is a surplus exactly when surplus/deficit is non-negative.
    #[test]
    fn prop_verdict_matches_sign(
        property in amount(),
        commercial in amount(),
        amounts in prop::collection::vec(amount(), 0..20),
    ) {
        let figures = derive(&FinancialState::new(property, commercial, ledger(&amounts)));
        let expected = if figures.surplus_deficit >= Decimal::ZERO {
            Verdict::Surplus
        } else {
            Verdict::Deficit
        };
        prop_assert_eq!(figures.verdict, expected);
    }

    /// With a non-zero price the amount in favor is what the expenses leave
    /// of the price, and surplus/deficit is property minus expenses.
    #[test]
    fn prop_amount_in_favor_is_price_minus_expenses(
        property in amount(),
        commercial in price(),
        amounts in prop::collection::vec(amount(), 0..20),
    ) {
        let figures = derive(&FinancialState::new(property, commercial, ledger(&amounts)));
        let tolerance = dec!(0.0001);

        prop_assert!(
            (figures.amount_in_favor - (commercial - figures.total_expenses)).abs() < tolerance,
            "amount in favor {} vs {}",
            figures.amount_in_favor,
            commercial - figures.total_expenses
        );
        prop_assert!(
            (figures.surplus_deficit - (property - figures.total_expenses)).abs() < tolerance
        );
    }

    /// Deriving twice from the same state yields identical figures.
    #[test]
    fn prop_derive_is_idempotent(
        property in amount(),
        commercial in amount(),
        amounts in prop::collection::vec(amount(), 0..20),
    ) {
        let state = FinancialState::new(property, commercial, ledger(&amounts));
        prop_assert_eq!(derive(&state), derive(&state));
    }

    /// Editing an unknown expense leaves every derived figure unchanged.
    #[test]
    fn prop_unknown_expense_edit_changes_nothing(
        property in amount(),
        commercial in amount(),
        amounts in prop::collection::vec(amount(), 0..20),
        new_amount in amount(),
    ) {
        let state = FinancialState::new(property, commercial, ledger(&amounts));
        let before = derive(&state);

        let mut edited = state.clone();
        edited.apply(crate::state::Edit::Expense {
            id: ExpenseId::from("gasto-inexistente"),
            amount: new_amount,
        });

        prop_assert_eq!(derive(&edited), before);
    }
}
