//! Property-based tests for the expense ledger.

use std::collections::BTreeMap;

use flipcalc_shared::types::ExpenseId;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::entry::ExpenseEntry;
use super::expenses::ExpenseLedger;

/// Strategy to generate whole-unit amounts (0 to 1,000,000,000).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(Decimal::from)
}

/// Strategy to generate entries with unique ids, in arbitrary order.
fn entries() -> impl Strategy<Value = Vec<ExpenseEntry>> {
    prop::collection::btree_map("[a-z_]{1,12}", amount(), 0..24)
        .prop_map(|by_id: BTreeMap<String, Decimal>| {
            by_id
                .into_iter()
                .map(|(id, amount)| ExpenseEntry::new(id.clone(), id.to_uppercase(), amount))
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The total is the plain sum of amounts, whatever the row order.
    #[test]
    fn prop_total_is_order_independent(entries in entries()) {
        let expected: Decimal = entries.iter().map(ExpenseEntry::amount).sum();

        let mut reversed = entries.clone();
        reversed.reverse();

        let ledger = ExpenseLedger::new(entries).unwrap();
        let reversed = ExpenseLedger::new(reversed).unwrap();

        prop_assert_eq!(ledger.total(), expected);
        prop_assert_eq!(reversed.total(), expected);
    }

    /// Updating an id that is not in the ledger changes nothing.
    #[test]
    fn prop_unknown_id_update_is_noop(entries in entries(), new_amount in amount()) {
        let ledger = ExpenseLedger::new(entries).unwrap();
        // generated ids never contain '-'
        let updated = ledger.update(&ExpenseId::from("no-such-expense"), new_amount);

        prop_assert_eq!(&updated, &ledger);
        prop_assert_eq!(updated.total(), ledger.total());
    }

    /// An update touches exactly one entry and keeps size and order.
    #[test]
    fn prop_update_touches_one_entry(
        entries in entries().prop_filter("need an entry", |e| !e.is_empty()),
        pick in any::<prop::sample::Index>(),
        new_amount in amount(),
    ) {
        let ledger = ExpenseLedger::new(entries).unwrap();
        let target = ledger.entries()[pick.index(ledger.len())].clone();

        let updated = ledger.update(target.id(), new_amount);

        prop_assert_eq!(updated.len(), ledger.len());
        for (before, after) in ledger.iter().zip(updated.iter()) {
            prop_assert_eq!(before.id(), after.id());
            prop_assert_eq!(before.name(), after.name());
            if before.id() == target.id() {
                prop_assert_eq!(after.amount(), new_amount);
            } else {
                prop_assert_eq!(after.amount(), before.amount());
            }
        }
        prop_assert_eq!(
            updated.total(),
            ledger.total() - target.amount() + new_amount
        );
    }
}
