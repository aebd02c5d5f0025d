//! Report view model: every figure formatted for display.
//!
//! The report mirrors the calculator page: status banner, property inputs,
//! the expense table with its two footer rows, and the results summary.
//! Expense rows show `-` for a zero amount; every other amount is a plain
//! currency value.

use flipcalc_shared::types::{ExpenseId, Money, Percent};
use serde::Serialize;

use crate::derivation::{DerivedFigures, Verdict};
use crate::state::FinancialState;

/// Page title.
pub const TITLE: &str = "Calculadora de Rentabilidad";
/// Page subtitle.
pub const SUBTITLE: &str = "Análisis para flipping inmobiliario";
/// Banner caption.
pub const BANNER_CAPTION: &str = "RENTABILIDAD";
/// Heading of the property inputs section.
pub const INPUTS_HEADING: &str = "Datos de la Propiedad";
/// Label of the property amount input.
pub const PROPERTY_AMOUNT_LABEL: &str = "Monto de la Propiedad";
/// Label of the commercial price input.
pub const COMMERCIAL_PRICE_LABEL: &str = "Precio Comercial Total";
/// Heading of the expense table.
pub const EXPENSES_HEADING: &str = "GASTOS";
/// Expense table column headers.
pub const EXPENSE_COLUMNS: [&str; 3] = ["Concepto", "Porcentaje", "Monto"];
/// Footer row with the totals.
pub const TOTAL_ROW_LABEL: &str = "PORCENTAJE TOTAL";
/// Footer row with the amounts in favor.
pub const IN_FAVOR_ROW_LABEL: &str = "PORCENTAJE TOTAL A FAVOR";
/// Heading of the results summary.
pub const RESULTS_HEADING: &str = "Resultados";

/// Status banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    /// Surplus or deficit.
    pub verdict: Verdict,
    /// `SUPERÁVIT` or `DÉFICIT`.
    pub label: &'static str,
    /// Absolute surplus/deficit as currency.
    pub amount: String,
}

/// A labelled formatted value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledValue {
    /// Label.
    pub label: &'static str,
    /// Formatted value.
    pub value: String,
}

/// One expense table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseRow {
    /// Entry id, used to address edits.
    pub id: ExpenseId,
    /// Concepto.
    pub name: String,
    /// Porcentaje.
    pub percentage: String,
    /// Monto, `-` when zero.
    pub amount: String,
}

/// A footer row of the expense table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterRow {
    /// Row label.
    pub label: &'static str,
    /// Formatted percentage.
    pub percentage: String,
    /// Formatted amount.
    pub amount: String,
}

/// Fully formatted rendering of one state and its derived figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Status banner.
    pub banner: Banner,
    /// Property amount and commercial price.
    pub inputs: Vec<LabeledValue>,
    /// Expense rows in ledger order.
    pub rows: Vec<ExpenseRow>,
    /// Total percentage and total expenses.
    pub total: FooterRow,
    /// Percentage and amount in favor.
    pub in_favor: FooterRow,
    /// Results summary.
    pub results: Vec<LabeledValue>,
}

impl Report {
    /// Formats `figures`, which must have been derived from `state`.
    #[must_use]
    pub fn build(state: &FinancialState, figures: &DerivedFigures) -> Self {
        let surplus_deficit = Money::new(figures.surplus_deficit);

        let banner = Banner {
            verdict: figures.verdict,
            label: figures.verdict.label(),
            amount: surplus_deficit.abs().to_string(),
        };

        let inputs = vec![
            LabeledValue {
                label: PROPERTY_AMOUNT_LABEL,
                value: Money::new(state.property_amount()).to_string(),
            },
            LabeledValue {
                label: COMMERCIAL_PRICE_LABEL,
                value: Money::new(state.commercial_price()).to_string(),
            },
        ];

        let rows = figures
            .expenses
            .iter()
            .map(|figure| ExpenseRow {
                id: figure.id.clone(),
                name: figure.name.clone(),
                percentage: Percent::new(figure.percentage).to_string(),
                amount: Money::new(figure.amount).display_or_dash(),
            })
            .collect();

        let total_percentage = Percent::new(figures.total_percentage).to_string();
        let percentage_in_favor = Percent::new(figures.percentage_in_favor).to_string();
        let total_expenses = Money::new(figures.total_expenses).to_string();
        let amount_in_favor = Money::new(figures.amount_in_favor).to_string();

        let results = vec![
            LabeledValue {
                label: "Porcentaje Total",
                value: total_percentage.clone(),
            },
            LabeledValue {
                label: "Porcentaje a Favor",
                value: percentage_in_favor.clone(),
            },
            LabeledValue {
                label: "Total de Gastos",
                value: total_expenses.clone(),
            },
            LabeledValue {
                label: "Monto a Favor",
                value: amount_in_favor.clone(),
            },
            LabeledValue {
                label: figures.verdict.label(),
                value: surplus_deficit.to_string(),
            },
        ];

        Self {
            banner,
            inputs,
            rows,
            total: FooterRow {
                label: TOTAL_ROW_LABEL,
                percentage: total_percentage,
                amount: total_expenses,
            },
            in_favor: FooterRow {
                label: IN_FAVOR_ROW_LABEL,
                percentage: percentage_in_favor,
                amount: amount_in_favor,
            },
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derivation::derive;
    use crate::state::Edit;
    use flipcalc_shared::SeedConfig;

    fn seeded() -> FinancialState {
        FinancialState::from_seed(&SeedConfig::default()).unwrap()
    }

    #[test]
    fn test_seed_report() {
        let state = seeded();
        let report = Report::build(&state, &derive(&state));

        assert_eq!(report.banner.label, "SUPERÁVIT");
        assert_eq!(report.banner.amount, "$120,749");
        assert_eq!(report.inputs[0].value, "$700,000");
        assert_eq!(report.inputs[1].value, "$680,000");

        assert_eq!(report.rows.len(), 18);
        assert_eq!(report.rows[0].name, "Hipoteca");
        assert_eq!(report.rows[0].percentage, "59.81%");
        assert_eq!(report.rows[0].amount, "$406,740");
        assert_eq!(report.rows[3].name, "Luz");
        assert_eq!(report.rows[3].percentage, "0.00%");
        assert_eq!(report.rows[3].amount, "-");

        assert_eq!(report.total.percentage, "85.18%");
        assert_eq!(report.total.amount, "$579,251");
        assert_eq!(report.in_favor.percentage, "14.82%");
        assert_eq!(report.in_favor.amount, "$100,749");
        assert_eq!(report.results[4].value, "$120,749");
    }

    #[test]
    fn test_deficit_banner_shows_absolute_amount() {
        let mut state = seeded();
        state.apply(Edit::property_amount_from_input("400000"));
        let report = Report::build(&state, &derive(&state));

        assert_eq!(report.banner.verdict, Verdict::Deficit);
        assert_eq!(report.banner.label, "DÉFICIT");
        assert_eq!(report.banner.amount, "$179,251");
        assert_eq!(report.results[4].label, "DÉFICIT");
        assert_eq!(report.results[4].value, "-$179,251");
    }

    #[test]
    fn test_zero_price_report() {
        let mut state = seeded();
        state.apply(Edit::commercial_price_from_input(""));
        let report = Report::build(&state, &derive(&state));

        assert!(report.rows.iter().all(|row| row.percentage == "0.00%"));
        assert_eq!(report.inputs[1].value, "$0");
        assert_eq!(report.in_favor.percentage, "100.00%");
        assert_eq!(report.in_favor.amount, "$0");
    }
}
