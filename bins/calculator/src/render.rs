//! Text and JSON rendering of the calculator report.

use flipcalc_core::DerivedFigures;
use flipcalc_core::report::{
    self, EXPENSE_COLUMNS, EXPENSES_HEADING, INPUTS_HEADING, RESULTS_HEADING, Report,
};
use unicode_width::UnicodeWidthStr;

/// Column alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

const INDENT: &str = "  ";
const GAP: &str = "   ";

/// Renders the report as a plain-text page.
pub fn table(report: &Report) -> String {
    let mut out = String::new();

    out.push_str(report::TITLE);
    out.push('\n');
    out.push_str(report::SUBTITLE);
    out.push_str("\n\n");

    out.push_str(&format!(
        "{caption}{GAP}{label}{GAP}{amount}\n\n",
        caption = report::BANNER_CAPTION,
        label = report.banner.label,
        amount = report.banner.amount,
    ));

    out.push_str(INPUTS_HEADING);
    out.push('\n');
    let inputs: Vec<Vec<&str>> = report
        .inputs
        .iter()
        .map(|input| vec![input.label, input.value.as_str()])
        .collect();
    out.push_str(&columns(&inputs, &[Align::Left, Align::Right]));
    out.push('\n');

    out.push_str(EXPENSES_HEADING);
    out.push('\n');
    let mut rows: Vec<Vec<&str>> = Vec::with_capacity(report.rows.len() + 3);
    rows.push(vec!["Clave", EXPENSE_COLUMNS[0], EXPENSE_COLUMNS[1], EXPENSE_COLUMNS[2]]);
    rows.extend(report.rows.iter().map(|row| {
        vec![
            row.id.as_str(),
            row.name.as_str(),
            row.percentage.as_str(),
            row.amount.as_str(),
        ]
    }));
    for footer in [&report.total, &report.in_favor] {
        rows.push(vec![
            "",
            footer.label,
            footer.percentage.as_str(),
            footer.amount.as_str(),
        ]);
    }
    out.push_str(&columns(
        &rows,
        &[Align::Left, Align::Left, Align::Right, Align::Right],
    ));
    out.push('\n');

    out.push_str(RESULTS_HEADING);
    out.push('\n');
    let results: Vec<Vec<&str>> = report
        .results
        .iter()
        .map(|result| vec![result.label, result.value.as_str()])
        .collect();
    out.push_str(&columns(&results, &[Align::Left, Align::Right]));

    out
}

/// Renders the derived figures as one pretty-printed JSON document.
pub fn json(figures: &DerivedFigures) -> serde_json::Result<String> {
    let mut doc = serde_json::to_string_pretty(figures)?;
    doc.push('\n');
    Ok(doc)
}

/// Lays out `rows` in columns sized to their widest cell.
fn columns(rows: &[Vec<&str>], align: &[Align]) -> String {
    let mut widths = vec![0usize; align.len()];
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths.iter().zip(align))
            .map(|(cell, (&width, &align))| pad(cell, width, align))
            .collect();
        out.push_str(INDENT);
        out.push_str(cells.join(GAP).trim_end());
        out.push('\n');
    }
    out
}

fn pad(cell: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match align {
        Align::Left => format!("{cell}{fill}"),
        Align::Right => format!("{fill}{cell}"),
    }
}
