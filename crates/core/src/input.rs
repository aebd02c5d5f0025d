//! Input boundary: raw text from the front end becomes amounts here.
//!
//! Nothing at this boundary is an error. Text that is not a usable amount
//! becomes zero.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Coerces raw user input into a non-negative amount.
///
/// Surrounding whitespace is ignored. Plain decimals (`1500`, `1500.50`,
/// `+12`) and scientific notation (`1e3`) are accepted. Empty, unparsable,
/// out-of-range, negative and negative-zero input all become `0`, and so does
/// text with `_` digit separators (`1_000`).
#[must_use]
pub fn coerce_amount(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    // `Decimal` parsing skips `_` separators; such text is not a number here.
    if trimmed.is_empty() || trimmed.contains('_') {
        return Decimal::ZERO;
    }

    let parsed = Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed));

    match parsed {
        Ok(value) if value > Decimal::ZERO => value,
        _ => Decimal::ZERO,
    }
}
