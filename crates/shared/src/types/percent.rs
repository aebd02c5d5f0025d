//! Percentage display type.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A percentage expressed in points (`59.81` means 59.81%).
///
/// Always renders with exactly two decimal places and a trailing `%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(Decimal);

impl Percent {
    /// Creates a percentage from a value in points.
    #[must_use]
    pub const fn new(points: Decimal) -> Self {
        Self(points)
    }
}

impl From<Decimal> for Percent {
    fn from(points: Decimal) -> Self {
        Self(points)
    }
}

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_zero() {
            rounded = Decimal::ZERO;
        }
        write!(f, "{rounded:.2}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0), "0.00%")]
    #[case(dec!(100), "100.00%")]
    #[case(dec!(59.81470588235294117647058824), "59.81%")]
    #[case(dec!(40.18529411764705882352941176), "40.19%")]
    #[case(dec!(12.345), "12.35%")]
    #[case(dec!(-5.5), "-5.50%")]
    #[case(dec!(-0.001), "0.00%")]
    fn test_display(#[case] points: Decimal, #[case] expected: &str) {
        assert_eq!(Percent::new(points).to_string(), expected);
    }
}
