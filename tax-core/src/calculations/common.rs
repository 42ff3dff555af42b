//! Rounding shared by the band calculations.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount or rate to two decimal places, half away from
/// zero (`0.175` becomes `0.18`).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(0.175)), dec!(0.18));
/// assert_eq!(round_half_up(dec!(1234.564)), dec!(1234.56));
/// assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn rounds_midpoint_away_from_zero() {
        assert_eq!(round_half_up(dec!(0.125)), dec!(0.13));
        assert_eq!(round_half_up(dec!(-0.125)), dec!(-0.13));
    }

    #[test]
    fn rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(6149.994)), dec!(6149.99));
    }

    #[test]
    fn rounds_effective_rate() {
        // 21000 / 120000
        assert_eq!(round_half_up(dec!(0.175)), dec!(0.18));
    }

    #[test]
    fn leaves_whole_amounts_alone() {
        assert_eq!(round_half_up(dec!(5000)), dec!(5000.00));
        assert_eq!(round_half_up(Decimal::ZERO), Decimal::ZERO);
    }
}
