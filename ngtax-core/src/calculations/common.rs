//! Arithmetic helpers shared by the calculators.
//!
//! Calculators work in exact decimal arithmetic and never round their
//! results; [`round_half_up`] is for presentation only.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use ngtax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps negative values to zero.
pub fn floor_at_zero(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Expresses `part` as a percentage of `whole`.
///
/// Zero when `whole` is zero; `None` when the percentage overflows.
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use ngtax_core::calculations::common::percent_of;
///
/// assert_eq!(percent_of(dec!(50000), dec!(1000000)), Some(dec!(5)));
/// assert_eq!(percent_of(dec!(1), dec!(0)), Some(dec!(0)));
/// assert_eq!(percent_of(Decimal::MAX, dec!(0.5)), None);
/// ```
pub fn percent_of(
    part: Decimal,
    whole: Decimal,
) -> Option<Decimal> {
    if whole.is_zero() {
        return Some(Decimal::ZERO);
    }
    part.checked_div(whole)?.checked_mul(Decimal::ONE_HUNDRED)
}
