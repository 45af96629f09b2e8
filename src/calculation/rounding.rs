//! Monetary rounding rules.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to two decimals, halves away from zero.
///
/// Applied only where a value is placed in a result; intermediate math keeps
/// full precision.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_money(Decimal::new(1089375, 3)), Decimal::new(108938, 2));
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Floors an amount down to a multiple of `unit`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::floor_to_unit;
/// use rust_decimal::Decimal;
///
/// assert_eq!(floor_to_unit(Decimal::new(4155405, 2), Decimal::TEN), Decimal::from(41550));
/// ```
pub fn floor_to_unit(amount: Decimal, unit: Decimal) -> Decimal {
    (amount / unit).floor() * unit
}

/// Rounds an amount up to the next cent.
pub fn ceil_to_cent(amount: Decimal) -> Decimal {
    (amount * Decimal::ONE_HUNDRED).ceil() / Decimal::ONE_HUNDRED
}
