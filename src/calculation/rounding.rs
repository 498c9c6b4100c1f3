//! Rounding rule for premium deduction amounts.

use rust_decimal::Decimal;

/// Rounds a premium share to a whole amount, rounding exact halves down.
///
/// The value is truncated toward negative infinity; when the discarded
/// fraction exceeds one half the result is bumped to the next integer.
/// A fraction of exactly one half rounds down — distinct from both
/// conventional round-half-up and round-half-to-even.
///
/// # Examples
///
/// ```
/// use premium_engine::calculation::round_half_down;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s| Decimal::from_str(s).unwrap();
/// assert_eq!(round_half_down(dec("123.50")), dec("123"));
/// assert_eq!(round_half_down(dec("123.500001")), dec("124"));
/// assert_eq!(round_half_down(dec("123.49")), dec("123"));
/// ```
pub fn round_half_down(value: Decimal) -> Decimal {
    let down = value.floor();
    if value - down <= Decimal::new(5, 1) {
        down
    } else {
        down + Decimal::ONE
    }
}
