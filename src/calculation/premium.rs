//! Per-grade premium computation.

use crate::models::{PremiumRow, RateRevision, RemunerationGrade};

use super::rounding::round_half_down;

/// Computes the premium figures for one remuneration grade under one rate
/// revision.
///
/// Pure and deterministic: identical inputs always produce identical rows,
/// digit for digit. Every step is exact decimal arithmetic; intermediate
/// products are only normalized (trailing fractional zeros stripped),
/// never rounded. Rounding happens once per deduction figure via
/// [`round_half_down`]. The combined figures are sums of the unrounded
/// health and care parts, rounded once — never sums of the individually
/// rounded figures.
///
/// # Examples
///
/// ```
/// use premium_engine::calculation::compute_premium_row;
/// use premium_engine::models::{RateRevision, RemunerationGrade};
/// use chrono::DateTime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s| Decimal::from_str(s).unwrap();
/// let grade = RemunerationGrade {
///     grade: 22,
///     remuneration: dec("300000"),
///     range_start: dec("290000"),
///     range_end: Some(dec("310000")),
/// };
/// let rates = RateRevision {
///     start: DateTime::parse_from_rfc3339("2025-03-01T00:00:00+09:00").unwrap(),
///     end: None,
///     rate: dec("0.0930"),
///     care_rate: dec("0.0160"),
///     contribution_rate: dec("0.5"),
/// };
///
/// let row = compute_premium_row(&grade, &rates);
/// assert_eq!(row.premium, dec("27900"));
/// assert_eq!(row.all_employee_premium, dec("16350"));
/// ```
pub fn compute_premium_row(grade: &RemunerationGrade, rates: &RateRevision) -> PremiumRow {
    let premium = (grade.remuneration * rates.rate).normalize();
    let half_premium = (premium * rates.contribution_rate).normalize();
    let employee_premium = round_half_down(half_premium);

    let care_premium = (grade.remuneration * rates.care_rate).normalize();
    let half_care_premium = (care_premium * rates.contribution_rate).normalize();
    let employee_care_premium = round_half_down(half_care_premium);

    let all_premium = premium + care_premium;
    let half_all_premium = half_premium + half_care_premium;
    let all_employee_premium = round_half_down(half_all_premium);

    PremiumRow {
        premium,
        half_premium,
        employee_premium,
        care_premium,
        half_care_premium,
        employee_care_premium,
        all_premium,
        half_all_premium,
        all_employee_premium,
    }
}
