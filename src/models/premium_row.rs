//! Computed premium figures for one grade.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The premium figures computed for one remuneration grade under one rate
/// revision.
///
/// The `premium` group covers the combined health-insurance premium alone
/// (insured persons outside the care-insurance bracket); the `care` group
/// covers the long-term-care premium; the `all` group is their sum for
/// insured persons inside the bracket. The `employee` figures are the
/// rounded deduction amounts; every other figure is exact and unrounded.
///
/// Derived data only — rows exist for the duration of report generation
/// and are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumRow {
    /// The full combined health-insurance premium.
    pub premium: Decimal,
    /// The insured person's share of `premium`, before rounding.
    pub half_premium: Decimal,
    /// The rounded deduction amount for `half_premium`.
    pub employee_premium: Decimal,
    /// The full long-term-care premium.
    pub care_premium: Decimal,
    /// The insured person's share of `care_premium`, before rounding.
    pub half_care_premium: Decimal,
    /// The rounded deduction amount for `half_care_premium`.
    pub employee_care_premium: Decimal,
    /// The sum of `premium` and `care_premium`.
    pub all_premium: Decimal,
    /// The sum of `half_premium` and `half_care_premium`.
    pub half_all_premium: Decimal,
    /// The rounded deduction amount for `half_all_premium`.
    pub all_employee_premium: Decimal,
}
