//! Insurance-rate revision models.
//!
//! This module defines the [`RateRevision`] and [`Organization`] types
//! representing the time-bounded premium rates published per organization.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ValidityInterval, Versioned};

/// A time-bounded set of premium rates for one organization.
///
/// All three rates are exact decimals carrying the source's precision;
/// none of them ever passes through binary floating point.
///
/// # Example
///
/// ```
/// use premium_engine::models::RateRevision;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let json = r#"{
///     "start": "2025-03-01T00:00:00.000+09:00",
///     "end": null,
///     "rate": 0.0991,
///     "careRate": 0.0159,
///     "contributionRate": 0.5
/// }"#;
///
/// let revision: RateRevision = serde_json::from_str(json).unwrap();
/// assert_eq!(revision.rate, Decimal::from_str("0.0991").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRevision {
    /// The inclusive start of the revision's validity.
    pub start: DateTime<FixedOffset>,
    /// The exclusive end of the revision's validity, or `None` if open-ended.
    #[serde(default)]
    pub end: Option<DateTime<FixedOffset>>,
    /// The combined health-insurance premium rate applied to the
    /// standardized remuneration.
    pub rate: Decimal,
    /// The long-term-care insurance premium rate, applied to the same
    /// remuneration for insured persons in the care-insurance bracket.
    pub care_rate: Decimal,
    /// The insured person's share of a premium, typically one half.
    pub contribution_rate: Decimal,
}

impl Versioned for RateRevision {
    fn validity(&self) -> ValidityInterval {
        ValidityInterval {
            start: self.start,
            end: self.end,
        }
    }
}

/// An organization document: the named issuer of a rate-revision history.
///
/// Revisions are delivered in ascending `start` order, each bounded by the
/// start of its successor, with the last one open-ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// The organization's display name, when the source carries one.
    #[serde(default)]
    pub name: Option<String>,
    /// The rate-revision history, ascending by start.
    pub revisions: Vec<RateRevision>,
}
