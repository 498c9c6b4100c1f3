//! Standard-monthly-remuneration table models.
//!
//! This module defines the [`TableVersion`] and [`RemunerationGrade`] types
//! representing the time-partitioned grade tables published by the health
//! insurance authority.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{ValidityInterval, Versioned};

/// One entry of the remuneration-table index.
///
/// Identifies a named batch of [`RemunerationGrade`] records effective
/// during the entry's validity interval. The `id` is the key used to fetch
/// that version's grade list from the data source. Read-only; selection
/// happens once per run.
///
/// # Example
///
/// ```
/// use premium_engine::models::{TableVersion, Versioned};
/// use chrono::DateTime;
///
/// let version = TableVersion {
///     id: "2016-04-01".to_string(),
///     start: DateTime::parse_from_rfc3339("2016-04-01T00:00:00+09:00").unwrap(),
///     end: None,
/// };
///
/// let at = DateTime::parse_from_rfc3339("2025-03-01T00:00:00+09:00").unwrap();
/// assert!(version.validity().contains(at));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableVersion {
    /// The identifier used to fetch this version's grade list.
    pub id: String,
    /// The inclusive start of the version's validity.
    pub start: DateTime<FixedOffset>,
    /// The exclusive end of the version's validity, or `None` if open-ended.
    #[serde(default)]
    pub end: Option<DateTime<FixedOffset>>,
}

impl Versioned for TableVersion {
    fn validity(&self) -> ValidityInterval {
        ValidityInterval {
            start: self.start,
            end: self.end,
        }
    }
}

/// One grade of a standard-monthly-remuneration table.
///
/// Maps the half-open range of actual monthly pay
/// `[range_start, range_end)` to one standardized monthly amount used for
/// premium calculation. The top grade of a table has no upper bound.
/// Grades are unique within a table and delivered in ascending order,
/// which is preserved for output but carries no computational meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemunerationGrade {
    /// The grade number, unique within its table.
    pub grade: u32,
    /// The standardized monthly remuneration for the grade.
    pub remuneration: Decimal,
    /// The inclusive lower bound of actual monthly pay mapping to this grade.
    pub range_start: Decimal,
    /// The exclusive upper bound, or `None` for the top grade.
    #[serde(default)]
    pub range_end: Option<Decimal>,
}

impl RemunerationGrade {
    /// Checks the pay-range invariant: a present upper bound must be above
    /// the lower bound.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPayRange`] when `range_end <= range_start`.
    pub fn validate(&self) -> EngineResult<()> {
        if let Some(range_end) = self.range_end {
            if range_end <= self.range_start {
                return Err(EngineError::InvalidPayRange { grade: self.grade });
            }
        }
        Ok(())
    }
}
