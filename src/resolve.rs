//! Versioned-record resolution.
//!
//! This module selects the single record in force on a reference date from
//! a time-partitioned dataset. It is used twice per run, structurally
//! identically: once over the remuneration-table index and once over an
//! organization's rate revisions.

use chrono::{DateTime, FixedOffset};

use crate::error::{EngineError, EngineResult};
use crate::models::Versioned;

/// Selects the record whose validity interval contains `reference`.
///
/// The scan is linear and returns the **first** matching record. Records
/// are expected in ascending `start` order with non-overlapping intervals,
/// as delivered by the data source; that ordering is a contract of the
/// source, not enforced here — with overlapping or unsorted input the
/// result is simply the first match in delivered order.
///
/// `dataset` names the collection for error reporting.
///
/// # Errors
///
/// Returns [`EngineError::NoActiveRecord`] when no interval contains
/// `reference`: the reference date precedes the earliest start, falls in an
/// unmodeled gap, or the collection is empty. The reference data does not
/// cover the requested date, so retrying with the same date cannot succeed.
///
/// # Example
///
/// ```
/// use premium_engine::models::TableVersion;
/// use premium_engine::resolve::resolve_active;
/// use chrono::DateTime;
///
/// let versions = vec![TableVersion {
///     id: "2016-04-01".to_string(),
///     start: DateTime::parse_from_rfc3339("2016-04-01T00:00:00+09:00").unwrap(),
///     end: None,
/// }];
///
/// let reference = DateTime::parse_from_rfc3339("2025-03-01T00:00:00+09:00").unwrap();
/// let active = resolve_active(&versions, "remuneration table", reference).unwrap();
/// assert_eq!(active.id, "2016-04-01");
/// ```
pub fn resolve_active<'a, T: Versioned>(
    records: &'a [T],
    dataset: &str,
    reference: DateTime<FixedOffset>,
) -> EngineResult<&'a T> {
    records
        .iter()
        .find(|record| record.validity().contains(reference))
        .ok_or_else(|| EngineError::NoActiveRecord {
            dataset: dataset.to_string(),
            date: reference,
        })
}
