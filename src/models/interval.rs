//! Validity intervals for time-partitioned reference data.
//!
//! This module defines the [`ValidityInterval`] type and the [`Versioned`]
//! trait implemented by every record that is effective for a bounded (or
//! open-ended) period of time.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A half-open validity period.
///
/// The start instant is included, the end instant is excluded. An absent
/// end means the period is open-ended and necessarily the last validity
/// period of its dataset. All instants carry an explicit timezone offset
/// as delivered by the data source.
///
/// # Example
///
/// ```
/// use premium_engine::models::ValidityInterval;
/// use chrono::DateTime;
///
/// let interval = ValidityInterval {
///     start: DateTime::parse_from_rfc3339("2024-03-01T00:00:00+09:00").unwrap(),
///     end: Some(DateTime::parse_from_rfc3339("2025-03-01T00:00:00+09:00").unwrap()),
/// };
///
/// let at = DateTime::parse_from_rfc3339("2024-06-15T00:00:00+09:00").unwrap();
/// assert!(interval.contains(at));
///
/// // The end instant itself is excluded.
/// let end = DateTime::parse_from_rfc3339("2025-03-01T00:00:00+09:00").unwrap();
/// assert!(!interval.contains(end));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityInterval {
    /// The inclusive start instant of the period.
    pub start: DateTime<FixedOffset>,
    /// The exclusive end instant, or `None` for an open-ended period.
    #[serde(default)]
    pub end: Option<DateTime<FixedOffset>>,
}

impl ValidityInterval {
    /// Returns whether the interval contains the given instant.
    ///
    /// A bounded interval contains `at` when `start <= at < end`; an
    /// open-ended interval contains `at` when `start <= at`.
    pub fn contains(&self, at: DateTime<FixedOffset>) -> bool {
        match self.end {
            Some(end) => self.start <= at && at < end,
            None => self.start <= at,
        }
    }

    /// Checks the interval invariant: a present end must be after the start.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInterval`] when `end <= start`.
    pub fn validate(&self) -> EngineResult<()> {
        if let Some(end) = self.end {
            if end <= self.start {
                return Err(EngineError::InvalidInterval {
                    start: self.start,
                    end,
                });
            }
        }
        Ok(())
    }
}

/// A record that is effective during a [`ValidityInterval`].
///
/// This is the seam the versioned-record resolver is generic over: table
/// versions and rate revisions both expose their validity through it.
pub trait Versioned {
    /// Returns the record's validity interval.
    fn validity(&self) -> ValidityInterval;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn bounded() -> ValidityInterval {
        ValidityInterval {
            start: date("2024-03-01T00:00:00+09:00"),
            end: Some(date("2025-03-01T00:00:00+09:00")),
        }
    }

    #[test]
    fn test_contains_start_instant() {
        assert!(bounded().contains(date("2024-03-01T00:00:00+09:00")));
    }

    #[test]
    fn test_excludes_end_instant() {
        assert!(!bounded().contains(date("2025-03-01T00:00:00+09:00")));
    }

    #[test]
    fn test_contains_instant_within_bounds() {
        assert!(bounded().contains(date("2024-09-15T12:34:56+09:00")));
    }

    #[test]
    fn test_excludes_instant_before_start() {
        assert!(!bounded().contains(date("2024-02-29T23:59:59+09:00")));
    }

    #[test]
    fn test_open_ended_contains_any_later_instant() {
        let interval = ValidityInterval {
            start: date("2025-03-01T00:00:00+09:00"),
            end: None,
        };
        assert!(interval.contains(date("2025-03-01T00:00:00+09:00")));
        assert!(interval.contains(date("2099-12-31T00:00:00+09:00")));
        assert!(!interval.contains(date("2025-02-28T00:00:00+09:00")));
    }

    #[test]
    fn test_contains_compares_instants_across_offsets() {
        // 2025-02-28T23:00:00+08:00 is 2025-03-01T00:00:00+09:00: in force.
        let interval = ValidityInterval {
            start: date("2025-03-01T00:00:00+09:00"),
            end: None,
        };
        assert!(interval.contains(date("2025-02-28T23:00:00+08:00")));
    }

    #[test]
    fn test_validate_accepts_ordered_bounds() {
        assert!(bounded().validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_open_ended() {
        let interval = ValidityInterval {
            start: date("2025-03-01T00:00:00+09:00"),
            end: None,
        };
        assert!(interval.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_end_before_start() {
        let interval = ValidityInterval {
            start: date("2025-03-01T00:00:00+09:00"),
            end: Some(date("2024-03-01T00:00:00+09:00")),
        };
        match interval.validate().unwrap_err() {
            EngineError::InvalidInterval { start, end } => {
                assert_eq!(start, date("2025-03-01T00:00:00+09:00"));
                assert_eq!(end, date("2024-03-01T00:00:00+09:00"));
            }
            other => panic!("Expected InvalidInterval, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_end_equal_to_start() {
        let instant = date("2025-03-01T00:00:00+09:00");
        let interval = ValidityInterval {
            start: instant,
            end: Some(instant),
        };
        assert!(interval.validate().is_err());
    }

    #[test]
    fn test_interval_serialization_round_trip() {
        let interval = bounded();
        let json = serde_json::to_string(&interval).unwrap();
        let deserialized: ValidityInterval = serde_json::from_str(&json).unwrap();
        assert_eq!(interval, deserialized);
    }
}
