//! Error types for the premium table engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during report generation. Every
//! error is fatal for a run: the engine either produces one complete report
//! artifact or none.

use chrono::{DateTime, FixedOffset};
use thiserror::Error;

/// The main error type for the premium table engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use premium_engine::error::EngineError;
///
/// let error = EngineError::SourceNotFound {
///     path: "/missing/remuneration-tables.json".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Data source file not found: /missing/remuneration-tables.json"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No record of the named dataset is in force on the reference date.
    ///
    /// Retrying with the same date cannot succeed; the caller must supply a
    /// covered date or updated source data.
    #[error("No active {dataset} for reference date {date}")]
    NoActiveRecord {
        /// The dataset that had no active record (e.g. "rate revision").
        dataset: String,
        /// The reference date used for resolution.
        date: DateTime<FixedOffset>,
    },

    /// A data source file was not found at the specified path.
    #[error("Data source file not found: {path}")]
    SourceNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A data source file could not be parsed.
    #[error("Failed to parse data source file '{path}': {message}")]
    SourceParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A fetched record carries a validity interval that ends on or before
    /// it starts.
    #[error("Invalid validity interval: end {end} is not after start {start}")]
    InvalidInterval {
        /// The interval's start instant.
        start: DateTime<FixedOffset>,
        /// The offending end instant.
        end: DateTime<FixedOffset>,
    },

    /// A remuneration grade carries a pay range whose upper bound is not
    /// above its lower bound.
    #[error("Invalid pay range for grade {grade}: upper bound is not above lower bound")]
    InvalidPayRange {
        /// The grade number of the offending record.
        grade: u32,
    },

    /// The report artifact could not be created or written.
    #[error("Failed to write report: {message}")]
    ReportWriteError {
        /// A description of the write failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_no_active_record_displays_dataset_and_date() {
        let error = EngineError::NoActiveRecord {
            dataset: "rate revision".to_string(),
            date: date("2025-03-01T00:00:00+09:00"),
        };
        assert_eq!(
            error.to_string(),
            "No active rate revision for reference date 2025-03-01 00:00:00 +09:00"
        );
    }

    #[test]
    fn test_source_not_found_displays_path() {
        let error = EngineError::SourceNotFound {
            path: "/missing/organizations/tokyo.json".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Data source file not found: /missing/organizations/tokyo.json"
        );
    }

    #[test]
    fn test_source_parse_error_displays_path_and_message() {
        let error = EngineError::SourceParseError {
            path: "/data/bad.json".to_string(),
            message: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse data source file '/data/bad.json': expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_invalid_interval_displays_bounds() {
        let error = EngineError::InvalidInterval {
            start: date("2025-03-01T00:00:00+09:00"),
            end: date("2024-03-01T00:00:00+09:00"),
        };
        assert_eq!(
            error.to_string(),
            "Invalid validity interval: end 2024-03-01 00:00:00 +09:00 \
             is not after start 2025-03-01 00:00:00 +09:00"
        );
    }

    #[test]
    fn test_invalid_pay_range_displays_grade() {
        let error = EngineError::InvalidPayRange { grade: 12 };
        assert_eq!(
            error.to_string(),
            "Invalid pay range for grade 12: upper bound is not above lower bound"
        );
    }

    #[test]
    fn test_report_write_error_displays_message() {
        let error = EngineError::ReportWriteError {
            message: "permission denied".to_string(),
        };
        assert_eq!(error.to_string(), "Failed to write report: permission denied");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_source_not_found() -> EngineResult<()> {
            Err(EngineError::SourceNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_source_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
