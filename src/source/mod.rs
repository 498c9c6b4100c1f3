//! Data-source access for premium reference data.
//!
//! This module defines the [`PremiumDataSource`] trait — the injectable
//! seam through which the engine obtains its time-partitioned datasets —
//! and [`JsonDirSource`], the JSON-directory implementation used in
//! production and tests.

mod json_dir;

pub use json_dir::JsonDirSource;

use crate::error::EngineResult;
use crate::models::{RateRevision, RemunerationGrade, TableVersion};

/// Provides the time-partitioned reference datasets the engine consumes.
///
/// Implementations must deliver records in ascending `start` order with
/// non-overlapping validity intervals, as the published datasets are laid
/// out; the resolver relies on that contract and performs a linear
/// first-match scan. Each fetch is a single blocking call with no caching
/// or retry — a failure aborts the run.
pub trait PremiumDataSource {
    /// Fetches the index of remuneration-table versions.
    fn fetch_table_index(&self) -> EngineResult<Vec<TableVersion>>;

    /// Fetches the ordered grade list of one table version.
    fn fetch_table(&self, id: &str) -> EngineResult<Vec<RemunerationGrade>>;

    /// Fetches the rate-revision history of the named organization.
    fn fetch_rate_revisions(&self, organization: &str) -> EngineResult<Vec<RateRevision>>;
}
