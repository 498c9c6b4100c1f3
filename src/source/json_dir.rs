//! JSON directory data source.
//!
//! This module provides the [`JsonDirSource`] type for reading the
//! reference datasets from a directory of JSON files laid out the way the
//! opendata distribution publishes them.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Organization, RateRevision, RemunerationGrade, TableVersion, Versioned};

use super::PremiumDataSource;

/// Reads the reference datasets from a directory of JSON files.
///
/// # Directory Structure
///
/// The data directory should have the following structure:
/// ```text
/// data/
/// ├── remuneration-tables.json       # Table-version index
/// ├── remuneration-tables/
/// │   └── 2016-04-01.json            # Grade list per table version
/// └── organizations/
///     └── kyoukaikenpo-tokyo.json    # Rate revisions per organization
/// ```
///
/// Every fetched record is validated before it is returned: a validity
/// interval whose end is not after its start, or a grade whose upper pay
/// bound is not above its lower bound, fails the fetch immediately.
///
/// # Example
///
/// ```no_run
/// use premium_engine::source::{JsonDirSource, PremiumDataSource};
///
/// let source = JsonDirSource::new("./data");
/// let index = source.fetch_table_index()?;
/// println!("Known table versions: {}", index.len());
/// # Ok::<(), premium_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    root: PathBuf,
}

impl JsonDirSource {
    /// Creates a source reading from the given data directory.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Loads and parses a JSON file.
    fn load_json<T: DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::SourceNotFound {
            path: path_str.clone(),
        })?;

        serde_json::from_str(&content).map_err(|e| EngineError::SourceParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

impl PremiumDataSource for JsonDirSource {
    fn fetch_table_index(&self) -> EngineResult<Vec<TableVersion>> {
        let path = self.root.join("remuneration-tables.json");
        let versions: Vec<TableVersion> = Self::load_json(&path)?;

        for version in &versions {
            version.validity().validate()?;
        }

        debug!(count = versions.len(), "Loaded remuneration-table index");
        Ok(versions)
    }

    fn fetch_table(&self, id: &str) -> EngineResult<Vec<RemunerationGrade>> {
        let path = self
            .root
            .join("remuneration-tables")
            .join(format!("{id}.json"));
        let grades: Vec<RemunerationGrade> = Self::load_json(&path)?;

        for grade in &grades {
            grade.validate()?;
        }

        debug!(table_id = id, count = grades.len(), "Loaded remuneration table");
        Ok(grades)
    }

    fn fetch_rate_revisions(&self, organization: &str) -> EngineResult<Vec<RateRevision>> {
        let path = self
            .root
            .join("organizations")
            .join(format!("{organization}.json"));
        let document: Organization = Self::load_json(&path)?;

        for revision in &document.revisions {
            revision.validity().validate()?;
        }

        debug!(
            organization,
            count = document.revisions.len(),
            "Loaded rate revisions"
        );
        Ok(document.revisions)
    }
}
