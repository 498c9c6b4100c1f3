//! End-to-end report generation.

use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset};
use tracing::info;

use crate::calculation::compute_premium_row;
use crate::error::{EngineError, EngineResult};
use crate::resolve::resolve_active;
use crate::source::PremiumDataSource;

use super::emitter::write_report;

/// Generates the premium report for `organization` as of `reference_date`.
///
/// Runs the whole sequence as blocking calls with no overlap or retry:
/// fetch the table index, resolve the table version in force, fetch its
/// grades, fetch the organization's rate revisions, resolve the revision in
/// force, compute one premium row per grade, and write the CSV artifact.
/// The two resolutions use the same reference date independently; no
/// consistency is required between the selected intervals, since tables
/// and rates change on different schedules.
///
/// The artifact is written to `output_dir`, named from the resolved
/// revision's effective start date (`YYYY-MM-DD.csv`), overwriting any
/// previous artifact of the same name. Returns the artifact's path.
///
/// # Errors
///
/// The first failing step aborts the run: the run either produces one
/// complete, correct artifact or none (a failed write may leave a partial
/// file behind, which the caller should discard).
pub fn generate_report<S: PremiumDataSource>(
    source: &S,
    organization: &str,
    reference_date: DateTime<FixedOffset>,
    output_dir: &Path,
) -> EngineResult<PathBuf> {
    info!(organization, %reference_date, "Generating premium report");

    let table_index = source.fetch_table_index()?;
    let table_version = resolve_active(&table_index, "remuneration table", reference_date)?;
    info!(table_id = %table_version.id, "Resolved active remuneration table");

    let grades = source.fetch_table(&table_version.id)?;

    let revisions = source.fetch_rate_revisions(organization)?;
    let revision = resolve_active(&revisions, "rate revision", reference_date)?;
    info!(revision_start = %revision.start, "Resolved active rate revision");

    let rows: Vec<_> = grades
        .iter()
        .map(|grade| compute_premium_row(grade, revision))
        .collect();

    let path = output_dir.join(format!("{}.csv", revision.start.format("%Y-%m-%d")));
    let file = File::create(&path).map_err(|e| EngineError::ReportWriteError {
        message: format!("{}: {}", path.display(), e),
    })?;
    write_report(file, grades.iter().zip(rows.iter()))?;

    info!(path = %path.display(), rows = rows.len(), "Premium report written");
    Ok(path)
}
