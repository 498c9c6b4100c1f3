//! CSV emission of computed premium rows.

use std::io::Write;

use crate::error::{EngineError, EngineResult};
use crate::models::{PremiumRow, RemunerationGrade};

/// The ten field labels of the report header, in emission order.
///
/// The labels and their order are fixed across runs; consumers depend on
/// column position. Columns five through seven carry the figures for
/// insured persons outside the care-insurance bracket, columns eight
/// through ten the care-inclusive figures.
pub const REPORT_HEADER: [&str; 10] = [
    "標準報酬_等級",
    "標準報酬_月額",
    "報酬月額_以上",
    "報酬月額_未満",
    "介護保険の被保険者でない場合_全額",
    "介護保険の被保険者でない場合_折半額",
    "介護保険の被保険者でない場合_控除額",
    "介護保険の被保険者の場合_全額",
    "介護保険の被保険者の場合_折半額",
    "介護保険の被保険者の場合_控除額",
];

/// Writes the premium report to `writer`.
///
/// Emits the [`REPORT_HEADER`] line followed by one line per grade, in the
/// order the rows are supplied (the grade table's order). Every value is
/// rendered in its canonical decimal textual form; an absent upper pay
/// bound renders as an empty field.
///
/// The write is not atomic: on failure the destination is left in an
/// undefined partial state and the caller should discard it.
///
/// # Errors
///
/// Returns [`EngineError::ReportWriteError`] when the underlying writer
/// fails.
pub fn write_report<'a, W, I>(writer: W, rows: I) -> EngineResult<()>
where
    W: Write,
    I: IntoIterator<Item = (&'a RemunerationGrade, &'a PremiumRow)>,
{
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(REPORT_HEADER)
        .map_err(write_error)?;

    for (grade, row) in rows {
        csv_writer
            .write_record([
                grade.grade.to_string(),
                grade.remuneration.to_string(),
                grade.range_start.to_string(),
                grade
                    .range_end
                    .map(|bound| bound.to_string())
                    .unwrap_or_default(),
                row.premium.to_string(),
                row.half_premium.to_string(),
                row.employee_premium.to_string(),
                row.all_premium.to_string(),
                row.half_all_premium.to_string(),
                row.all_employee_premium.to_string(),
            ])
            .map_err(write_error)?;
    }

    csv_writer.flush().map_err(|e| EngineError::ReportWriteError {
        message: e.to_string(),
    })
}

fn write_error(error: csv::Error) -> EngineError {
    EngineError::ReportWriteError {
        message: error.to_string(),
    }
}
