//! Report emission and the report-generation pipeline.
//!
//! This module turns computed premium rows into the CSV report artifact:
//! [`write_report`] emits the fixed-header table to any writer, and
//! [`generate_report`] runs the whole fetch → resolve → compute → emit
//! sequence for one organization and reference date.

mod emitter;
mod pipeline;

pub use emitter::{REPORT_HEADER, write_report};
pub use pipeline::generate_report;
