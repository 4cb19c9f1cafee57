//! GPU profiler report assembly.
//!
//! Composes pre-built metric table generators into ordered report sections,
//! renders the sections to an HTML document body, and extracts the set of GPU
//! counters, ratios, and throughputs the report needs in order to be
//! populated by a downstream report writer.

pub mod report;
pub mod tables;

pub use crate::report::definitions::{
    per_range_report_definition, per_range_report_definition_with, summary_report_definition,
    summary_report_definition_with,
};
pub use crate::report::types::{
    DataSection, DataTable, MetricKind, MetricRef, ReportDefinition, TableCell,
};
pub use crate::tables::{for_chip, CommonTables, HardwareTables, TableGenerator};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("unsupported chip: {0}")]
    UnsupportedChip(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
