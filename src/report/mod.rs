/// Report assembly framework
///
/// ## Usage
/// 1. Pick a hardware table set (or implement `HardwareTables` for a new chip)
/// 2. Call `per_range_report_definition()` / `summary_report_definition()`
/// 3. Hand the returned `ReportDefinition` to a report writer, which collects
///    the required metrics and substitutes them into the HTML placeholders
pub mod definitions;
pub mod html;
pub mod requirements;
pub mod types;

// Re-export the assembly entry points
pub use definitions::{
    per_range_report_definition, per_range_report_definition_with, summary_report_definition,
    summary_report_definition_with,
};

// Re-export core types
pub use types::{DataSection, DataTable, MetricKind, MetricRef, ReportDefinition, TableCell};

// Re-export renderers and extraction helpers
pub use html::{render_range_html, render_summary_html};
pub use requirements::{required_counters, required_ratios, required_throughputs};
