/// Report definition assembly
///
/// Composes table generators into ordered sections, renders them, and
/// extracts the metrics required to populate the result. Assembly is a pure
/// composition: any failure from a collaborator propagates to the caller
/// unchanged, and identical collaborator implementations always produce
/// structurally identical definitions.
use anyhow::Result;
use tracing::debug;

use crate::report::html::{render_range_html, render_summary_html};
use crate::report::requirements::{required_counters, required_ratios, required_throughputs};
use crate::report::types::{DataSection, ReportDefinition};
use crate::tables::common::CommonTableSuite;
use crate::tables::ga10b::Ga10bTables;
use crate::tables::{CommonTables, HardwareTables};

/// Build the per-range report definition with the default GA10B table sets
pub fn per_range_report_definition() -> Result<ReportDefinition> {
    per_range_report_definition_with(&Ga10bTables, &CommonTableSuite)
}

/// Build the per-range report definition from explicit table sets
pub fn per_range_report_definition_with(
    hw: &dyn HardwareTables,
    common: &dyn CommonTables,
) -> Result<ReportDefinition> {
    let sections = vec![
        DataSection::new(vec![
            hw.device_properties().make_data_table(),
            common.clocks().make_data_table(),
        ])
        .without_inter_table_spacing(),
        DataSection::new(vec![
            common.top_level_stats().make_data_table(),
            hw.top_throughputs().make_data_table(),
            common.cache_hit_rates().make_data_table(),
        ])
        .with_title("Overview Section"),
        DataSection::new(vec![
            hw.l2_traffic_by_memory_aperture_short_breakdown(true)
                .make_data_table(),
            hw.l2_traffic_by_src_breakdown(false).make_data_table(),
            common.l1tex_throughputs().make_data_table(),
            common.l1tex_traffic_breakdown().make_data_table(),
        ])
        .with_title("Memory Performance Section"),
        DataSection::new(vec![
            hw.sm_throughputs().make_data_table(),
            hw.sm_inst_executed().make_data_table(),
            common.sm_shader_execution().make_data_table(),
            hw.sm_resource_usage().make_data_table(),
            common.sm_warp_launch_stalls().make_data_table(),
            common.warp_issue_stalls().make_data_table(),
        ])
        .with_title("Shader Performance Section"),
        DataSection::new(vec![
            common.primitive_dataflow().make_data_table(),
            hw.raster_dataflow().make_data_table(),
            hw.raytracing_breakdown().make_data_table(),
        ])
        .with_title("3D Pipeline Section"),
        DataSection::new(vec![
            hw.l2_traffic_by_memory_aperture_breakdown(false)
                .make_data_table(),
            hw.l2_traffic_by_operation_breakdown(false).make_data_table(),
        ])
        .with_title("Additional L2 Traffic Breakdowns Section"),
        DataSection::new(vec![
            common.additional_metrics().make_data_table(),
            common.all_counters().make_data_table(),
            common.all_ratios().make_data_table(),
            common.all_throughputs().make_data_table(),
        ])
        .with_title("Exhaustive Listings Section"),
    ];

    build_definition("PerRangeReport", sections, render_range_html)
}

/// Build the summary report definition with the default GA10B table sets
pub fn summary_report_definition() -> Result<ReportDefinition> {
    summary_report_definition_with(&Ga10bTables, &CommonTableSuite)
}

/// Build the summary report definition from explicit table sets
pub fn summary_report_definition_with(
    hw: &dyn HardwareTables,
    common: &dyn CommonTables,
) -> Result<ReportDefinition> {
    let sections = vec![
        DataSection::new(vec![common.collection_info().make_data_table()]),
        DataSection::new(vec![hw.ranges_summary().make_data_table()])
            .with_title("Summary of Measured Ranges"),
    ];

    build_definition("SummaryReport", sections, render_summary_html)
}

fn build_definition(
    name: &str,
    sections: Vec<DataSection>,
    render: fn(&[DataSection]) -> Result<String>,
) -> Result<ReportDefinition> {
    let html = render(&sections)?;
    let counters = required_counters(&sections);
    let ratios = required_ratios(&sections);
    let throughputs = required_throughputs(&sections);

    debug!(
        report = name,
        sections = sections.len(),
        counters = counters.len(),
        ratios = ratios.len(),
        throughputs = throughputs.len(),
        "assembled report definition"
    );

    Ok(ReportDefinition {
        name: name.to_string(),
        html,
        required_counters: counters,
        required_ratios: ratios,
        required_throughputs: throughputs,
    })
}
