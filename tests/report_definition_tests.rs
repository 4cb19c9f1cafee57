//! End-to-end tests of report assembly against stub table sets.

use gpuperf::report::{
    per_range_report_definition, per_range_report_definition_with, summary_report_definition,
    summary_report_definition_with,
};
use gpuperf::{
    for_chip, CommonTables, DataTable, HardwareTables, ReportDefinition, TableCell, TableGenerator,
};
use pretty_assertions::{assert_eq, assert_ne};

struct StubGenerator {
    table: DataTable,
}

impl TableGenerator for StubGenerator {
    fn make_data_table(&self) -> DataTable {
        self.table.clone()
    }
}

fn empty_table() -> Box<dyn TableGenerator> {
    Box::new(StubGenerator {
        table: DataTable::new(vec!["Metric".to_string(), "Value".to_string()]),
    })
}

fn table_with_counter(name: &str) -> Box<dyn TableGenerator> {
    Box::new(StubGenerator {
        table: DataTable::new(vec!["Metric".to_string(), "Value".to_string()])
            .with_row(vec![name.into(), TableCell::counter(name)]),
    })
}

/// Hardware stub: only the device properties table carries a metric.
#[derive(Debug)]
struct StubHardware;

impl HardwareTables for StubHardware {
    fn device_properties(&self) -> Box<dyn TableGenerator> {
        table_with_counter("gpc__cycles_elapsed.sum")
    }
    fn top_throughputs(&self) -> Box<dyn TableGenerator> {
        empty_table()
    }
    fn l2_traffic_by_memory_aperture_short_breakdown(
        &self,
        _show_generic_workflow: bool,
    ) -> Box<dyn TableGenerator> {
        empty_table()
    }
    fn l2_traffic_by_src_breakdown(
        &self,
        _show_generic_workflow: bool,
    ) -> Box<dyn TableGenerator> {
        empty_table()
    }
    fn l2_traffic_by_memory_aperture_breakdown(
        &self,
        _show_generic_workflow: bool,
    ) -> Box<dyn TableGenerator> {
        empty_table()
    }
    fn l2_traffic_by_operation_breakdown(
        &self,
        _show_generic_workflow: bool,
    ) -> Box<dyn TableGenerator> {
        empty_table()
    }
    fn sm_throughputs(&self) -> Box<dyn TableGenerator> {
        empty_table()
    }
    fn sm_inst_executed(&self) -> Box<dyn TableGenerator> {
        empty_table()
    }
    fn sm_resource_usage(&self) -> Box<dyn TableGenerator> {
        empty_table()
    }
    fn raster_dataflow(&self) -> Box<dyn TableGenerator> {
        empty_table()
    }
    fn raytracing_breakdown(&self) -> Box<dyn TableGenerator> {
        empty_table()
    }
    fn ranges_summary(&self) -> Box<dyn TableGenerator> {
        empty_table()
    }
}

/// Common stub: only the clocks table carries a metric.
struct StubCommon;

impl CommonTables for StubCommon {
    fn clocks(&self) -> Box<dyn TableGenerator> {
        table_with_counter("sys__cycles_elapsed.sum")
    }
    fn top_level_stats(&self) -> Box<dyn TableGenerator> {
        empty_table()
    }
    fn cache_hit_rates(&self) -> Box<dyn TableGenerator> {
        empty_table()
    }
    fn l1tex_throughputs(&self) -> Box<dyn TableGenerator> {
        empty_table()
    }
    fn l1tex_traffic_breakdown(&self) -> Box<dyn TableGenerator> {
        empty_table()
    }
    fn sm_shader_execution(&self) -> Box<dyn TableGenerator> {
        empty_table()
    }
    fn sm_warp_launch_stalls(&self) -> Box<dyn TableGenerator> {
        empty_table()
    }
    fn warp_issue_stalls(&self) -> Box<dyn TableGenerator> {
        empty_table()
    }
    fn primitive_dataflow(&self) -> Box<dyn TableGenerator> {
        empty_table()
    }
    fn additional_metrics(&self) -> Box<dyn TableGenerator> {
        empty_table()
    }
    fn all_counters(&self) -> Box<dyn TableGenerator> {
        empty_table()
    }
    fn all_ratios(&self) -> Box<dyn TableGenerator> {
        empty_table()
    }
    fn all_throughputs(&self) -> Box<dyn TableGenerator> {
        empty_table()
    }
    fn collection_info(&self) -> Box<dyn TableGenerator> {
        empty_table()
    }
}

#[test]
fn per_range_requirements_are_exactly_the_stub_metrics() {
    let definition = per_range_report_definition_with(&StubHardware, &StubCommon).unwrap();

    assert_eq!(definition.name, "PerRangeReport");
    let counters: Vec<&str> = definition
        .required_counters
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(
        counters,
        vec!["gpc__cycles_elapsed.sum", "sys__cycles_elapsed.sum"]
    );
    assert!(definition.required_ratios.is_empty());
    assert!(definition.required_throughputs.is_empty());
}

#[test]
fn summary_report_from_empty_stubs() {
    // The summary report reads collection_info (common) and ranges_summary
    // (hardware); both stubs return empty tables there, so requirements are
    // empty while the two section markers still render. The metrics the stubs
    // attach to device_properties and clocks never leak in.
    let definition = summary_report_definition_with(&StubHardware, &StubCommon).unwrap();
    assert_eq!(definition.name, "SummaryReport");
    assert_eq!(definition.html.matches("<div class=\"section").count(), 2);
    assert!(definition.required_counters.is_empty());
    assert!(definition.required_ratios.is_empty());
    assert!(definition.required_throughputs.is_empty());
}

#[test]
fn repeated_assembly_is_idempotent() {
    let first = per_range_report_definition().unwrap();
    let second = per_range_report_definition().unwrap();
    assert_eq!(first, second);

    let first = summary_report_definition().unwrap();
    let second = summary_report_definition().unwrap();
    assert_eq!(first, second);
}

#[test]
fn default_per_range_report_is_populated() {
    let definition = per_range_report_definition().unwrap();
    assert!(!definition.html.is_empty());
    assert!(!definition.required_counters.is_empty());
    assert!(!definition.required_ratios.is_empty());
    assert!(!definition.required_throughputs.is_empty());

    // Requirements only contain names that appear as placeholders in the html.
    for counter in &definition.required_counters {
        assert!(
            definition
                .html
                .contains(&format!("data-counter=\"{}\"", counter)),
            "counter {} missing from html",
            counter
        );
    }
}

#[test]
fn substituted_hardware_tables_flow_through() {
    let definition = per_range_report_definition_with(&StubHardware, &StubCommon).unwrap();
    let default_definition = per_range_report_definition().unwrap();
    assert_ne!(definition.html, default_definition.html);
    assert_eq!(definition.name, default_definition.name);
}

#[test]
fn chip_lookup_feeds_assembly() {
    let hw = for_chip("ga10b").unwrap();
    let definition = summary_report_definition_with(hw.as_ref(), &StubCommon).unwrap();
    assert!(definition
        .required_counters
        .contains("gpc__cycles_elapsed.max"));

    assert!(for_chip("ad104").is_err());
}

#[test]
fn report_definition_serde_round_trip() {
    let definition = summary_report_definition().unwrap();
    let json = serde_json::to_string(&definition).unwrap();
    let decoded: ReportDefinition = serde_json::from_str(&json).unwrap();
    assert_eq!(definition, decoded);
}
