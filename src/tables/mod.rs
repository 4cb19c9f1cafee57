/// Table generator contracts
///
/// Report assembly is generic over two collaborator interfaces: a hardware-
/// specific table set and a generation-independent common one. Each factory
/// operation returns a generator; generators produce one `DataTable` apiece.
/// Implementing `HardwareTables` for a new chip is all it takes to reuse the
/// report definitions for another hardware generation.
pub mod common;
pub mod ga10b;

use crate::report::types::DataTable;
use crate::{ReportError, Result};

/// Capability to produce one data table
pub trait TableGenerator: Send + Sync {
    fn make_data_table(&self) -> DataTable;
}

/// Hardware-generation-specific table factories
pub trait HardwareTables: std::fmt::Debug + Send + Sync {
    fn device_properties(&self) -> Box<dyn TableGenerator>;
    fn top_throughputs(&self) -> Box<dyn TableGenerator>;
    fn l2_traffic_by_memory_aperture_short_breakdown(
        &self,
        show_generic_workflow: bool,
    ) -> Box<dyn TableGenerator>;
    fn l2_traffic_by_src_breakdown(&self, show_generic_workflow: bool)
        -> Box<dyn TableGenerator>;
    fn l2_traffic_by_memory_aperture_breakdown(
        &self,
        show_generic_workflow: bool,
    ) -> Box<dyn TableGenerator>;
    fn l2_traffic_by_operation_breakdown(
        &self,
        show_generic_workflow: bool,
    ) -> Box<dyn TableGenerator>;
    fn sm_throughputs(&self) -> Box<dyn TableGenerator>;
    fn sm_inst_executed(&self) -> Box<dyn TableGenerator>;
    fn sm_resource_usage(&self) -> Box<dyn TableGenerator>;
    fn raster_dataflow(&self) -> Box<dyn TableGenerator>;
    fn raytracing_breakdown(&self) -> Box<dyn TableGenerator>;
    fn ranges_summary(&self) -> Box<dyn TableGenerator>;
}

/// Generation-independent table factories
pub trait CommonTables: Send + Sync {
    fn clocks(&self) -> Box<dyn TableGenerator>;
    fn top_level_stats(&self) -> Box<dyn TableGenerator>;
    fn cache_hit_rates(&self) -> Box<dyn TableGenerator>;
    fn l1tex_throughputs(&self) -> Box<dyn TableGenerator>;
    fn l1tex_traffic_breakdown(&self) -> Box<dyn TableGenerator>;
    fn sm_shader_execution(&self) -> Box<dyn TableGenerator>;
    fn sm_warp_launch_stalls(&self) -> Box<dyn TableGenerator>;
    fn warp_issue_stalls(&self) -> Box<dyn TableGenerator>;
    fn primitive_dataflow(&self) -> Box<dyn TableGenerator>;
    fn additional_metrics(&self) -> Box<dyn TableGenerator>;
    fn all_counters(&self) -> Box<dyn TableGenerator>;
    fn all_ratios(&self) -> Box<dyn TableGenerator>;
    fn all_throughputs(&self) -> Box<dyn TableGenerator>;
    fn collection_info(&self) -> Box<dyn TableGenerator>;
}

/// Look up the hardware table set for a chip by name
pub fn for_chip(chip: &str) -> Result<Box<dyn HardwareTables>> {
    match chip.to_ascii_lowercase().as_str() {
        "ga10b" => Ok(Box::new(ga10b::Ga10bTables)),
        other => Err(ReportError::UnsupportedChip(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_chip_resolves_known_chip() {
        let tables = for_chip("GA10B").unwrap();
        let table = tables.device_properties().make_data_table();
        assert!(!table.rows.is_empty());
    }

    #[test]
    fn for_chip_rejects_unknown_chip() {
        let err = for_chip("tu102").unwrap_err();
        assert!(matches!(err, ReportError::UnsupportedChip(ref chip) if chip == "tu102"));
    }
}
