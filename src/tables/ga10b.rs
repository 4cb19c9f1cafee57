/// GA10B (Ampere mobile) table generators
///
/// Hardware-specific tables for the GA10B chip. The L2 traffic breakdowns
/// take a `show_generic_workflow` flag at construction time; when set, the
/// table carries extra rows describing the copy-engine paths a generic
/// (non-graphics) workload exercises.
use crate::report::types::{DataTable, TableCell};
use crate::tables::{HardwareTables, TableGenerator};

/// Hardware table set for GA10B
#[derive(Debug, Default, Clone, Copy)]
pub struct Ga10bTables;

impl HardwareTables for Ga10bTables {
    fn device_properties(&self) -> Box<dyn TableGenerator> {
        Box::new(DevicePropertiesGenerator)
    }

    fn top_throughputs(&self) -> Box<dyn TableGenerator> {
        Box::new(TopThroughputsGenerator)
    }

    fn l2_traffic_by_memory_aperture_short_breakdown(
        &self,
        show_generic_workflow: bool,
    ) -> Box<dyn TableGenerator> {
        Box::new(L2TrafficByMemoryApertureShortBreakdownGenerator {
            show_generic_workflow,
        })
    }

    fn l2_traffic_by_src_breakdown(
        &self,
        show_generic_workflow: bool,
    ) -> Box<dyn TableGenerator> {
        Box::new(L2TrafficBySrcBreakdownGenerator {
            show_generic_workflow,
        })
    }

    fn l2_traffic_by_memory_aperture_breakdown(
        &self,
        show_generic_workflow: bool,
    ) -> Box<dyn TableGenerator> {
        Box::new(L2TrafficByMemoryApertureBreakdownGenerator {
            show_generic_workflow,
        })
    }

    fn l2_traffic_by_operation_breakdown(
        &self,
        show_generic_workflow: bool,
    ) -> Box<dyn TableGenerator> {
        Box::new(L2TrafficByOperationBreakdownGenerator {
            show_generic_workflow,
        })
    }

    fn sm_throughputs(&self) -> Box<dyn TableGenerator> {
        Box::new(SmThroughputsGenerator)
    }

    fn sm_inst_executed(&self) -> Box<dyn TableGenerator> {
        Box::new(SmInstExecutedGenerator)
    }

    fn sm_resource_usage(&self) -> Box<dyn TableGenerator> {
        Box::new(SmResourceUsageGenerator)
    }

    fn raster_dataflow(&self) -> Box<dyn TableGenerator> {
        Box::new(RasterDataflowGenerator)
    }

    fn raytracing_breakdown(&self) -> Box<dyn TableGenerator> {
        Box::new(RaytracingBreakdownGenerator)
    }

    fn ranges_summary(&self) -> Box<dyn TableGenerator> {
        Box::new(RangesSummaryGenerator)
    }
}

pub struct DevicePropertiesGenerator;

impl TableGenerator for DevicePropertiesGenerator {
    fn make_data_table(&self) -> DataTable {
        DataTable::new(vec!["Property".to_string(), "Value".to_string()])
            .with_title("Device Properties")
            .with_row(vec![
                "Device Name".into(),
                TableCell::counter("device__attribute_display_name"),
            ])
            .with_row(vec!["Chip".into(), "GA10B".into()])
            .with_row(vec![
                "SM Count".into(),
                TableCell::counter("device__attribute_num_sms"),
            ])
            .with_row(vec![
                "L2 Cache Size".into(),
                TableCell::counter("device__attribute_l2s_size_bytes"),
            ])
    }
}

pub struct TopThroughputsGenerator;

impl TableGenerator for TopThroughputsGenerator {
    fn make_data_table(&self) -> DataTable {
        DataTable::new(vec!["Unit".to_string(), "% of Peak".to_string()])
            .with_title("Top Throughputs")
            .with_row(vec![
                "SM".into(),
                TableCell::throughput("sm__throughput.avg.pct_of_peak_sustained_elapsed"),
            ])
            .with_row(vec![
                "L1TEX".into(),
                TableCell::throughput("l1tex__throughput.avg.pct_of_peak_sustained_elapsed"),
            ])
            .with_row(vec![
                "L2".into(),
                TableCell::throughput("lts__throughput.avg.pct_of_peak_sustained_elapsed"),
            ])
            .with_row(vec![
                "DRAM".into(),
                TableCell::throughput("dram__throughput.avg.pct_of_peak_sustained_elapsed"),
            ])
            .with_row(vec![
                "PDA".into(),
                TableCell::throughput("pda__throughput.avg.pct_of_peak_sustained_elapsed"),
            ])
            .with_row(vec![
                "RASTER".into(),
                TableCell::throughput("raster__throughput.avg.pct_of_peak_sustained_elapsed"),
            ])
    }
}

// Rows shared by the short and full by-aperture breakdowns.
fn aperture_rows(table: DataTable) -> DataTable {
    table
        .with_row(vec![
            "Device Memory".into(),
            TableCell::counter("lts__t_sectors_aperture_device.sum"),
        ])
        .with_row(vec![
            "System Memory".into(),
            TableCell::counter("lts__t_sectors_aperture_sysmem.sum"),
        ])
        .with_row(vec![
            "Peer Memory".into(),
            TableCell::counter("lts__t_sectors_aperture_peer.sum"),
        ])
}

fn generic_workflow_rows(table: DataTable) -> DataTable {
    table
        .with_row(vec![
            "Copy Engine Reads".into(),
            TableCell::counter("lts__t_sectors_srcunit_ltcfabric_op_read.sum"),
        ])
        .with_row(vec![
            "Copy Engine Writes".into(),
            TableCell::counter("lts__t_sectors_srcunit_ltcfabric_op_write.sum"),
        ])
}

pub struct L2TrafficByMemoryApertureShortBreakdownGenerator {
    pub show_generic_workflow: bool,
}

impl TableGenerator for L2TrafficByMemoryApertureShortBreakdownGenerator {
    fn make_data_table(&self) -> DataTable {
        let table = DataTable::new(vec!["Aperture".to_string(), "Sectors".to_string()])
            .with_title("L2 Traffic by Memory Aperture");
        let table = aperture_rows(table);
        if self.show_generic_workflow {
            generic_workflow_rows(table)
        } else {
            table
        }
    }
}

pub struct L2TrafficBySrcBreakdownGenerator {
    pub show_generic_workflow: bool,
}

impl TableGenerator for L2TrafficBySrcBreakdownGenerator {
    fn make_data_table(&self) -> DataTable {
        let table = DataTable::new(vec!["Source Unit".to_string(), "Sectors".to_string()])
            .with_title("L2 Traffic by Source")
            .with_row(vec![
                "TEX".into(),
                TableCell::counter("lts__t_sectors_srcunit_tex.sum"),
            ])
            .with_row(vec![
                "PE".into(),
                TableCell::counter("lts__t_sectors_srcunit_pe.sum"),
            ])
            .with_row(vec![
                "RASTER".into(),
                TableCell::counter("lts__t_sectors_srcunit_raster.sum"),
            ])
            .with_row(vec![
                "CROP".into(),
                TableCell::counter("lts__t_sectors_srcunit_crop.sum"),
            ])
            .with_row(vec![
                "ZROP".into(),
                TableCell::counter("lts__t_sectors_srcunit_zrop.sum"),
            ]);
        if self.show_generic_workflow {
            generic_workflow_rows(table)
        } else {
            table
        }
    }
}

pub struct L2TrafficByMemoryApertureBreakdownGenerator {
    pub show_generic_workflow: bool,
}

impl TableGenerator for L2TrafficByMemoryApertureBreakdownGenerator {
    fn make_data_table(&self) -> DataTable {
        let table = DataTable::new(vec!["Aperture / Operation".to_string(), "Sectors".to_string()])
            .with_title("L2 Traffic by Memory Aperture (Full)");
        let table = aperture_rows(table)
            .with_row(vec![
                "Device Memory Reads".into(),
                TableCell::counter("lts__t_sectors_aperture_device_op_read.sum"),
            ])
            .with_row(vec![
                "Device Memory Writes".into(),
                TableCell::counter("lts__t_sectors_aperture_device_op_write.sum"),
            ])
            .with_row(vec![
                "System Memory Reads".into(),
                TableCell::counter("lts__t_sectors_aperture_sysmem_op_read.sum"),
            ])
            .with_row(vec![
                "System Memory Writes".into(),
                TableCell::counter("lts__t_sectors_aperture_sysmem_op_write.sum"),
            ]);
        if self.show_generic_workflow {
            generic_workflow_rows(table)
        } else {
            table
        }
    }
}

pub struct L2TrafficByOperationBreakdownGenerator {
    pub show_generic_workflow: bool,
}

impl TableGenerator for L2TrafficByOperationBreakdownGenerator {
    fn make_data_table(&self) -> DataTable {
        let table = DataTable::new(vec!["Operation".to_string(), "Sectors".to_string()])
            .with_title("L2 Traffic by Operation")
            .with_row(vec![
                "Read".into(),
                TableCell::counter("lts__t_sectors_op_read.sum"),
            ])
            .with_row(vec![
                "Write".into(),
                TableCell::counter("lts__t_sectors_op_write.sum"),
            ])
            .with_row(vec![
                "Atomic".into(),
                TableCell::counter("lts__t_sectors_op_atom.sum"),
            ])
            .with_row(vec![
                "Reduction".into(),
                TableCell::counter("lts__t_sectors_op_red.sum"),
            ]);
        if self.show_generic_workflow {
            generic_workflow_rows(table)
        } else {
            table
        }
    }
}

pub struct SmThroughputsGenerator;

impl TableGenerator for SmThroughputsGenerator {
    fn make_data_table(&self) -> DataTable {
        DataTable::new(vec!["Pipe".to_string(), "% of Peak".to_string()])
            .with_title("SM Throughputs")
            .with_row(vec![
                "SM Overall".into(),
                TableCell::throughput("sm__throughput.avg.pct_of_peak_sustained_elapsed"),
            ])
            .with_row(vec![
                "ALU".into(),
                TableCell::throughput("sm__inst_executed_pipe_alu.avg.pct_of_peak_sustained_elapsed"),
            ])
            .with_row(vec![
                "FMA".into(),
                TableCell::throughput("sm__inst_executed_pipe_fma.avg.pct_of_peak_sustained_elapsed"),
            ])
            .with_row(vec![
                "FP64".into(),
                TableCell::throughput("sm__inst_executed_pipe_fp64.avg.pct_of_peak_sustained_elapsed"),
            ])
            .with_row(vec![
                "Tensor".into(),
                TableCell::throughput("sm__pipe_tensor_cycles_active.avg.pct_of_peak_sustained_elapsed"),
            ])
            .with_row(vec![
                "XU".into(),
                TableCell::throughput("sm__inst_executed_pipe_xu.avg.pct_of_peak_sustained_elapsed"),
            ])
    }
}

pub struct SmInstExecutedGenerator;

impl TableGenerator for SmInstExecutedGenerator {
    fn make_data_table(&self) -> DataTable {
        DataTable::new(vec!["Pipe".to_string(), "Instructions".to_string()])
            .with_title("SM Instructions Executed")
            .with_row(vec![
                "All".into(),
                TableCell::counter("sm__inst_executed.sum"),
            ])
            .with_row(vec![
                "ALU".into(),
                TableCell::counter("sm__inst_executed_pipe_alu.sum"),
            ])
            .with_row(vec![
                "FMA".into(),
                TableCell::counter("sm__inst_executed_pipe_fma.sum"),
            ])
            .with_row(vec![
                "LSU".into(),
                TableCell::counter("sm__inst_executed_pipe_lsu.sum"),
            ])
            .with_row(vec![
                "TEX".into(),
                TableCell::counter("sm__inst_executed_pipe_tex.sum"),
            ])
    }
}

pub struct SmResourceUsageGenerator;

impl TableGenerator for SmResourceUsageGenerator {
    fn make_data_table(&self) -> DataTable {
        DataTable::new(vec!["Resource".to_string(), "Usage".to_string()])
            .with_title("SM Resource Usage")
            .with_row(vec![
                "Warp Occupancy".into(),
                TableCell::ratio("sm__warps_active.avg.pct_of_peak_sustained_active"),
            ])
            .with_row(vec![
                "Register Allocation".into(),
                TableCell::ratio("sm__registers_allocated.avg.pct_of_peak_sustained_active"),
            ])
            .with_row(vec![
                "Shared Memory".into(),
                TableCell::ratio("sm__shmem_allocated.avg.pct_of_peak_sustained_active"),
            ])
    }
}

pub struct RasterDataflowGenerator;

impl TableGenerator for RasterDataflowGenerator {
    fn make_data_table(&self) -> DataTable {
        DataTable::new(vec!["Stage".to_string(), "Count".to_string()])
            .with_title("Raster Dataflow")
            .with_row(vec![
                "Rasterized Samples".into(),
                TableCell::counter("raster__frstr_output_samples.sum"),
            ])
            .with_row(vec![
                "Early-Z Passed".into(),
                TableCell::counter("raster__zrop_samples_passed_z.sum"),
            ])
            .with_row(vec![
                "Color Writes".into(),
                TableCell::counter("crop__write_requests.sum"),
            ])
    }
}

pub struct RaytracingBreakdownGenerator;

impl TableGenerator for RaytracingBreakdownGenerator {
    fn make_data_table(&self) -> DataTable {
        DataTable::new(vec!["Metric".to_string(), "Value".to_string()])
            .with_title("Raytracing Breakdown")
            .with_row(vec![
                "RT Core Active".into(),
                TableCell::throughput("rtcore__throughput.avg.pct_of_peak_sustained_elapsed"),
            ])
            .with_row(vec![
                "Rays Launched".into(),
                TableCell::counter("rtcore__rays_launched.sum"),
            ])
            .with_row(vec![
                "Triangle Tests".into(),
                TableCell::counter("rtcore__tri_tests.sum"),
            ])
    }
}

pub struct RangesSummaryGenerator;

impl TableGenerator for RangesSummaryGenerator {
    fn make_data_table(&self) -> DataTable {
        // One template row; the report writer repeats it per measured range.
        DataTable::new(vec![
            "Range".to_string(),
            "GPU Cycles".to_string(),
            "SM Throughput".to_string(),
            "DRAM Throughput".to_string(),
        ])
        .with_title("Measured Ranges")
        .with_row(vec![
            "(per range)".into(),
            TableCell::counter("gpc__cycles_elapsed.max"),
            TableCell::throughput("sm__throughput.avg.pct_of_peak_sustained_elapsed"),
            TableCell::throughput("dram__throughput.avg.pct_of_peak_sustained_elapsed"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::types::MetricKind;

    #[test]
    fn generic_workflow_flag_adds_copy_engine_rows() {
        let without = L2TrafficByMemoryApertureShortBreakdownGenerator {
            show_generic_workflow: false,
        }
        .make_data_table();
        let with = L2TrafficByMemoryApertureShortBreakdownGenerator {
            show_generic_workflow: true,
        }
        .make_data_table();
        assert_eq!(with.rows.len(), without.rows.len() + 2);
    }

    #[test]
    fn top_throughputs_are_all_throughput_metrics() {
        let table = TopThroughputsGenerator.make_data_table();
        for row in &table.rows {
            assert_eq!(row[1].metric_ref().unwrap().kind, MetricKind::Throughput);
        }
    }

    #[test]
    fn device_properties_mixes_text_and_metrics() {
        let table = DevicePropertiesGenerator.make_data_table();
        assert!(table.rows.iter().any(|r| r[1].metric_ref().is_none()));
        assert!(table.rows.iter().any(|r| r[1].metric_ref().is_some()));
    }
}
