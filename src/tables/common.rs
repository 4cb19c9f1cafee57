/// Generation-independent table generators
///
/// These tables reference only metrics that exist with the same names across
/// supported hardware generations, so a single implementation serves every
/// chip. Metric cells are placeholders; values are substituted by the report
/// writer after collection.
use crate::report::types::{DataTable, TableCell};
use crate::tables::{CommonTables, TableGenerator};

/// Default set of generation-independent tables
#[derive(Debug, Default, Clone, Copy)]
pub struct CommonTableSuite;

impl CommonTables for CommonTableSuite {
    fn clocks(&self) -> Box<dyn TableGenerator> {
        Box::new(ClocksGenerator)
    }

    fn top_level_stats(&self) -> Box<dyn TableGenerator> {
        Box::new(TopLevelStatsGenerator)
    }

    fn cache_hit_rates(&self) -> Box<dyn TableGenerator> {
        Box::new(CacheHitRatesGenerator)
    }

    fn l1tex_throughputs(&self) -> Box<dyn TableGenerator> {
        Box::new(L1TexThroughputsGenerator)
    }

    fn l1tex_traffic_breakdown(&self) -> Box<dyn TableGenerator> {
        Box::new(L1TexTrafficBreakdownGenerator)
    }

    fn sm_shader_execution(&self) -> Box<dyn TableGenerator> {
        Box::new(SmShaderExecutionGenerator)
    }

    fn sm_warp_launch_stalls(&self) -> Box<dyn TableGenerator> {
        Box::new(SmWarpLaunchStallsGenerator)
    }

    fn warp_issue_stalls(&self) -> Box<dyn TableGenerator> {
        Box::new(WarpIssueStallsGenerator)
    }

    fn primitive_dataflow(&self) -> Box<dyn TableGenerator> {
        Box::new(PrimitiveDataflowGenerator)
    }

    fn additional_metrics(&self) -> Box<dyn TableGenerator> {
        Box::new(AdditionalMetricsGenerator)
    }

    fn all_counters(&self) -> Box<dyn TableGenerator> {
        Box::new(AllCountersGenerator)
    }

    fn all_ratios(&self) -> Box<dyn TableGenerator> {
        Box::new(AllRatiosGenerator)
    }

    fn all_throughputs(&self) -> Box<dyn TableGenerator> {
        Box::new(AllThroughputsGenerator)
    }

    fn collection_info(&self) -> Box<dyn TableGenerator> {
        Box::new(CollectionInfoGenerator)
    }
}

pub struct ClocksGenerator;

impl TableGenerator for ClocksGenerator {
    fn make_data_table(&self) -> DataTable {
        DataTable::new(vec!["Clock Domain".to_string(), "Average Frequency".to_string()])
            .with_title("Clocks")
            .with_row(vec![
                "GPC".into(),
                TableCell::counter("gpc__cycles_elapsed.avg.per_second"),
            ])
            .with_row(vec![
                "SYS".into(),
                TableCell::counter("sys__cycles_elapsed.avg.per_second"),
            ])
            .with_row(vec![
                "L2".into(),
                TableCell::counter("lts__cycles_elapsed.avg.per_second"),
            ])
            .with_row(vec![
                "DRAM".into(),
                TableCell::counter("dram__cycles_elapsed.avg.per_second"),
            ])
    }
}

pub struct TopLevelStatsGenerator;

impl TableGenerator for TopLevelStatsGenerator {
    fn make_data_table(&self) -> DataTable {
        DataTable::new(vec!["Statistic".to_string(), "Value".to_string()])
            .with_title("Top-Level Stats")
            .with_row(vec![
                "GPU Cycles Elapsed".into(),
                TableCell::counter("gpc__cycles_elapsed.max"),
            ])
            .with_row(vec![
                "Graphics/Compute Active".into(),
                TableCell::counter("gr__cycles_active.sum"),
            ])
            .with_row(vec![
                "SM Active Cycles".into(),
                TableCell::counter("sm__cycles_active.avg"),
            ])
            .with_row(vec![
                "SM Occupancy".into(),
                TableCell::ratio("sm__warps_active.avg.pct_of_peak_sustained_active"),
            ])
    }
}

pub struct CacheHitRatesGenerator;

impl TableGenerator for CacheHitRatesGenerator {
    fn make_data_table(&self) -> DataTable {
        DataTable::new(vec!["Cache".to_string(), "Hit Rate".to_string()])
            .with_title("Cache Hit Rates")
            .with_row(vec![
                "L1TEX".into(),
                TableCell::ratio("l1tex__t_sector_hit_rate.pct"),
            ])
            .with_row(vec![
                "L2".into(),
                TableCell::ratio("lts__t_sector_hit_rate.pct"),
            ])
    }
}

pub struct L1TexThroughputsGenerator;

impl TableGenerator for L1TexThroughputsGenerator {
    fn make_data_table(&self) -> DataTable {
        DataTable::new(vec!["Throughput".to_string(), "% of Peak".to_string()])
            .with_title("L1TEX Throughputs")
            .with_row(vec![
                "L1TEX".into(),
                TableCell::throughput("l1tex__throughput.avg.pct_of_peak_sustained_elapsed"),
            ])
            .with_row(vec![
                "L1TEX Data".into(),
                TableCell::throughput("l1tex__data_pipe_lsu_wavefronts.avg.pct_of_peak_sustained_elapsed"),
            ])
            .with_row(vec![
                "L1TEX Texture Filtering".into(),
                TableCell::throughput("l1tex__f_wavefronts.avg.pct_of_peak_sustained_elapsed"),
            ])
    }
}

pub struct L1TexTrafficBreakdownGenerator;

impl TableGenerator for L1TexTrafficBreakdownGenerator {
    fn make_data_table(&self) -> DataTable {
        DataTable::new(vec!["Operation".to_string(), "Sectors".to_string()])
            .with_title("L1TEX Traffic Breakdown")
            .with_row(vec![
                "Global Load".into(),
                TableCell::counter("l1tex__t_sectors_pipe_lsu_mem_global_op_ld.sum"),
            ])
            .with_row(vec![
                "Global Store".into(),
                TableCell::counter("l1tex__t_sectors_pipe_lsu_mem_global_op_st.sum"),
            ])
            .with_row(vec![
                "Local Load".into(),
                TableCell::counter("l1tex__t_sectors_pipe_lsu_mem_local_op_ld.sum"),
            ])
            .with_row(vec![
                "Local Store".into(),
                TableCell::counter("l1tex__t_sectors_pipe_lsu_mem_local_op_st.sum"),
            ])
            .with_row(vec![
                "Texture".into(),
                TableCell::counter("l1tex__t_sectors_pipe_tex_mem_texture.sum"),
            ])
    }
}

pub struct SmShaderExecutionGenerator;

impl TableGenerator for SmShaderExecutionGenerator {
    fn make_data_table(&self) -> DataTable {
        DataTable::new(vec!["Shader Stage".to_string(), "Warps Launched".to_string()])
            .with_title("SM Shader Execution")
            .with_row(vec![
                "Vertex".into(),
                TableCell::counter("sm__warps_launched_shader_vs.sum"),
            ])
            .with_row(vec![
                "Pixel".into(),
                TableCell::counter("sm__warps_launched_shader_ps.sum"),
            ])
            .with_row(vec![
                "Compute".into(),
                TableCell::counter("sm__warps_launched_shader_cs.sum"),
            ])
    }
}

pub struct SmWarpLaunchStallsGenerator;

impl TableGenerator for SmWarpLaunchStallsGenerator {
    fn make_data_table(&self) -> DataTable {
        DataTable::new(vec!["Stall Reason".to_string(), "% of Active Cycles".to_string()])
            .with_title("SM Warp Launch Stalls")
            .with_row(vec![
                "Register Allocation".into(),
                TableCell::ratio("sm__warp_launch_stalled_reg_alloc.avg.pct_of_peak_sustained_active"),
            ])
            .with_row(vec![
                "Warp Slot Allocation".into(),
                TableCell::ratio("sm__warp_launch_stalled_warp_alloc.avg.pct_of_peak_sustained_active"),
            ])
    }
}

pub struct WarpIssueStallsGenerator;

impl TableGenerator for WarpIssueStallsGenerator {
    fn make_data_table(&self) -> DataTable {
        DataTable::new(vec!["Stall Reason".to_string(), "Cycles per Issued Instruction".to_string()])
            .with_title("Warp Issue Stalls")
            .with_row(vec![
                "Barrier".into(),
                TableCell::ratio("smsp__average_warps_issue_stalled_barrier_per_issue_active.ratio"),
            ])
            .with_row(vec![
                "Long Scoreboard".into(),
                TableCell::ratio("smsp__average_warps_issue_stalled_long_scoreboard_per_issue_active.ratio"),
            ])
            .with_row(vec![
                "Short Scoreboard".into(),
                TableCell::ratio("smsp__average_warps_issue_stalled_short_scoreboard_per_issue_active.ratio"),
            ])
            .with_row(vec![
                "Wait".into(),
                TableCell::ratio("smsp__average_warps_issue_stalled_wait_per_issue_active.ratio"),
            ])
            .with_row(vec![
                "IMC Miss".into(),
                TableCell::ratio("smsp__average_warps_issue_stalled_imc_miss_per_issue_active.ratio"),
            ])
    }
}

pub struct PrimitiveDataflowGenerator;

impl TableGenerator for PrimitiveDataflowGenerator {
    fn make_data_table(&self) -> DataTable {
        DataTable::new(vec!["Stage".to_string(), "Primitives".to_string()])
            .with_title("Primitive Dataflow")
            .with_row(vec![
                "Primitive Distributor Input".into(),
                TableCell::counter("pda__input_prims.sum"),
            ])
            .with_row(vec![
                "Clip Input".into(),
                TableCell::counter("vpc__clip_input_prims.sum"),
            ])
            .with_row(vec![
                "Clip Output".into(),
                TableCell::counter("vpc__clip_output_prims.sum"),
            ])
            .with_row(vec![
                "Culled".into(),
                TableCell::counter("vpc__cull_culled_prims.sum"),
            ])
    }
}

pub struct AdditionalMetricsGenerator;

impl TableGenerator for AdditionalMetricsGenerator {
    fn make_data_table(&self) -> DataTable {
        DataTable::new(vec!["Metric".to_string(), "Value".to_string()])
            .with_title("Additional Metrics")
            .with_row(vec![
                "Threads per Executed Instruction".into(),
                TableCell::ratio("smsp__thread_inst_executed_per_inst_executed.ratio"),
            ])
            .with_row(vec![
                "DRAM Bytes Read".into(),
                TableCell::counter("dram__bytes_read.sum"),
            ])
            .with_row(vec![
                "DRAM Bytes Written".into(),
                TableCell::counter("dram__bytes_write.sum"),
            ])
            .with_row(vec![
                "PCIe Read Bytes".into(),
                TableCell::counter("pcie__read_bytes.sum"),
            ])
            .with_row(vec![
                "PCIe Write Bytes".into(),
                TableCell::counter("pcie__write_bytes.sum"),
            ])
    }
}

// Names listed by the exhaustive tables. One roster per metric family, shared
// with the corresponding generator below.
const EXHAUSTIVE_COUNTERS: &[&str] = &[
    "gpc__cycles_elapsed.sum",
    "sys__cycles_elapsed.sum",
    "gr__cycles_active.sum",
    "sm__cycles_active.sum",
    "sm__inst_executed.sum",
    "l1tex__t_sectors.sum",
    "lts__t_sectors.sum",
    "dram__bytes.sum",
    "pcie__read_bytes.sum",
    "pcie__write_bytes.sum",
];

const EXHAUSTIVE_RATIOS: &[&str] = &[
    "l1tex__t_sector_hit_rate.pct",
    "lts__t_sector_hit_rate.pct",
    "sm__warps_active.avg.pct_of_peak_sustained_active",
    "smsp__thread_inst_executed_per_inst_executed.ratio",
];

const EXHAUSTIVE_THROUGHPUTS: &[&str] = &[
    "sm__throughput.avg.pct_of_peak_sustained_elapsed",
    "l1tex__throughput.avg.pct_of_peak_sustained_elapsed",
    "lts__throughput.avg.pct_of_peak_sustained_elapsed",
    "dram__throughput.avg.pct_of_peak_sustained_elapsed",
    "pcie__throughput.avg.pct_of_peak_sustained_elapsed",
];

fn exhaustive_listing(
    title: &str,
    header: &str,
    names: &[&str],
    make_cell: fn(&str) -> TableCell,
) -> DataTable {
    let mut table = DataTable::new(vec![header.to_string(), "Value".to_string()]).with_title(title);
    for &name in names {
        table.add_row(vec![TableCell::text(name), make_cell(name)]);
    }
    table
}

pub struct AllCountersGenerator;

impl TableGenerator for AllCountersGenerator {
    fn make_data_table(&self) -> DataTable {
        exhaustive_listing(
            "All Counters",
            "Counter",
            EXHAUSTIVE_COUNTERS,
            |name| TableCell::counter(name),
        )
    }
}

pub struct AllRatiosGenerator;

impl TableGenerator for AllRatiosGenerator {
    fn make_data_table(&self) -> DataTable {
        exhaustive_listing("All Ratios", "Ratio", EXHAUSTIVE_RATIOS, |name| {
            TableCell::ratio(name)
        })
    }
}

pub struct AllThroughputsGenerator;

impl TableGenerator for AllThroughputsGenerator {
    fn make_data_table(&self) -> DataTable {
        exhaustive_listing(
            "All Throughputs",
            "Throughput",
            EXHAUSTIVE_THROUGHPUTS,
            |name| TableCell::throughput(name),
        )
    }
}

pub struct CollectionInfoGenerator;

impl TableGenerator for CollectionInfoGenerator {
    fn make_data_table(&self) -> DataTable {
        DataTable::new(vec!["Field".to_string(), "Value".to_string()])
            .with_title("Collection Info")
            .with_row(vec![
                "Device".into(),
                TableCell::counter("device__attribute_display_name"),
            ])
            .with_row(vec![
                "Chip".into(),
                TableCell::counter("device__attribute_chip_id"),
            ])
            .with_row(vec![
                "GPU Cycles Elapsed".into(),
                TableCell::counter("gpc__cycles_elapsed.max"),
            ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::types::MetricKind;

    #[test]
    fn clocks_reference_all_clock_domains() {
        let table = ClocksGenerator.make_data_table();
        assert_eq!(table.rows.len(), 4);
        for row in &table.rows {
            let metric = row[1].metric_ref().unwrap();
            assert_eq!(metric.kind, MetricKind::Counter);
            assert!(metric.name.ends_with("cycles_elapsed.avg.per_second"));
        }
    }

    #[test]
    fn exhaustive_listings_match_their_rosters() {
        let counters = AllCountersGenerator.make_data_table();
        assert_eq!(counters.rows.len(), EXHAUSTIVE_COUNTERS.len());

        let ratios = AllRatiosGenerator.make_data_table();
        for row in &ratios.rows {
            assert_eq!(row[1].metric_ref().unwrap().kind, MetricKind::Ratio);
        }

        let throughputs = AllThroughputsGenerator.make_data_table();
        for row in &throughputs.rows {
            assert_eq!(row[1].metric_ref().unwrap().kind, MetricKind::Throughput);
        }
    }
}
