/// Required-metric extraction
///
/// Scans assembled sections for metric placeholders and returns the union of
/// referenced metric names per metric family. Extraction never invents names:
/// every returned name appears in some cell of the input.
use indexmap::IndexSet;

use crate::report::types::{DataSection, MetricKind};

/// Counters referenced by any table in any section, deduplicated
pub fn required_counters(sections: &[DataSection]) -> IndexSet<String> {
    collect(sections, MetricKind::Counter)
}

/// Ratios referenced by any table in any section, deduplicated
pub fn required_ratios(sections: &[DataSection]) -> IndexSet<String> {
    collect(sections, MetricKind::Ratio)
}

/// Throughputs referenced by any table in any section, deduplicated
pub fn required_throughputs(sections: &[DataSection]) -> IndexSet<String> {
    collect(sections, MetricKind::Throughput)
}

fn collect(sections: &[DataSection], kind: MetricKind) -> IndexSet<String> {
    let mut names = IndexSet::new();
    for section in sections {
        for table in &section.tables {
            for row in &table.rows {
                for cell in row {
                    if let Some(metric) = cell.metric_ref() {
                        if metric.kind == kind {
                            names.insert(metric.name.clone());
                        }
                    }
                }
            }
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::types::{DataTable, TableCell};

    fn section_with_cells(cells: Vec<TableCell>) -> DataSection {
        let table = DataTable::new(vec!["Metric".to_string()]).with_row(cells);
        DataSection::new(vec![table])
    }

    #[test]
    fn unions_across_sections() {
        let sections = vec![
            section_with_cells(vec![TableCell::counter("gpc__cycles_elapsed.sum")]),
            section_with_cells(vec![
                TableCell::counter("sys__cycles_elapsed.sum"),
                TableCell::ratio("lts__t_sector_hit_rate.pct"),
            ]),
        ];

        let counters = required_counters(&sections);
        assert_eq!(counters.len(), 2);
        assert!(counters.contains("gpc__cycles_elapsed.sum"));
        assert!(counters.contains("sys__cycles_elapsed.sum"));

        let ratios = required_ratios(&sections);
        assert_eq!(ratios.len(), 1);
        assert!(ratios.contains("lts__t_sector_hit_rate.pct"));

        assert!(required_throughputs(&sections).is_empty());
    }

    #[test]
    fn deduplicates_repeated_references() {
        let sections = vec![
            section_with_cells(vec![TableCell::counter("dram__bytes.sum")]),
            section_with_cells(vec![TableCell::counter("dram__bytes.sum")]),
        ];
        assert_eq!(required_counters(&sections).len(), 1);
    }

    #[test]
    fn text_cells_contribute_nothing() {
        let sections = vec![section_with_cells(vec!["just a label".into()])];
        assert!(required_counters(&sections).is_empty());
        assert!(required_ratios(&sections).is_empty());
        assert!(required_throughputs(&sections).is_empty());
    }

    #[test]
    fn empty_sections_yield_empty_sets() {
        let sections = vec![DataSection::new(vec![])];
        assert!(required_counters(&sections).is_empty());
    }
}
