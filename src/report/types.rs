/// Core types for report composition
///
/// A report is an ordered list of sections; a section is an ordered list of
/// tables; a table cell is either literal text or a placeholder referencing a
/// named GPU metric. The metric references are what requirement extraction
/// scans to decide which counters, ratios, and throughputs a report needs.
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// The three families of GPU performance metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    Counter,
    Ratio,
    Throughput,
}

/// A reference to a named metric that must be collected to populate a cell
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetricRef {
    pub kind: MetricKind,
    pub name: String,
}

impl MetricRef {
    pub fn counter(name: impl Into<String>) -> Self {
        Self {
            kind: MetricKind::Counter,
            name: name.into(),
        }
    }

    pub fn ratio(name: impl Into<String>) -> Self {
        Self {
            kind: MetricKind::Ratio,
            name: name.into(),
        }
    }

    pub fn throughput(name: impl Into<String>) -> Self {
        Self {
            kind: MetricKind::Throughput,
            name: name.into(),
        }
    }
}

/// A table cell: literal text, or a metric placeholder filled in downstream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableCell {
    Text(String),
    Metric(MetricRef),
}

impl TableCell {
    pub fn text(value: impl Into<String>) -> Self {
        TableCell::Text(value.into())
    }

    pub fn counter(name: impl Into<String>) -> Self {
        TableCell::Metric(MetricRef::counter(name))
    }

    pub fn ratio(name: impl Into<String>) -> Self {
        TableCell::Metric(MetricRef::ratio(name))
    }

    pub fn throughput(name: impl Into<String>) -> Self {
        TableCell::Metric(MetricRef::throughput(name))
    }

    /// The metric this cell references, if any
    pub fn metric_ref(&self) -> Option<&MetricRef> {
        match self {
            TableCell::Text(_) => None,
            TableCell::Metric(metric) => Some(metric),
        }
    }
}

impl From<String> for TableCell {
    fn from(value: String) -> Self {
        TableCell::Text(value)
    }
}

impl From<&str> for TableCell {
    fn from(value: &str) -> Self {
        TableCell::Text(value.to_string())
    }
}

/// One metric-reporting table produced by a generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTable {
    pub title: Option<String>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<TableCell>>,
}

impl DataTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            title: None,
            headers,
            rows: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_row(&mut self, cells: Vec<TableCell>) {
        self.rows.push(cells);
    }

    pub fn with_row(mut self, cells: Vec<TableCell>) -> Self {
        self.rows.push(cells);
        self
    }
}

/// A titled or untitled ordered group of tables within a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSection {
    pub title: Option<String>,
    pub tables: Vec<DataTable>,
    pub inter_table_spacing: bool,
}

impl DataSection {
    pub fn new(tables: Vec<DataTable>) -> Self {
        Self {
            title: None,
            tables,
            inter_table_spacing: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn without_inter_table_spacing(mut self) -> Self {
        self.inter_table_spacing = false;
        self
    }
}

/// Final output of report assembly: the report name, its HTML body, and the
/// metrics a writer must collect to populate it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDefinition {
    pub name: String,
    pub html: String,
    pub required_counters: IndexSet<String>,
    pub required_ratios: IndexSet<String>,
    pub required_throughputs: IndexSet<String>,
}
