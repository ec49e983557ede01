//! Types for the natural language query interface.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::market::AreaRecord;

/// Classified purpose of a free-text query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryIntent {
    /// Single-area analysis: "analyze wakad"
    Analysis { area: String },
    /// Two-area comparison: "compare aundh and baner"
    Comparison { area1: String, area2: String },
    /// Price trend over a trailing year window
    Trend { area: String, years: u32 },
    /// No recognized intent; list areas and usage hints
    #[default]
    General,
}

impl QueryIntent {
    /// Get a human-readable name for this intent.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Analysis { .. } => "Analysis",
            Self::Comparison { .. } => "Comparison",
            Self::Trend { .. } => "Trend",
            Self::General => "General",
        }
    }
}

/// Tag on every query response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    Analysis,
    Comparison,
    Trend,
    General,
    /// Normal not-found outcome, not a fault.
    Error,
}

/// Chart-ready series: shared x-axis labels plus named integer series.
///
/// Serializes flat, so the wire shape is `{"labels": [...], "price": [...]}`
/// rather than nesting the series under their own key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    #[serde(flatten)]
    pub series: BTreeMap<String, Vec<i64>>,
}

impl ChartData {
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels,
            series: BTreeMap::new(),
        }
    }

    pub fn with_series(mut self, name: impl Into<String>, values: Vec<i64>) -> Self {
        self.series.insert(name.into(), values);
        self
    }
}

/// Records backing a response table: a single area's sequence, or the two
/// compared sequences tagged by slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableData {
    Records(Vec<AreaRecord>),
    Pair {
        area1: Vec<AreaRecord>,
        area2: Vec<AreaRecord>,
    },
}

/// Structured answer for a single query. Value object with no identity
/// beyond the request/response cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub kind: ResponseKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub areas: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<u32>,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_data: Option<ChartData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_data: Option<TableData>,
}

impl QueryResponse {
    pub fn new(kind: ResponseKind, summary: impl Into<String>) -> Self {
        Self {
            kind,
            area: None,
            areas: None,
            years: None,
            summary: summary.into(),
            chart_data: None,
            table_data: None,
        }
    }

    /// Not-found response naming what could not be resolved.
    pub fn error(summary: impl Into<String>) -> Self {
        Self::new(ResponseKind::Error, summary)
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    pub fn with_areas(mut self, areas: Vec<String>) -> Self {
        self.areas = Some(areas);
        self
    }

    pub fn with_years(mut self, years: u32) -> Self {
        self.years = Some(years);
        self
    }

    pub fn with_chart(mut self, chart: ChartData) -> Self {
        self.chart_data = Some(chart);
        self
    }

    pub fn with_table(mut self, table: TableData) -> Self {
        self.table_data = Some(table);
        self
    }
}
