//! Query execution against the market table.
//!
//! Classifies the query, runs the matching lookup, and shapes the result
//! into a [`QueryResponse`]. Not-found is a normal error-kind response;
//! the only fault an execution can raise is empty caller input. The
//! not-found check always precedes any arithmetic on looked-up records.

use std::sync::Arc;

use crate::error::{QueryError, Result};
use crate::market::{AreaRecord, MarketTable};

use super::classifier::IntentClassifier;
use super::types::*;

/// Executes free-text queries against a shared read-only market table.
pub struct QueryEngine {
    classifier: IntentClassifier,
    table: Arc<MarketTable>,
}

impl QueryEngine {
    /// Create a new query engine over the given table.
    pub fn new(table: Arc<MarketTable>) -> Self {
        Self {
            classifier: IntentClassifier::new(),
            table,
        }
    }

    /// Execute a free-text query.
    ///
    /// Empty or whitespace-only input is a caller error and never reaches
    /// classification. Unknown areas and empty windows come back as
    /// `Ok` responses with [`ResponseKind::Error`].
    pub fn execute(&self, query: &str) -> Result<QueryResponse> {
        if query.trim().is_empty() {
            return Err(QueryError::Empty.into());
        }

        let intent = self.classifier.classify(query);
        tracing::debug!(intent = intent.display_name(), "Classified query");

        let response = match intent {
            QueryIntent::Analysis { area } => self.handle_analysis(&area),
            QueryIntent::Comparison { area1, area2 } => self.handle_comparison(&area1, &area2),
            QueryIntent::Trend { area, years } => self.handle_trend(&area, years),
            QueryIntent::General => self.handle_general(),
        };
        Ok(response)
    }

    /// All known areas, sorted.
    pub fn list_areas(&self) -> Vec<String> {
        self.table.list_areas()
    }

    fn handle_analysis(&self, area: &str) -> QueryResponse {
        let Some(records) = self.table.find_area(area) else {
            return QueryResponse::error(format!("Area '{}' not found in data.", area));
        };
        let (Some(first), Some(latest)) = (records.first(), records.last()) else {
            return QueryResponse::error(format!("Area '{}' not found in data.", area));
        };

        let summary = format!(
            "Analysis for {}: current price {} per sq.ft, demand index {}/100, \
             {} available units, average property size {} sq.ft. \
             Price has grown by {}, from {} in {} to {} in {}.",
            area,
            latest.price_per_sqft,
            latest.demand_index,
            latest.total_units,
            latest.avg_property_size,
            latest.price_per_sqft - first.price_per_sqft,
            first.price_per_sqft,
            first.year,
            latest.price_per_sqft,
            latest.year,
        );

        let chart = ChartData::new(year_labels(&records))
            .with_series("price", series(&records, |r| r.price_per_sqft))
            .with_series("demand", series(&records, |r| r.demand_index))
            .with_series("units", series(&records, |r| r.total_units));

        QueryResponse::new(ResponseKind::Analysis, summary)
            .with_area(area)
            .with_chart(chart)
            .with_table(TableData::Records(records))
    }

    fn handle_comparison(&self, area1: &str, area2: &str) -> QueryResponse {
        let Some((records1, records2)) = self.table.find_two_areas(area1, area2) else {
            return QueryResponse::error(format!(
                "Could not compare '{}' and '{}'. One or both areas not found.",
                area1, area2
            ));
        };
        let (Some(latest1), Some(latest2)) = (records1.last(), records2.last()) else {
            return QueryResponse::error(format!(
                "Could not compare '{}' and '{}'. One or both areas not found.",
                area1, area2
            ));
        };

        let price_diff = latest2.price_per_sqft - latest1.price_per_sqft;
        let price_diff_pct = price_diff as f64 / latest1.price_per_sqft as f64 * 100.0;
        let higher = if price_diff > 0 { area2 } else { area1 };

        let summary = format!(
            "Comparison of {} vs {}: price difference {} per sq.ft ({:+.1}%). \
             Current prices: {} at {}, {} at {}. \
             Demand: {} at {}/100, {} at {}/100. \
             Higher priced area: {}.",
            area1,
            area2,
            price_diff.abs(),
            price_diff_pct,
            area1,
            latest1.price_per_sqft,
            area2,
            latest2.price_per_sqft,
            area1,
            latest1.demand_index,
            area2,
            latest2.demand_index,
            higher,
        );

        // Both series share area1's year labels; divergent year ranges are
        // not reconciled.
        let chart = ChartData::new(year_labels(&records1))
            .with_series("area1_price", series(&records1, |r| r.price_per_sqft))
            .with_series("area2_price", series(&records2, |r| r.price_per_sqft))
            .with_series("area1_demand", series(&records1, |r| r.demand_index))
            .with_series("area2_demand", series(&records2, |r| r.demand_index));

        QueryResponse::new(ResponseKind::Comparison, summary)
            .with_areas(vec![area1.to_string(), area2.to_string()])
            .with_chart(chart)
            .with_table(TableData::Pair {
                area1: records1,
                area2: records2,
            })
    }

    fn handle_trend(&self, area: &str, years: u32) -> QueryResponse {
        let Some(records) = self.table.find_recent(area, years) else {
            return QueryResponse::error(format!(
                "No trend data found for '{}' over the last {} years.",
                area, years
            ));
        };
        let (Some(first), Some(last)) = (records.first(), records.last()) else {
            return QueryResponse::error(format!(
                "No trend data found for '{}' over the last {} years.",
                area, years
            ));
        };

        let price_growth = last.price_per_sqft - first.price_per_sqft;
        let growth_pct = price_growth as f64 / first.price_per_sqft as f64 * 100.0;
        let annual_rate = growth_pct / years as f64;

        let summary = format!(
            "{}-year trend for {}: period {} to {}, price growth {} ({:+.1}%), \
             starting price {}, current price {}, annual growth rate {:+.1}%. \
             The area shows {} growth.",
            years,
            area,
            first.year,
            last.year,
            price_growth,
            growth_pct,
            first.price_per_sqft,
            last.price_per_sqft,
            annual_rate,
            growth_label(growth_pct),
        );

        let chart = ChartData::new(year_labels(&records))
            .with_series("price", series(&records, |r| r.price_per_sqft))
            .with_series("demand", series(&records, |r| r.demand_index));

        QueryResponse::new(ResponseKind::Trend, summary)
            .with_area(area)
            .with_years(years)
            .with_chart(chart)
            .with_table(TableData::Records(records))
    }

    fn handle_general(&self) -> QueryResponse {
        let areas = self.table.list_areas();
        let summary = format!(
            "I can analyze real estate data. Available areas: {}. \
             Try: 'Analyze Wakad' or 'Compare Aundh and Baner'",
            areas.join(", ")
        );
        QueryResponse::new(ResponseKind::General, summary).with_areas(areas)
    }
}

/// Qualitative label for a window's percentage growth. Boundaries are
/// strict: exactly 30 is "moderate", exactly 15 is "steady".
fn growth_label(growth_pct: f64) -> &'static str {
    if growth_pct > 30.0 {
        "strong"
    } else if growth_pct > 15.0 {
        "moderate"
    } else {
        "steady"
    }
}

fn year_labels(records: &[AreaRecord]) -> Vec<String> {
    records.iter().map(|r| r.year.to_string()).collect()
}

fn series(records: &[AreaRecord], f: impl Fn(&AreaRecord) -> i64) -> Vec<i64> {
    records.iter().map(f).collect()
}
