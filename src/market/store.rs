//! Read-only market table.
//!
//! The table is built once at startup, either from a CSV data file or from
//! the deterministic synthetic generator, and is shared read-only for the
//! lifetime of the process. Lookups return copies; callers never hold
//! references into the table across requests.

use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::path::Path;

use csv::StringRecord;

use crate::error::DataError;

use super::record::AreaRecord;

/// Fixed "now" for trend windows. The sample dataset ends here; trend
/// queries are anchored to this year rather than the wall clock.
pub const REFERENCE_YEAR: i32 = 2024;

/// Year range covered by the synthetic generator.
const SAMPLE_YEARS: std::ops::RangeInclusive<i32> = 2020..=2024;

/// Annual price growth applied by the synthetic generator.
const ANNUAL_GROWTH: f64 = 0.08;

/// Sample areas with their base (first-year) price per square foot.
const SAMPLE_AREAS: &[(&str, i64)] = &[
    ("Wakad", 5500),
    ("Aundh", 7000),
    ("Akurdi", 4500),
    ("Ambegaon Budruk", 4000),
    ("Baner", 8000),
    ("Hinjewadi", 6000),
];

/// Where the table's rows came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    /// Parsed from an external data file.
    External,
    /// Built by the synthetic generator (no file, or file load failed).
    Synthetic,
}

/// In-memory table of area/year market observations.
#[derive(Debug)]
pub struct MarketTable {
    records: Vec<AreaRecord>,
    origin: DataOrigin,
}

impl MarketTable {
    /// Build the table from a CSV file when a path is given, falling back
    /// to the synthetic dataset when no path is given or the file cannot
    /// be read or parsed. Load failures are logged and swallowed; callers
    /// can inspect [`MarketTable::origin`] to tell which source won.
    pub fn load(path: Option<&Path>) -> Self {
        if let Some(path) = path {
            match Self::from_csv(path) {
                Ok(table) => {
                    tracing::info!(
                        path = %path.display(),
                        records = table.len(),
                        "Loaded market data file"
                    );
                    return table;
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Failed to load market data file, using synthetic data"
                    );
                }
            }
        }
        Self::synthetic()
    }

    /// Parse a CSV data file into a table.
    ///
    /// Header names are normalized on ingest: whitespace trimmed,
    /// lowercased, spaces replaced with underscores.
    pub fn from_csv(path: &Path) -> Result<Self, DataError> {
        let file = File::open(path).map_err(DataError::ReadFile)?;
        let mut reader = csv::Reader::from_reader(file);

        let columns: HashMap<String, usize> = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(i, name)| (normalize_column(name), i))
            .collect();

        let col = |name: &str| -> Result<usize, DataError> {
            columns
                .get(name)
                .copied()
                .ok_or_else(|| DataError::MissingColumn(name.to_string()))
        };
        let year_col = col("year")?;
        let area_col = col("area")?;
        let price_col = col("price_per_sqft")?;
        let demand_col = col("demand_index")?;
        let units_col = col("total_units")?;
        let size_col = col("avg_property_size")?;
        let supply_col = col("supply_index")?;

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            records.push(AreaRecord {
                year: parse_field(&row, year_col, "year")?,
                area: field(&row, area_col, "area")?.trim().to_string(),
                price_per_sqft: parse_field(&row, price_col, "price_per_sqft")?,
                demand_index: parse_field(&row, demand_col, "demand_index")?,
                total_units: parse_field(&row, units_col, "total_units")?,
                avg_property_size: parse_field(&row, size_col, "avg_property_size")?,
                supply_index: parse_field(&row, supply_col, "supply_index")?,
            });
        }

        Ok(Self {
            records,
            origin: DataOrigin::External,
        })
    }

    /// Build the deterministic synthetic dataset: a fixed set of areas over
    /// a fixed year range, each area compounding from its base price.
    pub fn synthetic() -> Self {
        let mut records = Vec::new();
        for &(area, base_price) in SAMPLE_AREAS {
            for year in SAMPLE_YEARS {
                let dy = year - *SAMPLE_YEARS.start();
                let price = (base_price as f64 * (1.0 + ANNUAL_GROWTH).powi(dy)) as i64;
                records.push(AreaRecord {
                    year,
                    area: area.to_string(),
                    price_per_sqft: price,
                    demand_index: (60 + 8 * dy as i64).min(100),
                    total_units: 100 + 25 * dy as i64,
                    avg_property_size: 1000 + 100 * dy as i64,
                    supply_index: 70 + 6 * dy as i64,
                });
            }
        }
        Self {
            records,
            origin: DataOrigin::Synthetic,
        }
    }

    /// Where this table's rows came from.
    pub fn origin(&self) -> DataOrigin {
        self.origin
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All known area names, case-as-stored, sorted and deduplicated.
    pub fn list_areas(&self) -> Vec<String> {
        let areas: BTreeSet<String> = self.records.iter().map(|r| r.area.clone()).collect();
        areas.into_iter().collect()
    }

    /// All records for an area (case-insensitive match), ordered ascending
    /// by year. `None` when the area is unknown.
    pub fn find_area(&self, name: &str) -> Option<Vec<AreaRecord>> {
        let mut records: Vec<AreaRecord> = self
            .records
            .iter()
            .filter(|r| r.area.eq_ignore_ascii_case(name.trim()))
            .cloned()
            .collect();
        if records.is_empty() {
            return None;
        }
        records.sort_by_key(|r| r.year);
        Some(records)
    }

    /// Records for two areas. `None` if either lookup comes back empty.
    pub fn find_two_areas(
        &self,
        name1: &str,
        name2: &str,
    ) -> Option<(Vec<AreaRecord>, Vec<AreaRecord>)> {
        let records1 = self.find_area(name1)?;
        let records2 = self.find_area(name2)?;
        Some((records1, records2))
    }

    /// Records for an area with `year >= REFERENCE_YEAR - n_years + 1`.
    /// `None` when the area is unknown or the window holds no records;
    /// the two cases are not distinguished.
    pub fn find_recent(&self, name: &str, n_years: u32) -> Option<Vec<AreaRecord>> {
        let start_year = REFERENCE_YEAR as i64 - n_years as i64 + 1;
        let records: Vec<AreaRecord> = self
            .find_area(name)?
            .into_iter()
            .filter(|r| r.year as i64 >= start_year)
            .collect();
        if records.is_empty() {
            return None;
        }
        Some(records)
    }
}

/// Normalize a CSV header name: trim, lowercase, spaces to underscores.
fn normalize_column(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

fn field<'a>(row: &'a StringRecord, index: usize, column: &str) -> Result<&'a str, DataError> {
    row.get(index).ok_or_else(|| DataError::InvalidValue {
        column: column.to_string(),
        value: String::new(),
    })
}

fn parse_field<T: std::str::FromStr>(
    row: &StringRecord,
    index: usize,
    column: &str,
) -> Result<T, DataError> {
    let raw = field(row, index, column)?.trim();
    raw.parse().map_err(|_| DataError::InvalidValue {
        column: column.to_string(),
        value: raw.to_string(),
    })
}
