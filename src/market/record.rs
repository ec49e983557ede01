//! Area/year market observation.

use serde::{Deserialize, Serialize};

/// One observation of an area's market in a given year.
///
/// The `(area, year)` pair is unique within a table. Area names are
/// free-text keys compared case-insensitively but stored as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaRecord {
    pub year: i32,
    pub area: String,
    /// Price per square foot, positive.
    pub price_per_sqft: i64,
    /// Market demand on a 0-100 scale.
    pub demand_index: i64,
    /// Units available on the market, positive.
    pub total_units: i64,
    /// Average property size in square feet, positive.
    pub avg_property_size: i64,
    pub supply_index: i64,
}
