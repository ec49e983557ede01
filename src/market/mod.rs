//! In-memory market data for the query engine.
//!
//! This module provides:
//! - The area/year observation record
//! - The read-only market table with area lookup, pairing, and windowing
//! - CSV ingestion with a deterministic synthetic fallback

mod record;
mod store;

pub use record::AreaRecord;
pub use store::{DataOrigin, MarketTable, REFERENCE_YEAR};
