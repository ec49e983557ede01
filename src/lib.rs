//! Realm: Real-Estate Market Analytics Server
//!
//! Answers natural-language-ish queries about area-level price and demand
//! statistics, returning a textual summary plus chart-ready series. Queries
//! are classified into analysis, comparison, trend, or general intents by
//! pattern matching and executed against a read-only in-memory market table
//! loaded from a CSV file or synthesized deterministically.

pub mod api;
pub mod config;
pub mod error;
pub mod market;
pub mod query;

pub use api::{create_rest_router, ApiState, RestApiConfig};
pub use config::Config;
pub use error::{ConfigError, DataError, QueryError, RealmError, Result};
pub use market::{AreaRecord, DataOrigin, MarketTable, REFERENCE_YEAR};
pub use query::{
    ChartData, IntentClassifier, QueryEngine, QueryIntent, QueryResponse, ResponseKind, TableData,
};
