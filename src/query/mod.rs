//! Natural language query interface.
//!
//! This module provides:
//! - Intent classification for free-text market queries
//! - Query execution against the market table
//! - The structured response contract shared by all handlers

mod classifier;
mod executor;
mod types;

pub use classifier::IntentClassifier;
pub use executor::QueryEngine;
pub use types::{ChartData, QueryIntent, QueryResponse, ResponseKind, TableData};
