//! Error types for the Realm server.

use thiserror::Error;

/// Main error type for Realm operations.
#[derive(Error, Debug)]
pub enum RealmError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Data-file errors. These are recovered locally by falling back to the
/// synthetic dataset and are never surfaced to query callers.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to read data file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Invalid value in column {column}: {value:?}")]
    InvalidValue { column: String, value: String },
}

/// Query input errors. Distinct from not-found, which is a normal
/// error-kind response rather than a fault.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("No query provided")]
    Empty,
}

/// Result type alias for Realm operations.
pub type Result<T> = std::result::Result<T, RealmError>;
