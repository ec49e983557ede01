//! Configuration for the Realm server.

mod settings;

pub use settings::{Config, DataConfig, ServerConfig};
