//! HTTP API for the query engine.

mod handlers;
mod rest;

pub use handlers::{ApiState, AreasResponse, ErrorResponse, QueryRequest};
pub use rest::{create_rest_router, RestApiConfig};
