//! REST API router and configuration.

use std::sync::Arc;

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::api::handlers::{areas_handler, query_handler, ApiState};
use crate::query::QueryEngine;

/// REST API configuration.
#[derive(Debug, Clone)]
pub struct RestApiConfig {
    /// Enable CORS.
    pub enable_cors: bool,
    /// API prefix (e.g., "/api").
    pub prefix: String,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            enable_cors: true,
            prefix: "/api".to_string(),
        }
    }
}

/// Create the REST API router.
///
/// Endpoints:
/// - POST /api/query  - Run a free-text query
/// - GET  /api/areas  - List known areas
pub fn create_rest_router(engine: Arc<QueryEngine>, config: &RestApiConfig) -> Router {
    let state = Arc::new(ApiState::new(engine));

    let api_routes = Router::new()
        .route("/query", post(query_handler))
        .route("/areas", get(areas_handler))
        .with_state(state);

    let router = Router::new().nest(&config.prefix, api_routes);

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
            .allow_origin(Any);

        router.layer(cors)
    } else {
        router
    }
}
