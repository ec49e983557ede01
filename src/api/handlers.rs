//! REST API request handlers.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{QueryError, RealmError};
use crate::query::QueryEngine;

/// Application state shared across handlers.
pub struct ApiState {
    /// Query engine for all operations.
    pub engine: Arc<QueryEngine>,
}

impl ApiState {
    /// Create new API state.
    pub fn new(engine: Arc<QueryEngine>) -> Self {
        Self { engine }
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Free-text query request.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    /// The query text.
    #[serde(default)]
    pub query: String,
}

/// Area list response.
#[derive(Debug, Clone, Serialize)]
pub struct AreasResponse {
    pub areas: Vec<String>,
}

/// Error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

// ============================================================================
// Handler Functions
// ============================================================================

/// POST /api/query - Run a free-text query.
///
/// Empty input is rejected with 400 before interpretation; unknown areas
/// come back as 200 responses with an error-kind body.
pub async fn query_handler(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<QueryRequest>,
) -> impl IntoResponse {
    match state.engine.execute(&request.query) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(RealmError::Query(QueryError::Empty)) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No query provided".to_string(),
                code: "empty_query".to_string(),
            }),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
                code: "query_failed".to_string(),
            }),
        )
            .into_response(),
    }
}

/// GET /api/areas - List known areas.
pub async fn areas_handler(State(state): State<Arc<ApiState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(AreasResponse {
            areas: state.engine.list_areas(),
        }),
    )
}
