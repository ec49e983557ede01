//! REST API router tests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use realm::{create_rest_router, MarketTable, QueryEngine, RestApiConfig};

fn router() -> axum::Router {
    let engine = Arc::new(QueryEngine::new(Arc::new(MarketTable::synthetic())));
    create_rest_router(engine, &RestApiConfig::default())
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_query(query: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/query")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({ "query": query }).to_string(),
        ))
        .unwrap()
}

#[tokio::test]
async fn test_query_endpoint_analysis() {
    let response = router().oneshot(post_query("Analyze Wakad")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["kind"], "analysis");
    assert_eq!(body["area"], "wakad");
    assert_eq!(body["chart_data"]["price"][4], 7482);
}

#[tokio::test]
async fn test_query_endpoint_rejects_empty_query() {
    let response = router().oneshot(post_query("   ")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "empty_query");
}

#[tokio::test]
async fn test_query_endpoint_not_found_is_200() {
    let response = router()
        .oneshot(post_query("Analyze Atlantis"))
        .await
        .unwrap();
    // Not-found is a normal outcome, not an HTTP fault
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["kind"], "error");
}

#[tokio::test]
async fn test_areas_endpoint() {
    let request = Request::builder()
        .method("GET")
        .uri("/api/areas")
        .body(Body::empty())
        .unwrap();
    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let areas = body["areas"].as_array().unwrap();
    assert_eq!(areas.len(), 6);
    assert_eq!(areas[0], "Akurdi");
    assert_eq!(areas[5], "Wakad");
}
