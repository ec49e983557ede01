//! End-to-end query tests over the synthetic dataset.

use std::sync::Arc;

use realm::{
    MarketTable, QueryEngine, QueryError, RealmError, ResponseKind, TableData,
};

fn engine() -> QueryEngine {
    QueryEngine::new(Arc::new(MarketTable::synthetic()))
}

#[test]
fn test_analyze_wakad() {
    let engine = engine();
    let response = engine.execute("Analyze Wakad").unwrap();

    assert_eq!(response.kind, ResponseKind::Analysis);
    assert_eq!(response.area.as_deref(), Some("wakad"));

    let Some(TableData::Records(records)) = response.table_data else {
        panic!("expected record table");
    };
    assert_eq!(records.len(), 5);
    assert_eq!(records.first().unwrap().year, 2020);
    assert_eq!(records.last().unwrap().year, 2024);
    // 5500 compounded at 8% over four years, truncated
    assert_eq!(records.last().unwrap().price_per_sqft, 7482);

    let chart = response.chart_data.unwrap();
    assert_eq!(chart.labels, vec!["2020", "2021", "2022", "2023", "2024"]);
    assert_eq!(chart.series["price"].len(), 5);
    assert_eq!(chart.series["demand"].len(), 5);
    assert_eq!(chart.series["units"].len(), 5);
}

#[test]
fn test_compare_aundh_and_baner() {
    let engine = engine();
    let response = engine.execute("Compare Aundh and Baner").unwrap();

    assert_eq!(response.kind, ResponseKind::Comparison);
    assert_eq!(
        response.areas,
        Some(vec!["aundh".to_string(), "baner".to_string()])
    );

    let Some(TableData::Pair { area1, area2 }) = response.table_data else {
        panic!("expected paired table");
    };
    let latest1 = area1.last().unwrap();
    let latest2 = area2.last().unwrap();
    assert!(latest1.price_per_sqft > 0);
    assert!(latest2.price_per_sqft > 0);
    // Baner's base price is above Aundh's, so the diff is positive
    assert!(latest2.price_per_sqft - latest1.price_per_sqft > 0);
    assert!(response.summary.contains("Higher priced area: baner"));
}

#[test]
fn test_trend_over_window() {
    let engine = engine();
    let response = engine
        .execute("Wakad over the last 3 years trend")
        .unwrap();

    assert_eq!(response.kind, ResponseKind::Trend);
    assert_eq!(response.area.as_deref(), Some("wakad"));
    assert_eq!(response.years, Some(3));

    let Some(TableData::Records(records)) = response.table_data else {
        panic!("expected record table");
    };
    let years: Vec<i32> = records.iter().map(|r| r.year).collect();
    assert_eq!(years, vec![2022, 2023, 2024]);
}

#[test]
fn test_whitespace_query_is_caller_error() {
    let engine = engine();
    let err = engine.execute("  ").unwrap_err();
    assert!(matches!(err, RealmError::Query(QueryError::Empty)));
}

#[test]
fn test_unmatched_query_gets_general_response() {
    let engine = engine();
    let response = engine.execute("hello").unwrap();

    assert_eq!(response.kind, ResponseKind::General);
    assert!(response.chart_data.is_none());
    assert!(response.summary.contains("Available areas"));

    let areas = response.areas.unwrap();
    assert_eq!(
        areas,
        vec![
            "Akurdi",
            "Ambegaon Budruk",
            "Aundh",
            "Baner",
            "Hinjewadi",
            "Wakad"
        ]
    );
}

#[test]
fn test_malformed_compare_falls_through_to_general() {
    let engine = engine();
    // Both trigger words present, but not the extraction phrase
    let response = engine.execute("compare and contrast").unwrap();
    assert_eq!(response.kind, ResponseKind::General);
}

#[test]
fn test_response_round_trips_through_json() {
    let engine = engine();
    let response = engine.execute("Analyze Wakad").unwrap();

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["kind"], "analysis");
    assert_eq!(value["chart_data"]["labels"][4], "2024");
    assert_eq!(value["chart_data"]["price"][4], 7482);
    assert_eq!(value["table_data"][0]["area"], "Wakad");
    // Absent optional fields are omitted from the wire shape
    assert!(value.get("years").is_none());
}
