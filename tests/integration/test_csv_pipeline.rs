//! Query pipeline tests over CSV-loaded data.

use std::io::Write;
use std::sync::Arc;

use tempfile::NamedTempFile;

use realm::{DataOrigin, MarketTable, QueryEngine, ResponseKind, TableData};

fn write_market_csv() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    // Headers deliberately unnormalized: padding, mixed case, spaces
    writeln!(
        file,
        " Year ,Area,Price Per Sqft, Demand Index ,Total Units,Avg Property Size,Supply Index"
    )
    .unwrap();
    for (year, price, demand) in [(2022, 4100, 65), (2023, 4500, 71), (2024, 5000, 78)] {
        writeln!(
            file,
            "{},Kothrud,{},{},150,1200,80",
            year, price, demand
        )
        .unwrap();
    }
    for (year, price, demand) in [(2022, 5200, 70), (2023, 5600, 75), (2024, 6100, 81)] {
        writeln!(
            file,
            "{},Kharadi,{},{},170,1150,84",
            year, price, demand
        )
        .unwrap();
    }
    file
}

#[test]
fn test_analysis_over_loaded_file() {
    let file = write_market_csv();
    let table = MarketTable::load(Some(file.path()));
    assert_eq!(table.origin(), DataOrigin::External);

    let engine = QueryEngine::new(Arc::new(table));
    let response = engine.execute("Analyze Kothrud").unwrap();

    assert_eq!(response.kind, ResponseKind::Analysis);
    let Some(TableData::Records(records)) = response.table_data else {
        panic!("expected record table");
    };
    assert_eq!(records.len(), 3);
    assert_eq!(records.last().unwrap().price_per_sqft, 5000);
    assert!(response.summary.contains("4100"));
    assert!(response.summary.contains("5000"));
}

#[test]
fn test_comparison_over_loaded_file() {
    let file = write_market_csv();
    let engine = QueryEngine::new(Arc::new(MarketTable::load(Some(file.path()))));

    let response = engine.execute("compare kothrud and kharadi").unwrap();
    assert_eq!(response.kind, ResponseKind::Comparison);
    assert!(response.summary.contains("Higher priced area: kharadi"));

    let chart = response.chart_data.unwrap();
    assert_eq!(chart.labels, vec!["2022", "2023", "2024"]);
    assert_eq!(chart.series["area2_price"], vec![5200, 5600, 6100]);
}

#[test]
fn test_trend_over_loaded_file() {
    let file = write_market_csv();
    let engine = QueryEngine::new(Arc::new(MarketTable::load(Some(file.path()))));

    // Window clips to the two most recent years present in the file
    let response = engine.execute("kharadi over the last 2 years trend").unwrap();
    assert_eq!(response.kind, ResponseKind::Trend);
    let Some(TableData::Records(records)) = response.table_data else {
        panic!("expected record table");
    };
    let years: Vec<i32> = records.iter().map(|r| r.year).collect();
    assert_eq!(years, vec![2023, 2024]);
}

#[test]
fn test_synthetic_areas_absent_from_loaded_file() {
    let file = write_market_csv();
    let engine = QueryEngine::new(Arc::new(MarketTable::load(Some(file.path()))));

    let response = engine.execute("Analyze Wakad").unwrap();
    assert_eq!(response.kind, ResponseKind::Error);
    assert!(response.summary.contains("wakad"));
}

#[test]
fn test_unparsable_file_degrades_to_synthetic() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "year,area,price_per_sqft,demand_index").unwrap();
    writeln!(file, "2024,Kothrud,5000,78").unwrap();

    let engine = QueryEngine::new(Arc::new(MarketTable::load(Some(file.path()))));
    // The fallback dataset answers as if no file had been configured
    let response = engine.execute("Analyze Wakad").unwrap();
    assert_eq!(response.kind, ResponseKind::Analysis);
}
