//! End-to-end test: data source -> load positions -> snapshot.

use std::sync::Arc;

use chrono::NaiveDate;
use control_center::application::ports::ColumnInfo;
use control_center::config::load_config_from_string;
use control_center::{
    ConnectionStatus, DataSourcePort, ExpiryBucket, InMemoryDataSource, LoadPositionsUseCase,
    PriorityReason, RefreshSnapshotUseCase, StaticPriceTable, file_positions_source,
};
use rust_decimal_macros::dec;
use serde_json::{Map, Value, json};

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn book_rows() -> Vec<Map<String, Value>> {
    vec![
        object(json!({
            "id": "aapl-put",
            "underlying": "AAPL",
            "symbol": "AAPL250117P00190000",
            "strike": "190",
            "putCall": "PUT",
            "expDate": "2025-01-17",
            "quantity": -2,
            "capitalAtRisk": "38000",
            "originalPremium": "1200",
            "premiumCollectedToDate": "700",
            "premiumRemaining": "500",
            "delta": "-0.55",
            "theta": "0.08",
            "rollHistory": [{
                "rollDate": "2024-12-13T15:45:00Z",
                "fromSymbol": "AAPL241213P00195000",
                "toSymbol": "AAPL250117P00190000",
                "fromStrike": "195",
                "toStrike": "190",
                "fromExpiry": "2024-12-13",
                "toExpiry": "2025-01-17",
                "credit": "900",
                "realizedPL": "-300"
            }]
        })),
        object(json!({
            "id": "msft-call",
            "underlying": "MSFT",
            "symbol": "MSFT250321C00450000",
            "strike": "450",
            "putCall": "CALL",
            "expDate": "2025-03-21",
            "quantity": -1,
            "capitalAtRisk": "0",
            "delta": "0.12"
        })),
    ]
}

const QUERY: &str = "SELECT * FROM option_positions WHERE quantity <> 0";

#[tokio::test]
async fn builds_snapshot_from_data_source() {
    let config = load_config_from_string("watchlist:\n  max_entries: 5\n").unwrap();
    let source = Arc::new(
        InMemoryDataSource::new()
            .with_table(
                "public",
                "option_positions",
                vec![ColumnInfo {
                    name: "id".to_string(),
                    data_type: "text".to_string(),
                    nullable: false,
                }],
            )
            .with_query(&config.data_source.positions_query, book_rows()),
    );

    assert!(source.test_connection().await.is_ok());
    assert_eq!(source.list_tables("public").await.unwrap(), ["option_positions"]);

    let records = LoadPositionsUseCase::new(Arc::clone(&source), QUERY)
        .execute()
        .await
        .unwrap();
    let prices = StaticPriceTable::new()
        .with_price("AAPL", dec!(185.50))
        .with_price("MSFT", dec!(415.20));
    let as_of = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();

    let snapshot = RefreshSnapshotUseCase::new(config.watchlist)
        .execute(records, &prices, as_of)
        .unwrap();

    let aapl = snapshot.position("aapl-put").unwrap();
    assert_eq!(aapl.dte(), 11);
    assert_eq!(aapl.roll_count(), 1);
    // 190 - 600 / 200
    assert_eq!(aapl.break_even_price(), dec!(187));

    assert_eq!(snapshot.watchlist.len(), 1);
    assert_eq!(snapshot.watchlist[0].reason, PriorityReason::Itm);
    assert_eq!(snapshot.watchlist[0].position.id(), "aapl-put");

    assert_eq!(snapshot.expiry_groups.len(), 2);
    assert_eq!(snapshot.expiry_groups[0].bucket, ExpiryBucket::Month);
    assert_eq!(snapshot.expiry_groups[1].bucket, ExpiryBucket::Beyond);
    assert_eq!(snapshot.totals.position_count, 2);
    assert_eq!(snapshot.totals.rolled_count, 1);

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["positions"][0]["totalRealizedPL"], "-300");
    assert_eq!(json["positions"][0]["rollHistory"][0]["realizedPL"], "-300");
    assert_eq!(json["expiryGroups"][0]["bucket"], "8-30d");
}

#[tokio::test]
async fn positions_file_flows_through_configured_query() {
    let config = load_config_from_string(
        "data_source:\n  positions_query: SELECT * FROM book\n  slow_after_ms: 5000\n",
    )
    .unwrap();
    let file = serde_json::to_string(&book_rows()).unwrap();

    let source = file_positions_source(&config.data_source, &file).unwrap();
    let use_case = LoadPositionsUseCase::new(
        Arc::new(source),
        config.data_source.positions_query.as_str(),
    );

    assert_eq!(
        use_case.connection_status(config.data_source.slow_after_ms).await,
        ConnectionStatus::Ok
    );
    let records = use_case.execute().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].id, "msft-call");
}

#[tokio::test]
async fn offline_data_source_stops_the_pipeline() {
    let source = Arc::new(InMemoryDataSource::offline());

    let result = LoadPositionsUseCase::new(source, QUERY).execute().await;

    assert!(result.is_err());
}
