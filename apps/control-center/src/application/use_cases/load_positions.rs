//! Load Positions Use Case
//!
//! Reads the open option book from the external database and decodes every
//! row into an [`OptionPositionRecord`].

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::application::ports::{ConnectionStatus, DataSourceError, DataSourcePort};
use crate::domain::option_position::{OptionPositionError, OptionPositionRecord};

/// Errors from loading positions.
#[derive(Debug, thiserror::Error)]
pub enum LoadPositionsError {
    /// The data source call failed.
    #[error(transparent)]
    DataSource(#[from] DataSourceError),

    /// A row does not have the shape of a position.
    #[error("Row {row}: cannot decode position: {source}")]
    Decode {
        /// Zero-based row index.
        row: usize,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },

    /// A row decoded but failed validation.
    #[error("Row {row}: {source}")]
    Invalid {
        /// Zero-based row index.
        row: usize,
        /// Validation error.
        #[source]
        source: OptionPositionError,
    },
}

/// Use case for loading open option positions.
pub struct LoadPositionsUseCase<D>
where
    D: DataSourcePort,
{
    data_source: Arc<D>,
    query: String,
}

impl<D> LoadPositionsUseCase<D>
where
    D: DataSourcePort,
{
    /// Create a use case that runs `query` against `data_source`.
    pub fn new(data_source: Arc<D>, query: impl Into<String>) -> Self {
        Self {
            data_source,
            query: query.into(),
        }
    }

    /// Check the data source and classify the outcome.
    ///
    /// Never fails; a failed check is reported as [`ConnectionStatus::Error`].
    pub async fn connection_status(&self, slow_after_ms: u64) -> ConnectionStatus {
        let check = self.data_source.test_connection().await;
        let status = ConnectionStatus::from_check(&check, slow_after_ms);
        match &check {
            Ok(test) => debug!(latency_ms = test.latency_ms, ?status, "Data source check"),
            Err(e) => warn!(error = %e, ?status, "Data source check failed"),
        }
        status
    }

    /// Run the positions query and decode the rows, in row order.
    ///
    /// The first undecodable or invalid row aborts the load.
    pub async fn execute(&self) -> Result<Vec<OptionPositionRecord>, LoadPositionsError> {
        let result = self.data_source.run_query(&self.query, &[]).await?;
        debug!(
            row_count = result.row_count,
            latency_ms = result.latency_ms,
            "Positions query returned"
        );

        let records = result
            .rows
            .into_iter()
            .enumerate()
            .map(|(row, fields)| decode_row(row, fields))
            .collect::<Result<Vec<_>, _>>()?;

        info!(positions = records.len(), "Loaded option positions");
        Ok(records)
    }
}

fn decode_row(
    row: usize,
    fields: serde_json::Map<String, Value>,
) -> Result<OptionPositionRecord, LoadPositionsError> {
    let record: OptionPositionRecord = serde_json::from_value(Value::Object(fields))
        .map_err(|source| LoadPositionsError::Decode { row, source })?;
    record
        .validate()
        .map_err(|source| LoadPositionsError::Invalid { row, source })?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::data_source::InMemoryDataSource;
    use serde_json::json;

    const QUERY: &str = "SELECT * FROM option_positions";

    fn row(value: Value) -> serde_json::Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn put_row(id: &str, quantity: i64) -> serde_json::Map<String, Value> {
        row(json!({
            "id": id,
            "underlying": "AAPL",
            "symbol": "AAPL250221P00150000",
            "strike": "150",
            "putCall": "PUT",
            "expDate": "2025-02-21",
            "quantity": quantity,
            "capitalAtRisk": "15000",
            "delta": "-0.3"
        }))
    }

    #[tokio::test]
    async fn loads_rows_in_order() {
        let source = InMemoryDataSource::new()
            .with_query(QUERY, vec![put_row("p1", -1), put_row("p2", -2)]);
        let use_case = LoadPositionsUseCase::new(Arc::new(source), QUERY);

        let records = use_case.execute().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "p1");
        assert_eq!(records[1].quantity, -2);
    }

    #[tokio::test]
    async fn malformed_row_reports_its_index() {
        let source = InMemoryDataSource::new().with_query(
            QUERY,
            vec![put_row("p1", -1), row(json!({"id": "broken"}))],
        );
        let use_case = LoadPositionsUseCase::new(Arc::new(source), QUERY);

        let err = use_case.execute().await.unwrap_err();

        assert!(matches!(err, LoadPositionsError::Decode { row: 1, .. }));
    }

    #[tokio::test]
    async fn zero_quantity_row_is_invalid() {
        let source = InMemoryDataSource::new().with_query(QUERY, vec![put_row("p1", 0)]);
        let use_case = LoadPositionsUseCase::new(Arc::new(source), QUERY);

        let err = use_case.execute().await.unwrap_err();

        assert!(matches!(
            err,
            LoadPositionsError::Invalid {
                row: 0,
                source: OptionPositionError::InvalidPosition { .. }
            }
        ));
    }

    #[tokio::test]
    async fn connection_status_reflects_reachability() {
        let online = LoadPositionsUseCase::new(Arc::new(InMemoryDataSource::new()), QUERY);
        let offline = LoadPositionsUseCase::new(Arc::new(InMemoryDataSource::offline()), QUERY);

        assert_eq!(online.connection_status(1_000).await, ConnectionStatus::Ok);
        assert_eq!(offline.connection_status(1_000).await, ConnectionStatus::Error);
    }

    #[tokio::test]
    async fn data_source_failure_propagates() {
        let use_case = LoadPositionsUseCase::new(Arc::new(InMemoryDataSource::offline()), QUERY);

        let err = use_case.execute().await.unwrap_err();

        assert!(matches!(
            err,
            LoadPositionsError::DataSource(DataSourceError::Connection { .. })
        ));
    }
}
