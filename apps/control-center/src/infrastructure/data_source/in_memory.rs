//! In-memory data source.
//!
//! Serves schema metadata and canned query results from memory. Used by tests
//! and local runs in place of a PostgreSQL or SQL Server connection; the binary
//! serves a positions file through it with [`InMemoryDataSource::from_json`].

use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock};
use std::time::Instant;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::application::ports::{
    ColumnInfo, ConnectionTest, DataSourceError, DataSourcePort, QueryResult,
};

type Tables = BTreeMap<String, Vec<ColumnInfo>>;

/// [`DataSourcePort`] backed by in-process maps.
///
/// Queries are matched on their whitespace-normalized SQL text; parameters are
/// ignored.
#[derive(Debug, Default)]
pub struct InMemoryDataSource {
    schemas: RwLock<BTreeMap<String, Tables>>,
    queries: RwLock<HashMap<String, Vec<Map<String, Value>>>>,
    offline: bool,
}

impl InMemoryDataSource {
    /// Empty, reachable data source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Data source whose every call fails with a connection error.
    #[must_use]
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    /// Data source answering `sql` with the rows of a JSON array of objects.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not an array of objects.
    pub fn from_json(sql: &str, json: &str) -> Result<Self, serde_json::Error> {
        let rows: Vec<Map<String, Value>> = serde_json::from_str(json)?;
        Ok(Self::new().with_query(sql, rows))
    }

    /// Register `schema.table` with its columns.
    #[must_use]
    pub fn with_table(self, schema: &str, table: &str, columns: Vec<ColumnInfo>) -> Self {
        self.define_table(schema, table, columns);
        self
    }

    /// Register the rows returned for `sql`.
    #[must_use]
    pub fn with_query(self, sql: &str, rows: Vec<Map<String, Value>>) -> Self {
        self.set_query_result(sql, rows);
        self
    }

    /// Register or replace `schema.table`.
    pub fn define_table(&self, schema: &str, table: &str, columns: Vec<ColumnInfo>) {
        let mut schemas = self
            .schemas
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        schemas
            .entry(schema.to_string())
            .or_default()
            .insert(table.to_string(), columns);
    }

    /// Register or replace the rows returned for `sql`.
    pub fn set_query_result(&self, sql: &str, rows: Vec<Map<String, Value>>) {
        let mut queries = self
            .queries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        queries.insert(normalize_sql(sql), rows);
    }

    fn ensure_online(&self) -> Result<(), DataSourceError> {
        if self.offline {
            return Err(DataSourceError::Connection {
                message: "data source is offline".to_string(),
            });
        }
        Ok(())
    }
}

fn normalize_sql(sql: &str) -> String {
    sql.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[async_trait]
impl DataSourcePort for InMemoryDataSource {
    async fn test_connection(&self) -> Result<ConnectionTest, DataSourceError> {
        let started = Instant::now();
        self.ensure_online()?;
        Ok(ConnectionTest {
            latency_ms: elapsed_ms(started),
        })
    }

    async fn list_schemas(&self) -> Result<Vec<String>, DataSourceError> {
        self.ensure_online()?;
        let schemas = self.schemas.read().unwrap_or_else(PoisonError::into_inner);
        Ok(schemas.keys().cloned().collect())
    }

    async fn list_tables(&self, schema: &str) -> Result<Vec<String>, DataSourceError> {
        self.ensure_online()?;
        let schemas = self.schemas.read().unwrap_or_else(PoisonError::into_inner);
        let tables = schemas.get(schema).ok_or_else(|| DataSourceError::NotFound {
            kind: "schema",
            name: schema.to_string(),
        })?;
        Ok(tables.keys().cloned().collect())
    }

    async fn list_columns(
        &self,
        schema: &str,
        table: &str,
    ) -> Result<Vec<ColumnInfo>, DataSourceError> {
        self.ensure_online()?;
        let schemas = self.schemas.read().unwrap_or_else(PoisonError::into_inner);
        schemas
            .get(schema)
            .and_then(|tables| tables.get(table))
            .cloned()
            .ok_or_else(|| DataSourceError::NotFound {
                kind: "table",
                name: format!("{schema}.{table}"),
            })
    }

    async fn run_query(&self, sql: &str, _params: &[Value]) -> Result<QueryResult, DataSourceError> {
        let started = Instant::now();
        self.ensure_online()?;

        let rows = {
            let queries = self.queries.read().unwrap_or_else(PoisonError::into_inner);
            queries
                .get(&normalize_sql(sql))
                .cloned()
                .ok_or_else(|| DataSourceError::Query {
                    message: format!("no result registered for: {sql}"),
                })?
        };

        Ok(QueryResult {
            row_count: rows.len(),
            rows,
            latency_ms: elapsed_ms(started),
        })
    }
}
