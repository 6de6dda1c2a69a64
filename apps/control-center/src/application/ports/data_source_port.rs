//! Data Source Port (Driven Port)
//!
//! One capability interface over the user's external portfolio database.
//! Adapters decide how to reach it; use cases only see this trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Supported database engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseKind {
    /// PostgreSQL.
    Postgresql,
    /// Microsoft SQL Server.
    Mssql,
}

impl DatabaseKind {
    /// Conventional port of the engine.
    #[must_use]
    pub const fn default_port(&self) -> u16 {
        match self {
            Self::Postgresql => 5432,
            Self::Mssql => 1433,
        }
    }
}

const fn default_use_ssl() -> bool {
    true
}

/// Connection settings for an external database.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Engine.
    pub kind: DatabaseKind,
    /// Host name or address.
    pub host: String,
    /// Port; the engine default when omitted.
    #[serde(default)]
    pub port: Option<u16>,
    /// Database name.
    pub database: String,
    /// Default schema.
    #[serde(default)]
    pub schema: Option<String>,
    /// Login.
    pub username: String,
    /// Password. Never serialized.
    #[serde(default, skip_serializing)]
    pub password: String,
    /// Use TLS.
    #[serde(default = "default_use_ssl")]
    pub use_ssl: bool,
    /// Disabled by the user; the connection is kept but not used.
    #[serde(default)]
    pub paused: bool,
}

impl ConnectionConfig {
    /// Port to connect to.
    #[must_use]
    pub fn effective_port(&self) -> u16 {
        self.port.unwrap_or_else(|| self.kind.default_port())
    }
}

impl std::fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("host", &self.host)
            .field("port", &self.effective_port())
            .field("database", &self.database)
            .field("schema", &self.schema)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("use_ssl", &self.use_ssl)
            .field("paused", &self.paused)
            .finish()
    }
}

/// Health of a configured connection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    /// Last call succeeded.
    Ok,
    /// Reachable but degraded.
    Warning,
    /// Last call failed.
    Error,
    /// Never connected.
    #[default]
    Disconnected,
    /// Disabled by the user.
    Paused,
}

impl ConnectionStatus {
    /// Status after a connectivity check; round trips slower than
    /// `slow_after_ms` read as [`ConnectionStatus::Warning`].
    #[must_use]
    pub fn from_check(check: &Result<ConnectionTest, DataSourceError>, slow_after_ms: u64) -> Self {
        match check {
            Ok(test) if test.latency_ms > slow_after_ms => Self::Warning,
            Ok(_) => Self::Ok,
            Err(DataSourceError::Unsupported { .. }) => Self::Disconnected,
            Err(_) => Self::Error,
        }
    }
}

/// Result of a connectivity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionTest {
    /// Round-trip time.
    pub latency_ms: u64,
}

/// Column metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnInfo {
    /// Column name.
    pub name: String,
    /// Engine-specific type name.
    pub data_type: String,
    /// Whether NULL is allowed.
    pub nullable: bool,
}

/// Rows returned by a query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    /// One JSON object per row, keyed by column name.
    pub rows: Vec<Map<String, Value>>,
    /// Rows returned or affected.
    pub row_count: usize,
    /// Execution time.
    pub latency_ms: u64,
}

/// Data source errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataSourceError {
    /// Could not reach or authenticate against the database.
    #[error("Connection failed: {message}")]
    Connection {
        /// Error details.
        message: String,
    },

    /// The database rejected the query.
    #[error("Query failed: {message}")]
    Query {
        /// Error details.
        message: String,
    },

    /// Schema or table does not exist.
    #[error("{kind} not found: {name}")]
    NotFound {
        /// `schema` or `table`.
        kind: &'static str,
        /// Requested name.
        name: String,
    },

    /// The adapter cannot perform this operation.
    #[error("Unsupported operation: {operation}")]
    Unsupported {
        /// Operation name.
        operation: String,
    },
}

/// Port for the external portfolio database.
#[async_trait]
pub trait DataSourcePort: Send + Sync {
    /// Open a connection and report latency.
    async fn test_connection(&self) -> Result<ConnectionTest, DataSourceError>;

    /// User schemas, sorted.
    async fn list_schemas(&self) -> Result<Vec<String>, DataSourceError>;

    /// Tables in `schema`, sorted.
    async fn list_tables(&self, schema: &str) -> Result<Vec<String>, DataSourceError>;

    /// Columns of `schema.table` in ordinal order.
    async fn list_columns(&self, schema: &str, table: &str)
    -> Result<Vec<ColumnInfo>, DataSourceError>;

    /// Run `sql` with positional `params`.
    async fn run_query(&self, sql: &str, params: &[Value]) -> Result<QueryResult, DataSourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_yaml() -> &'static str {
        "kind: postgresql\nhost: db.local\ndatabase: portfolio\nusername: reader\npassword: s3cret\n"
    }

    #[test]
    fn connection_defaults() {
        let config: ConnectionConfig = serde_yaml_bw::from_str(config_yaml()).unwrap();

        assert!(config.use_ssl);
        assert_eq!(config.effective_port(), 5432);
        assert!(config.schema.is_none());
    }

    #[test]
    fn password_never_leaves_the_process() {
        let config: ConnectionConfig = serde_yaml_bw::from_str(config_yaml()).unwrap();

        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("s3cret"));
        assert!(!format!("{config:?}").contains("s3cret"));
    }

    #[test]
    fn connections_are_active_unless_paused() {
        let active: ConnectionConfig = serde_yaml_bw::from_str(config_yaml()).unwrap();
        let paused: ConnectionConfig =
            serde_yaml_bw::from_str(&format!("{}paused: true\n", config_yaml())).unwrap();

        assert!(!active.paused);
        assert!(paused.paused);
    }

    #[test]
    fn status_follows_check_outcome() {
        let fast = Ok(ConnectionTest { latency_ms: 40 });
        let slow = Ok(ConnectionTest { latency_ms: 2_500 });
        let down = Err(DataSourceError::Connection {
            message: "refused".to_string(),
        });
        let no_driver = Err(DataSourceError::Unsupported {
            operation: "test_connection".to_string(),
        });

        assert_eq!(ConnectionStatus::from_check(&fast, 1_000), ConnectionStatus::Ok);
        assert_eq!(ConnectionStatus::from_check(&slow, 1_000), ConnectionStatus::Warning);
        assert_eq!(ConnectionStatus::from_check(&down, 1_000), ConnectionStatus::Error);
        assert_eq!(
            ConnectionStatus::from_check(&no_driver, 1_000),
            ConnectionStatus::Disconnected
        );
    }

    #[test]
    fn status_wire_names() {
        assert_eq!(serde_json::to_value(ConnectionStatus::Ok).unwrap(), "ok");
        assert_eq!(ConnectionStatus::default(), ConnectionStatus::Disconnected);
    }

    #[test]
    fn error_display() {
        let err = DataSourceError::NotFound {
            kind: "table",
            name: "public.positions".to_string(),
        };
        assert_eq!(err.to_string(), "table not found: public.positions");
    }
}
