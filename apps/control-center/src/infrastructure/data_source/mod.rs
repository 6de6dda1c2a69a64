//! Data source adapters.

mod in_memory;

pub use in_memory::InMemoryDataSource;

use tracing::info;

use crate::application::ports::DataSourceError;
use crate::config::DataSourceConfig;

/// Data source serving the rows of a positions file under the configured
/// positions query.
///
/// Only database-less setups can use it: a configured connection must be
/// paused, since no PostgreSQL or SQL Server driver is built in.
///
/// # Errors
///
/// - [`DataSourceError::Unsupported`] if an active connection is configured
/// - [`DataSourceError::Query`] if `positions_json` is not an array of objects
pub fn file_positions_source(
    config: &DataSourceConfig,
    positions_json: &str,
) -> Result<InMemoryDataSource, DataSourceError> {
    if let Some(connection) = &config.connection {
        if !connection.paused {
            return Err(DataSourceError::Unsupported {
                operation: format!(
                    "{:?} connection to {}:{}",
                    connection.kind,
                    connection.host,
                    connection.effective_port()
                ),
            });
        }
        info!(connection = %connection.name, "Connection paused, serving positions from file");
    }

    InMemoryDataSource::from_json(&config.positions_query, positions_json).map_err(|e| {
        DataSourceError::Query {
            message: format!("positions file is not an array of rows: {e}"),
        }
    })
}
