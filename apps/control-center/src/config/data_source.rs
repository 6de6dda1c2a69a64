//! Data source configuration.

use serde::{Deserialize, Serialize};

use crate::application::ports::ConnectionConfig;

/// External portfolio database settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSourceConfig {
    /// Connection; absent when positions come from a file.
    #[serde(default)]
    pub connection: Option<ConnectionConfig>,
    /// Query returning one row per open option position.
    #[serde(default = "default_positions_query")]
    pub positions_query: String,
    /// Connection checks slower than this report a warning.
    #[serde(default = "default_slow_after_ms")]
    pub slow_after_ms: u64,
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            connection: None,
            positions_query: default_positions_query(),
            slow_after_ms: default_slow_after_ms(),
        }
    }
}

fn default_positions_query() -> String {
    "SELECT * FROM option_positions WHERE quantity <> 0".to_string()
}

const fn default_slow_after_ms() -> u64 {
    1_000
}
