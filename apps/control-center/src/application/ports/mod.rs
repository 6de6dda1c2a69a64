//! Application Ports (Driven)
//!
//! Interfaces to the systems the use cases depend on:
//! - [`DataSourcePort`]: the external portfolio database
//! - [`PriceLookup`]: last underlying prices for watchlist scoring

mod data_source_port;
mod price_lookup_port;

pub use data_source_port::{
    ColumnInfo, ConnectionConfig, ConnectionStatus, ConnectionTest, DataSourceError,
    DataSourcePort, DatabaseKind, QueryResult,
};
pub use price_lookup_port::PriceLookup;
