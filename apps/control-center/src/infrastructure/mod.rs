//! Infrastructure Layer
//!
//! Adapters implementing the ports defined in the application layer:
//!
//! - `data_source/`: [`DataSourcePort`](crate::application::ports::DataSourcePort) adapters
//! - `price_table`: static [`PriceLookup`](crate::application::ports::PriceLookup)

pub mod data_source;
pub mod price_table;

pub use data_source::{InMemoryDataSource, file_positions_source};
pub use price_table::StaticPriceTable;
