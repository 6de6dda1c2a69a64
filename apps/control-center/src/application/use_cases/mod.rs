//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod load_positions;
mod refresh_snapshot;

pub use load_positions::{LoadPositionsError, LoadPositionsUseCase};
pub use refresh_snapshot::{PortfolioSnapshot, RefreshSnapshotUseCase};
