// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Control Center - Rust Core Library
//!
//! Portfolio computation core of the Investment Control Center.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Pure portfolio logic
//!   - `option_position`: Position rows, roll history, roll aggregation and break-even
//!   - `watchlist`: Priority scoring of the open book
//!   - `option_book`: Expiry grouping and book totals
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: `DataSourcePort`, `PriceLookup`
//!   - `use_cases`: `LoadPositions`, `RefreshSnapshot`
//!
//! - **Infrastructure**: Adapters
//!   - `data_source`: In-memory data source
//!   - `price_table`: Static price table

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// Configuration loading and validation.
pub mod config;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::option_book::{BookTotals, ExpiryBucket, ExpiryGroup};
pub use domain::option_position::{
    OptionPosition, OptionPositionError, OptionPositionRecord, OptionRight, RollHistory,
    RollHistoryEntry, RollSummary, aggregate_rolls,
};
pub use domain::shared::{Money, Symbol, Timestamp};
pub use domain::watchlist::{PriorityOption, PriorityReason, WatchlistConfig, score_positions};

// Application re-exports
pub use application::ports::{ConnectionStatus, DataSourceError, DataSourcePort, PriceLookup};
pub use application::use_cases::{
    LoadPositionsError, LoadPositionsUseCase, PortfolioSnapshot, RefreshSnapshotUseCase,
};

// Infrastructure re-exports
pub use infrastructure::{InMemoryDataSource, StaticPriceTable, file_positions_source};
