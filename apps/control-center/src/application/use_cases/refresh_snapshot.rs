//! Refresh Snapshot Use Case
//!
//! Turns raw position rows into one immutable [`PortfolioSnapshot`]: every
//! derived figure is computed once per refresh and never written back.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, instrument};

use crate::application::ports::PriceLookup;
use crate::domain::option_book::{BookTotals, ExpiryGroup, group_by_expiry};
use crate::domain::option_position::{OptionPosition, OptionPositionError, OptionPositionRecord};
use crate::domain::shared::Timestamp;
use crate::domain::watchlist::{
    PriorityOption, WatchlistConfig, WatchlistSummary, score_positions,
};

/// Derived view of the option book at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    /// Date used for days-to-expiry.
    pub as_of: NaiveDate,
    /// When the snapshot was built.
    pub generated_at: Timestamp,
    /// Enriched positions, in input order.
    pub positions: Vec<OptionPosition>,
    /// Priority watchlist, most urgent first.
    pub watchlist: Vec<PriorityOption>,
    /// Watchlist footer.
    pub watchlist_summary: WatchlistSummary,
    /// Positions grouped by expiry, earliest first.
    pub expiry_groups: Vec<ExpiryGroup>,
    /// Book-wide totals.
    pub totals: BookTotals,
}

impl PortfolioSnapshot {
    /// Puts, in input order.
    pub fn puts(&self) -> impl Iterator<Item = &OptionPosition> {
        self.positions.iter().filter(|p| p.right().is_put())
    }

    /// Calls, in input order.
    pub fn calls(&self) -> impl Iterator<Item = &OptionPosition> {
        self.positions.iter().filter(|p| p.right().is_call())
    }

    /// Look up a position by ID.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<&OptionPosition> {
        self.positions.iter().find(|p| p.id() == id)
    }
}

/// Use case for rebuilding the portfolio snapshot.
#[derive(Debug, Clone, Default)]
pub struct RefreshSnapshotUseCase {
    watchlist: WatchlistConfig,
}

impl RefreshSnapshotUseCase {
    /// Create a use case with the given scoring constants.
    #[must_use]
    pub const fn new(watchlist: WatchlistConfig) -> Self {
        Self { watchlist }
    }

    /// Scoring constants in use.
    #[must_use]
    pub const fn watchlist_config(&self) -> &WatchlistConfig {
        &self.watchlist
    }

    /// Build a snapshot of `records` as of `as_of`.
    ///
    /// # Errors
    ///
    /// Fails on the first record with a zero risk-bearing size; no partial
    /// snapshot is returned.
    #[instrument(skip_all, fields(records = records.len(), %as_of))]
    pub fn execute<P>(
        &self,
        records: Vec<OptionPositionRecord>,
        prices: &P,
        as_of: NaiveDate,
    ) -> Result<PortfolioSnapshot, OptionPositionError>
    where
        P: PriceLookup + ?Sized,
    {
        let positions = records
            .into_iter()
            .map(|record| OptionPosition::enrich(record, as_of))
            .collect::<Result<Vec<_>, _>>()?;

        let watchlist = score_positions(
            &positions,
            |underlying| prices.current_price(underlying),
            &self.watchlist,
        );
        let watchlist_summary = WatchlistSummary::from_entries(&watchlist);
        let expiry_groups = group_by_expiry(&positions);
        let totals = BookTotals::from_positions(&positions);

        info!(
            positions = totals.position_count,
            rolled = totals.rolled_count,
            watchlist = watchlist_summary.total,
            itm = watchlist_summary.itm,
            estimated_prices = watchlist_summary.estimated,
            "Portfolio snapshot refreshed"
        );

        Ok(PortfolioSnapshot {
            as_of,
            generated_at: Timestamp::now(),
            positions,
            watchlist,
            watchlist_summary,
            expiry_groups,
            totals,
        })
    }
}
