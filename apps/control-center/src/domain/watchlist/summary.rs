//! Watchlist footer figures.

use serde::Serialize;

use super::priority::{PriorityOption, PriorityReason};
use crate::domain::shared::Money;

/// Per-reason counts and capital at risk of a scored watchlist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistSummary {
    /// Number of entries.
    pub total: usize,
    /// Entries flagged in the money.
    pub itm: usize,
    /// Entries flagged for high delta.
    pub high_delta: usize,
    /// Entries flagged near strike.
    pub near_strike: usize,
    /// Entries flagged as expiring soon.
    pub expiring_soon: usize,
    /// Entries scored from a fallback price.
    pub estimated: usize,
    /// Capital at risk across the entries.
    pub capital_at_risk: Money,
}

impl WatchlistSummary {
    /// Summarize `entries`.
    #[must_use]
    pub fn from_entries(entries: &[PriorityOption]) -> Self {
        entries.iter().fold(Self::default(), |mut acc, entry| {
            acc.total += 1;
            match entry.reason {
                PriorityReason::Itm => acc.itm += 1,
                PriorityReason::HighDelta => acc.high_delta += 1,
                PriorityReason::NearStrike => acc.near_strike += 1,
                PriorityReason::ExpiringSoon => acc.expiring_soon += 1,
            }
            if entry.is_estimated() {
                acc.estimated += 1;
            }
            acc.capital_at_risk += entry.position.capital_at_risk();
            acc
        })
    }
}
