//! Priority scoring of the open option book.
//!
//! Each position is tested against four rules in fixed order; the first rule
//! that fires sets the score and reason, and a position matching none is left
//! off the list. The result is sorted by score (stable, so equal scores keep
//! input order) and cut to `max_entries`.

use rust_decimal::Decimal;
use tracing::debug;

use super::config::WatchlistConfig;
use super::priority::{PriceSource, PriorityOption, PriorityReason};
use crate::domain::option_position::{OptionPosition, OptionRight};

/// Score inputs shared by every rule.
#[derive(Debug, Clone, Copy)]
struct Observation {
    distance_pct: Decimal,
    abs_delta: Decimal,
    dte: i64,
    itm: bool,
}

/// Signed percent distance from `price` to `strike`; negative when in the money.
///
/// Puts: `(price - strike) / strike × 100`. Calls: `(strike - price) / strike × 100`.
/// Returns `None` for a zero strike or when the result does not fit a `Decimal`.
#[must_use]
pub fn distance_to_strike(right: OptionRight, strike: Decimal, price: Decimal) -> Option<Decimal> {
    let gap = match right {
        OptionRight::Put => price.checked_sub(strike)?,
        OptionRight::Call => strike.checked_sub(price)?,
    };
    gap.checked_div(strike)?.checked_mul(Decimal::ONE_HUNDRED)
}

/// Rule outcome: the score (`None` on overflow) and the matching reason.
type RuleMatch = (Option<Decimal>, PriorityReason);

/// Rank `positions` for the watchlist.
///
/// `current_price` maps an underlying ticker to its last price. A missing quote,
/// and any quote that is zero or negative, is replaced by
/// `strike × fallback_price_multiplier`. Positions with a non-positive strike,
/// or whose distance or score overflows `Decimal`, are skipped.
pub fn score_positions<'a, I, F>(
    positions: I,
    current_price: F,
    config: &WatchlistConfig,
) -> Vec<PriorityOption>
where
    I: IntoIterator<Item = &'a OptionPosition>,
    F: Fn(&str) -> Option<Decimal>,
{
    let mut candidates: Vec<Candidate<'a>> = positions
        .into_iter()
        .filter_map(|position| score_one(position, &current_price, config))
        .collect();

    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates.truncate(config.max_entries);

    candidates.into_iter().map(Candidate::into_option).collect()
}

struct Candidate<'a> {
    position: &'a OptionPosition,
    price: Decimal,
    source: PriceSource,
    distance_pct: Decimal,
    score: Decimal,
    reason: PriorityReason,
}

impl Candidate<'_> {
    fn into_option(self) -> PriorityOption {
        PriorityOption {
            position: self.position.clone(),
            current_price: self.price,
            price_source: self.source,
            distance_to_strike: self.distance_pct,
            distance_to_strike_abs: (self.price - self.position.strike()).abs(),
            priority_score: self.score,
            reason: self.reason,
        }
    }
}

fn score_one<'a, F>(
    position: &'a OptionPosition,
    current_price: &F,
    config: &WatchlistConfig,
) -> Option<Candidate<'a>>
where
    F: Fn(&str) -> Option<Decimal>,
{
    let strike = position.strike();
    if strike <= Decimal::ZERO {
        debug!(position_id = position.id(), %strike, "Skipping position with non-positive strike");
        return None;
    }

    let quoted = current_price(position.underlying().as_str()).filter(|q| *q > Decimal::ZERO);
    let (price, source) = match quoted {
        Some(quote) => (quote, PriceSource::Quoted),
        None => {
            let Some(proxy) = strike.checked_mul(config.fallback_price_multiplier) else {
                debug!(position_id = position.id(), %strike, "Fallback price overflowed; skipping");
                return None;
            };
            (proxy, PriceSource::Fallback)
        }
    };

    let Some(distance_pct) = distance_to_strike(position.right(), strike, price) else {
        debug!(position_id = position.id(), %strike, %price, "Distance to strike overflowed; skipping");
        return None;
    };
    let observation = Observation {
        distance_pct,
        abs_delta: position.delta().abs(),
        dte: position.dte(),
        itm: position.is_itm(price),
    };

    let Some((score, reason)) = check_itm(&observation, config)
        .or_else(|| check_high_delta(&observation, config))
        .or_else(|| check_near_strike(&observation, config))
        .or_else(|| check_expiring_soon(&observation, config))
    else {
        debug!(position_id = position.id(), "Position not on watchlist");
        return None;
    };
    let Some(score) = score else {
        debug!(position_id = position.id(), %reason, "Priority score overflowed; skipping");
        return None;
    };

    Some(Candidate {
        position,
        price,
        source,
        distance_pct,
        score,
        reason,
    })
}

/// `base + weight × factor`, or `None` on overflow.
fn weighted(base: Decimal, weight: Decimal, factor: Decimal) -> Option<Decimal> {
    weight.checked_mul(factor)?.checked_add(base)
}

fn check_itm(obs: &Observation, config: &WatchlistConfig) -> Option<RuleMatch> {
    obs.itm.then(|| {
        (
            weighted(config.itm_base, config.itm_distance_weight, obs.distance_pct.abs()),
            PriorityReason::Itm,
        )
    })
}

fn check_high_delta(obs: &Observation, config: &WatchlistConfig) -> Option<RuleMatch> {
    (obs.abs_delta > config.high_delta_threshold).then(|| {
        (
            weighted(config.high_delta_base, config.high_delta_weight, obs.abs_delta),
            PriorityReason::HighDelta,
        )
    })
}

fn check_near_strike(obs: &Observation, config: &WatchlistConfig) -> Option<RuleMatch> {
    let distance = obs.distance_pct.abs();
    (distance < config.near_strike_pct).then(|| {
        (
            config.near_strike_pct.checked_sub(distance).and_then(|room| {
                weighted(config.near_strike_base, config.near_strike_weight, room)
            }),
            PriorityReason::NearStrike,
        )
    })
}

fn check_expiring_soon(obs: &Observation, config: &WatchlistConfig) -> Option<RuleMatch> {
    (obs.dte <= config.expiring_dte && obs.abs_delta > config.expiring_min_delta).then(|| {
        (
            config.expiring_dte.checked_sub(obs.dte).and_then(|days_left| {
                weighted(config.expiring_base, config.expiring_weight, Decimal::from(days_left))
            }),
            PriorityReason::ExpiringSoon,
        )
    })
}
