//! Integration tests for priority watchlist scoring.

mod common;

use std::collections::HashMap;

use control_center::domain::watchlist::PriceSource;
use control_center::{OptionRight, PriorityReason, WatchlistConfig, score_positions};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use test_case::test_case;

#[test_case(OptionRight::Put, dec!(150), dec!(145), Some(dec!(-0.4)), 30 => Some((PriorityReason::Itm, dec!(106.67))); "itm put")]
#[test_case(OptionRight::Call, dec!(200), dec!(210), Some(dec!(0.6)), 30 => Some((PriorityReason::Itm, dec!(110))); "itm call beats high delta")]
#[test_case(OptionRight::Call, dec!(200), dec!(190), Some(dec!(0.5)), 30 => Some((PriorityReason::HighDelta, dec!(95))); "high delta call")]
#[test_case(OptionRight::Put, dec!(100), dec!(101), Some(dec!(-0.35)), 30 => Some((PriorityReason::NearStrike, dec!(90))); "delta at threshold falls through to near strike")]
#[test_case(OptionRight::Put, dec!(100), dec!(105), Some(dec!(-0.3)), 2 => Some((PriorityReason::ExpiringSoon, dec!(65))); "five percent away is not near")]
#[test_case(OptionRight::Put, dec!(100), dec!(110), Some(dec!(-0.3)), 7 => Some((PriorityReason::ExpiringSoon, dec!(40))); "expiring on day seven")]
#[test_case(OptionRight::Put, dec!(100), dec!(110), Some(dec!(-0.3)), 8 => None; "day eight is not expiring")]
#[test_case(OptionRight::Call, dec!(200), dec!(180), Some(dec!(0.1)), 4 => None; "far call with low delta")]
#[test_case(OptionRight::Put, dec!(100), dec!(100), None, 30 => Some((PriorityReason::NearStrike, dec!(100))); "at the money is near strike")]
fn scores_single_position(
    right: OptionRight,
    strike: Decimal,
    price: Decimal,
    delta: Option<Decimal>,
    dte: u64,
) -> Option<(PriorityReason, Decimal)> {
    let book = [common::position("p1", "TEST", right, strike, delta, dte)];
    score_positions(&book, |_| Some(price), &WatchlistConfig::default())
        .first()
        .map(|entry| (entry.reason, entry.priority_score.round_dp(2)))
}

#[test]
fn mixed_book_is_ranked_by_urgency() {
    let book = [
        common::position("near", "JPM", OptionRight::Put, dec!(200), Some(dec!(-0.2)), 30),
        common::position("itm", "AAPL", OptionRight::Put, dec!(190), Some(dec!(-0.6)), 30),
        common::position("skip", "WMT", OptionRight::Call, dec!(200), Some(dec!(0.05)), 45),
        common::position("delta", "NVDA", OptionRight::Call, dec!(900), Some(dec!(0.45)), 20),
        common::position("expiring", "BAC", OptionRight::Put, dec!(33), Some(dec!(-0.25)), 2),
    ];
    let quotes: HashMap<&str, Decimal> = [
        ("AAPL", dec!(185.50)),
        ("JPM", dec!(198.75) + dec!(5)),
        ("WMT", dec!(168.40)),
        ("NVDA", dec!(875.60)),
        ("BAC", dec!(37.25)),
    ]
    .into_iter()
    .collect();

    let list = score_positions(&book, |u| quotes.get(u).copied(), &WatchlistConfig::default());
    let ids: Vec<&str> = list.iter().map(|entry| entry.position.id()).collect();

    assert_eq!(ids, ["itm", "delta", "near", "expiring"]);
}

#[test]
fn custom_config_changes_cap_and_threshold() {
    let book: Vec<_> = (0..5)
        .map(|i| {
            common::position(
                &format!("p{i}"),
                "AAPL",
                OptionRight::Put,
                dec!(100),
                Some(dec!(-0.3)),
                30,
            )
        })
        .collect();
    let config = WatchlistConfig {
        high_delta_threshold: dec!(0.25),
        max_entries: 2,
        ..WatchlistConfig::default()
    };

    let list = score_positions(&book, |_| Some(dec!(150)), &config);

    assert_eq!(list.len(), 2);
    assert!(list.iter().all(|entry| entry.reason == PriorityReason::HighDelta));
    assert_eq!(list[0].position.id(), "p0");
}

#[test]
fn fallback_price_is_strike_times_multiplier() {
    let book = [common::position("p1", "UNKNOWN", OptionRight::Put, dec!(80), Some(dec!(-0.5)), 30)];

    let list = score_positions(&book, |_| None, &WatchlistConfig::default());

    assert_eq!(list[0].price_source, PriceSource::Fallback);
    assert_eq!(list[0].current_price, dec!(84));
}

fn book_strategy() -> impl Strategy<Value = Vec<(bool, i64, i64, Option<i64>, u64)>> {
    prop::collection::vec(
        (
            any::<bool>(),
            1i64..500,
            1i64..500,
            prop::option::of(-100i64..=100),
            0u64..60,
        ),
        0..40,
    )
}

proptest! {
    #[test]
    fn watchlist_is_capped_and_sorted(rows in book_strategy()) {
        let mut book = Vec::with_capacity(rows.len());
        let mut quotes = HashMap::new();
        for (i, (is_put, strike, price, delta, dte)) in rows.into_iter().enumerate() {
            let underlying = format!("T{i}");
            let right = if is_put { OptionRight::Put } else { OptionRight::Call };
            let delta = delta.map(|d| Decimal::new(d, 2));
            book.push(common::position(&format!("p{i}"), &underlying, right, Decimal::from(strike), delta, dte));
            quotes.insert(underlying, Decimal::from(price));
        }

        let list = score_positions(&book, |u| quotes.get(u).copied(), &WatchlistConfig::default());

        prop_assert!(list.len() <= 8);
        prop_assert!(list.windows(2).all(|w| w[0].priority_score >= w[1].priority_score));
        for entry in &list {
            if entry.position.is_itm(entry.current_price) {
                prop_assert_eq!(entry.reason, PriorityReason::Itm);
            }
        }
    }

    #[test]
    fn scoring_is_deterministic(rows in book_strategy()) {
        let book: Vec<_> = rows
            .into_iter()
            .enumerate()
            .map(|(i, (is_put, strike, _, delta, dte))| {
                let right = if is_put { OptionRight::Put } else { OptionRight::Call };
                common::position(&format!("p{i}"), "AAPL", right, Decimal::from(strike), delta.map(|d| Decimal::new(d, 2)), dte)
            })
            .collect();

        let first = score_positions(&book, |_| Some(dec!(100)), &WatchlistConfig::default());
        let second = score_positions(&book, |_| Some(dec!(100)), &WatchlistConfig::default());

        prop_assert_eq!(first, second);
    }
}
