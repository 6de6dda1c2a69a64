//! Property tests for roll aggregation and break-even pricing.

mod common;

use control_center::domain::option_position::ContractSize;
use control_center::{Money, OptionPositionError, OptionRight, RollHistory, aggregate_rolls};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn cents() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..1_000_000).prop_map(|c| Decimal::new(c, 2))
}

fn history_strategy() -> impl Strategy<Value = RollHistory> {
    prop::collection::vec((cents(), cents()), 0..12).prop_map(|rolls| {
        rolls
            .into_iter()
            .map(|(credit, realized)| common::roll(credit, realized))
            .collect()
    })
}

fn right_strategy() -> impl Strategy<Value = OptionRight> {
    prop_oneof![Just(OptionRight::Put), Just(OptionRight::Call)]
}

fn size_strategy() -> impl Strategy<Value = ContractSize> {
    (1u32..=1000, prop_oneof![-50i32..=-1, 1i32..=50])
        .prop_map(|(multiplier, quantity)| ContractSize::new(multiplier, quantity))
}

proptest! {
    #[test]
    fn roll_count_matches_history(
        history in history_strategy(),
        strike in 1i64..10_000,
        right in right_strategy(),
        size in size_strategy(),
    ) {
        let summary = aggregate_rolls("p", &history, Decimal::from(strike), right, size).unwrap();

        prop_assert_eq!(summary.roll_count, history.len());
        prop_assert_eq!(summary.is_rolled, !history.is_empty());
        prop_assert_eq!(
            summary.total_roll_credits,
            history.iter().map(|e| e.credit()).sum::<Money>()
        );
        prop_assert_eq!(
            summary.total_realized_pl,
            history.iter().map(|e| e.realized_pl()).sum::<Money>()
        );
    }

    #[test]
    fn aggregation_is_idempotent(
        history in history_strategy(),
        strike in 1i64..10_000,
        right in right_strategy(),
        size in size_strategy(),
    ) {
        let strike = Decimal::from(strike);
        let first = aggregate_rolls("p", &history, strike, right, size).unwrap();
        let second = aggregate_rolls("p", &history, strike, right, size).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn more_cushion_lowers_put_and_raises_call_break_even(
        history in history_strategy(),
        extra in 1i64..1_000_000,
        strike in 1i64..10_000,
        size in size_strategy(),
    ) {
        prop_assume!(!history.is_empty());
        let strike = Decimal::from(strike);

        let mut richer = history.clone();
        richer.push(common::roll(Decimal::new(extra, 2), Decimal::ZERO));

        let put = aggregate_rolls("p", &history, strike, OptionRight::Put, size).unwrap();
        let richer_put = aggregate_rolls("p", &richer, strike, OptionRight::Put, size).unwrap();
        prop_assert!(richer_put.break_even_price < put.break_even_price);

        let call = aggregate_rolls("p", &history, strike, OptionRight::Call, size).unwrap();
        let richer_call = aggregate_rolls("p", &richer, strike, OptionRight::Call, size).unwrap();
        prop_assert!(richer_call.break_even_price > call.break_even_price);
    }

    #[test]
    fn zero_size_always_fails(
        history in history_strategy(),
        right in right_strategy(),
        multiplier in 0u32..=1000,
    ) {
        let result = aggregate_rolls(
            "p",
            &history,
            Decimal::ONE_HUNDRED,
            right,
            ContractSize::new(multiplier, 0),
        );
        let is_invalid_position = matches!(result, Err(OptionPositionError::InvalidPosition { .. }));
        prop_assert!(is_invalid_position);
    }
}

#[test]
fn empty_history_reports_strike_as_break_even() {
    let summary = aggregate_rolls(
        "p",
        &RollHistory::new(),
        Decimal::new(4250, 2),
        OptionRight::Call,
        ContractSize::new(100, -3),
    )
    .unwrap();

    assert!(!summary.is_rolled);
    assert_eq!(summary.roll_count, 0);
    assert_eq!(summary.total_roll_credits, Money::ZERO);
    assert_eq!(summary.total_realized_pl, Money::ZERO);
    assert_eq!(summary.break_even_price, Decimal::new(4250, 2));
}
