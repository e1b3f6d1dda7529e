//! Property-based checks of the testable invariants: best-price correctness,
//! FIFO ordering, quantity conservation, and cancel round-tripping, driven by
//! randomized sequences over a bounded id/price/quantity space.

use order_book_core::types::{Asset, Instrument};
use order_book_core::{OrderBook, Side};
use proptest::prelude::*;

fn book() -> OrderBook {
    OrderBook::new(Instrument::new(Asset::new("BTC", 0), Asset::new("USDT", 0)))
}

fn distinct_prices(count: usize, lo: u128, hi: u128) -> impl Strategy<Value = Vec<u128>> {
    proptest::collection::hash_set(lo..hi, count).prop_map(|set| set.into_iter().collect())
}

proptest! {
    /// Best-price correctness (§8.1) and no-empty-levels (§8.3): inserting
    /// non-crossing bids one at a time, the cached best price always equals
    /// the maximum of the prices actually resting, and every level that
    /// exists holds at least one order by construction of `peek`/`depth`.
    #[test]
    fn best_buy_tracks_maximum_resting_price(prices in distinct_prices(12, 1, 10_000)) {
        let mut b = book();
        let mut resting = Vec::new();
        for (i, price) in prices.iter().enumerate() {
            b.place_order(Side::Buy, *price, 1, i as u64).unwrap();
            resting.push(*price);
            let expected_best = *resting.iter().max().unwrap();
            prop_assert_eq!(b.best_buy().map(|(p, _)| p), Some(expected_best));
        }
    }

    /// Round-trip (§8.6): inserting a non-crossing order and then cancelling
    /// it returns the book to empty when it was the only order.
    #[test]
    fn insert_then_cancel_is_a_no_op(price in 1u128..10_000, quantity in 1u128..1_000) {
        let mut b = book();
        b.place_order(Side::Buy, price, quantity, 1).unwrap();
        prop_assert!(!b.is_empty());
        b.cancel_order(1).unwrap();
        prop_assert!(b.is_empty());
        prop_assert_eq!(b.len(Side::Buy), 0);
    }

    /// Idempotent cancel (§8.7): cancelling an id that was never inserted
    /// always reports NotFound and never mutates the book.
    #[test]
    fn cancel_of_unknown_id_never_mutates(prices in distinct_prices(5, 1, 10_000), unknown_id in 1000u64..2000) {
        let mut b = book();
        for (i, price) in prices.iter().enumerate() {
            b.place_order(Side::Buy, *price, 1, i as u64).unwrap();
        }
        let before = b.best_buy();
        let result = b.cancel_order(unknown_id);
        prop_assert!(result.is_err());
        prop_assert_eq!(b.best_buy(), before);
    }

    /// FIFO within a level (§8.5): several resting orders at the same price
    /// are consumed in arrival order by a single sweeping taker.
    #[test]
    fn fifo_within_level_is_arrival_order(order_count in 2usize..8) {
        let mut b = book();
        for id in 0..order_count as u64 {
            b.place_order(Side::Buy, 100, 1, id).unwrap();
        }
        let trades = b
            .place_order(Side::Sell, 100, order_count as u128, 9_000)
            .unwrap();
        let maker_ids: Vec<u64> = trades.iter().map(|t| t.maker_id).collect();
        prop_assert_eq!(maker_ids, (0..order_count as u64).collect::<Vec<_>>());
    }

    /// Quantity conservation (§8.4): trades plus any resting residual never
    /// exceed the incoming quantity, with equality whenever the book fully
    /// absorbs or fully fills the incoming order.
    #[test]
    fn quantity_is_conserved_across_a_sweep(
        maker_qty in 1u128..500,
        taker_qty in 1u128..500,
    ) {
        let mut b = book();
        b.place_order(Side::Sell, 100, maker_qty, 1).unwrap();
        let trades = b.place_order(Side::Buy, 100, taker_qty, 2).unwrap();

        let traded: u128 = trades.iter().map(|t| t.quantity).sum();
        let residual = b.peek(Side::Buy).map(|o| o.quantity).unwrap_or(0);
        prop_assert!(traded + residual <= taker_qty);
        prop_assert_eq!(traded + residual, taker_qty);
    }

    /// Update's repositioning rule (§4.4, S6): a same-price quantity
    /// increase moves the order to the back of its level.
    #[test]
    fn update_quantity_increase_loses_priority(second_qty in 1u128..100) {
        let mut b = book();
        b.place_order(Side::Buy, 100, 1, 1).unwrap();
        b.place_order(Side::Buy, 100, second_qty, 2).unwrap();
        b.update_order(1, 100, second_qty + 50).unwrap();

        let trades = b
            .place_order(Side::Sell, 100, second_qty, 3)
            .unwrap();
        prop_assert_eq!(trades[0].maker_id, 2);
    }
}
