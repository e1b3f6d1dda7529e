//! Cross-side matching: consumes resting liquidity on the opposite side book
//! to satisfy an incoming (or repriced) order, best price first.

use crate::side_book::SideBook;
use crate::types::{Id, Price, Quantity, Side, Trade, Trades};

fn crosses(taker_side: Side, taker_price: Price, maker_price: Price) -> bool {
    match taker_side {
        Side::Buy => taker_price >= maker_price,
        Side::Sell => taker_price <= maker_price,
    }
}

/// Walks `maker` best-first, filling `taker_quantity` at the maker's resting
/// price (price improvement goes to the taker) until either the maker book
/// is exhausted, its best price no longer crosses, or the incoming quantity
/// is consumed. Returns the trades produced and the quantity left to rest.
pub(crate) fn match_against(
    taker_side: Side,
    taker_id: Id,
    taker_price: Price,
    taker_quantity: Quantity,
    maker: &mut SideBook,
) -> (Trades, Quantity) {
    let mut trades = Trades::new();
    let mut remaining = taker_quantity;

    while remaining > 0 {
        let Some(resting) = maker.peek() else {
            break;
        };
        if !crosses(taker_side, taker_price, resting.price) {
            break;
        }

        let maker_price = resting.price;
        let maker_id = resting.id;
        let fill_qty = remaining.min(resting.quantity);

        remaining -= fill_qty;
        trades.push(Trade::new(maker_price, fill_qty, maker_id, taker_id));
        maker.fill_best_front(fill_qty);
    }

    (trades, remaining)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Order;

    fn order(id: Id, side: Side, price: Price, qty: Quantity, ts: u64) -> Order {
        Order::new(id, side, price, qty, ts)
    }

    #[test]
    fn no_resting_liquidity_rests_whole_quantity() {
        let mut asks = SideBook::new(Side::Sell);
        let (trades, remaining) = match_against(Side::Buy, 1, 100, 5, &mut asks);
        assert!(trades.is_empty());
        assert_eq!(remaining, 5);
    }

    #[test]
    fn non_crossing_price_produces_no_trades() {
        let mut asks = SideBook::new(Side::Sell);
        asks.push(order(1, Side::Sell, 105, 10, 1));
        let (trades, remaining) = match_against(Side::Buy, 2, 100, 5, &mut asks);
        assert!(trades.is_empty());
        assert_eq!(remaining, 5);
    }

    #[test]
    fn exact_fill_at_maker_price() {
        let mut asks = SideBook::new(Side::Sell);
        asks.push(order(1, Side::Sell, 100, 5, 1));
        let (trades, remaining) = match_against(Side::Buy, 2, 100, 5, &mut asks);
        assert_eq!(trades, vec![Trade::new(100, 5, 1, 2)]);
        assert_eq!(remaining, 0);
        assert!(asks.peek().is_none());
    }

    #[test]
    fn partial_fill_leaves_residual_on_both_sides() {
        let mut asks = SideBook::new(Side::Sell);
        asks.push(order(1, Side::Sell, 100, 3, 1));
        let (trades, remaining) = match_against(Side::Buy, 2, 105, 10, &mut asks);
        assert_eq!(trades, vec![Trade::new(100, 3, 1, 2)]);
        assert_eq!(remaining, 7);
        assert!(asks.peek().is_none());
    }

    #[test]
    fn sweeps_multiple_levels_best_price_first() {
        let mut bids = SideBook::new(Side::Buy);
        bids.push(order(1, Side::Buy, 101, 1, 1));
        bids.push(order(2, Side::Buy, 100, 2, 2));
        bids.push(order(3, Side::Buy, 99, 5, 3));

        let (trades, remaining) = match_against(Side::Sell, 4, 99, 6, &mut bids);
        assert_eq!(
            trades,
            vec![
                Trade::new(101, 1, 1, 4),
                Trade::new(100, 2, 2, 4),
                Trade::new(99, 3, 3, 4),
            ]
        );
        assert_eq!(remaining, 0);
        assert_eq!(bids.peek().unwrap().id, 3);
        assert_eq!(bids.peek().unwrap().quantity, 2);
    }

    #[test]
    fn fifo_within_level_consumes_earliest_first() {
        let mut asks = SideBook::new(Side::Sell);
        asks.push(order(1, Side::Sell, 100, 2, 1));
        asks.push(order(2, Side::Sell, 100, 2, 2));

        let (trades, remaining) = match_against(Side::Buy, 3, 100, 2, &mut asks);
        assert_eq!(trades, vec![Trade::new(100, 2, 1, 3)]);
        assert_eq!(remaining, 0);
        assert_eq!(asks.peek().unwrap().id, 2);
    }
}
