//! The dual-sided order book: composes a bid side and an ask side, assigns
//! arrival timestamps, and exposes the public `place_order` / `update_order`
//! / `cancel_order` / `peek` / `len` / `depth` operations.

use crate::matching::match_against;
use crate::side_book::SideBook;
use crate::types::{
    Id, Instrument, Order, OrderBookError, Price, PriceAndQuantity, Quantity, Side, Trades,
};

/// A single-instrument, dual-sided limit order book.
///
/// The core is strictly single-threaded: every operation mutates or reads
/// `bid`/`ask` synchronously, with no internal locking and no I/O. Callers
/// serialize concurrent access themselves.
#[derive(Debug)]
pub struct OrderBook {
    pub instrument: Instrument,
    bid: SideBook,
    ask: SideBook,
    next_timestamp: u64,
}

impl OrderBook {
    /// Creates a fresh, empty order book for `instrument`.
    pub fn new(instrument: Instrument) -> Self {
        tracing::debug!(instrument = %instrument, "order book created");
        OrderBook {
            instrument,
            bid: SideBook::new(Side::Buy),
            ask: SideBook::new(Side::Sell),
            next_timestamp: 0,
        }
    }

    fn next_timestamp(&mut self) -> u64 {
        let ts = self.next_timestamp;
        self.next_timestamp += 1;
        ts
    }

    fn side_book(&self, side: Side) -> &SideBook {
        match side {
            Side::Buy => &self.bid,
            Side::Sell => &self.ask,
        }
    }

    fn side_book_mut(&mut self, side: Side) -> &mut SideBook {
        match side {
            Side::Buy => &mut self.bid,
            Side::Sell => &mut self.ask,
        }
    }

    fn opposite_mut(&mut self, side: Side) -> &mut SideBook {
        match side {
            Side::Buy => &mut self.ask,
            Side::Sell => &mut self.bid,
        }
    }

    fn resting_side(&self, id: Id) -> Option<Side> {
        if self.bid.contains(id) {
            Some(Side::Buy)
        } else if self.ask.contains(id) {
            Some(Side::Sell)
        } else {
            None
        }
    }

    /// Matches `(side, price, quantity)` against the opposite book and rests
    /// any residual on `side` under `id`. Shared by `place_order` and the
    /// repriced branch of `update_order`.
    fn match_and_rest(&mut self, id: Id, side: Side, price: Price, quantity: Quantity) -> Trades {
        let timestamp = self.next_timestamp();
        let (trades, remaining) =
            match_against(side, id, price, quantity, self.opposite_mut(side));
        if remaining > 0 {
            self.side_book_mut(side)
                .push(Order::new(id, side, price, remaining, timestamp));
        }
        tracing::debug!(
            id,
            side = %side,
            price,
            quantity,
            trade_count = trades.len(),
            residual = remaining,
            "order matched"
        );
        trades
    }

    /// Inserts a new order, matching it against resting liquidity on the
    /// opposite side and resting any unconsumed quantity.
    pub fn place_order(
        &mut self,
        side: Side,
        price: Price,
        quantity: Quantity,
        id: Id,
    ) -> Result<Trades, OrderBookError> {
        if self.bid.contains(id) || self.ask.contains(id) {
            tracing::warn!(id, "rejected duplicate order id");
            return Err(OrderBookError::DuplicateOrderId(id));
        }
        if quantity == 0 {
            tracing::warn!(id, "rejected zero-quantity order");
            return Err(OrderBookError::ZeroQuantity { id, quantity });
        }

        Ok(self.match_and_rest(id, side, price, quantity))
    }

    /// Updates a resting order's price and/or quantity.
    ///
    /// `quantity == 0` cancels the order (the specified mechanism, not an
    /// error, mirroring `place_order`'s zero-quantity rejection). A
    /// same-price quantity decrease preserves time priority; a same-price
    /// quantity increase moves the order to the back of its level, losing
    /// priority. A price change removes and re-matches the order as if
    /// freshly inserted at the new price.
    pub fn update_order(
        &mut self,
        id: Id,
        price: Price,
        quantity: Quantity,
    ) -> Result<Trades, OrderBookError> {
        let side = self.resting_side(id).ok_or_else(|| {
            tracing::warn!(id, "update of unknown order");
            OrderBookError::OrderNotFound(id)
        })?;

        if quantity == 0 {
            self.side_book_mut(side).remove(id);
            return Ok(Trades::new());
        }

        let existing = self
            .side_book(side)
            .get(id)
            .expect("resting_side confirmed this id is indexed")
            .clone();

        if price == existing.price {
            if quantity < existing.quantity {
                self.side_book_mut(side).shrink_in_place(id, quantity);
            } else {
                self.side_book_mut(side).move_to_back(id, quantity);
            }
            return Ok(Trades::new());
        }

        self.side_book_mut(side).remove(id);
        Ok(self.match_and_rest(id, side, price, quantity))
    }

    /// Removes a resting order, wherever it rests. `NotFound` if it rests
    /// on neither side.
    pub fn cancel_order(&mut self, id: Id) -> Result<(), OrderBookError> {
        if self.bid.remove(id).is_some() || self.ask.remove(id).is_some() {
            Ok(())
        } else {
            tracing::warn!(id, "cancel of unknown order");
            Err(OrderBookError::OrderNotFound(id))
        }
    }

    /// Best resting order on `side`, or `None` if that side is empty. O(1).
    pub fn peek(&self, side: Side) -> Option<Order> {
        self.side_book(side).peek().cloned()
    }

    /// Number of distinct price levels on `side` (not number of orders).
    pub fn len(&self, side: Side) -> usize {
        self.side_book(side).len()
    }

    pub fn is_empty(&self) -> bool {
        self.bid.is_empty() && self.ask.is_empty()
    }

    /// Best bid `(price, quantity)`, cached at O(1).
    pub fn best_buy(&self) -> Option<PriceAndQuantity> {
        self.bid.best_price_and_quantity()
    }

    /// Best ask `(price, quantity)`, cached at O(1).
    pub fn best_sell(&self) -> Option<PriceAndQuantity> {
        self.ask.best_price_and_quantity()
    }

    /// Up to `levels` aggregated `(price, quantity)` pairs on `side`, best first.
    pub fn depth(&self, side: Side, levels: usize) -> Vec<PriceAndQuantity> {
        self.side_book(side).depth(levels)
    }

    /// Removes the entire best-priced level on `side`, returning its resting
    /// orders in FIFO order, or `None` if that side is empty.
    pub fn pop_best_level(&mut self, side: Side) -> Option<Vec<Order>> {
        let orders = self.side_book_mut(side).pop_level()?;
        tracing::debug!(side = %side, order_count = orders.len(), "level popped");
        Some(orders)
    }

    /// Removes the level at `price` on `side` if one rests there, returning
    /// its orders in FIFO order.
    pub fn remove_level(&mut self, side: Side, price: Price) -> Option<Vec<Order>> {
        let orders = self.side_book_mut(side).remove_level(price)?;
        tracing::debug!(side = %side, price, order_count = orders.len(), "level removed");
        Some(orders)
    }
}
