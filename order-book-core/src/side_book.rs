//! A single side (bids or asks) of the order book.
//!
//! A `SideBook` keeps two indices over the same set of [`Level`]s, kept in
//! lockstep per the two-index scheme: `levels`, a `BTreeMap<Price, Level>`
//! for O(log L) insertion/removal of a distinct price and O(1)-expected
//! lookup by price, and `best`, a cached price recomputed only when the set
//! of distinct prices changes (a new extreme level appears, or the current
//! best level collapses). Every other mutation leaves `best` untouched, so
//! reading the top of book is a plain field load rather than a tree lookup.
//!
//! `orders_by_id` maps an order id directly to `(price, handle)`: the price
//! locates the owning `Level` in `levels` in O(log L) via the map, and the
//! handle locates the order within that level's slab in O(1).

use std::collections::{BTreeMap, HashMap};

use crate::level::{Handle, Level, OrderArena};
use crate::types::{Id, Order, Price, PriceAndQuantity, Quantity, Side};

#[derive(Debug)]
pub(crate) struct SideBook {
    side: Side,
    levels: BTreeMap<Price, Level>,
    best: Option<Price>,
    orders_by_id: HashMap<Id, (Price, Handle)>,
    arena: OrderArena,
}

impl SideBook {
    pub(crate) fn new(side: Side) -> Self {
        SideBook {
            side,
            levels: BTreeMap::new(),
            best: None,
            orders_by_id: HashMap::new(),
            arena: OrderArena::default(),
        }
    }

    pub(crate) fn contains(&self, id: Id) -> bool {
        self.orders_by_id.contains_key(&id)
    }

    /// Number of distinct price levels, not number of resting orders.
    pub(crate) fn len(&self) -> usize {
        self.levels.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    fn is_better(&self, candidate: Price, current: Price) -> bool {
        match self.side {
            Side::Buy => candidate > current,
            Side::Sell => candidate < current,
        }
    }

    fn recompute_best(&mut self) {
        self.best = match self.side {
            Side::Buy => self.levels.keys().next_back().copied(),
            Side::Sell => self.levels.keys().next().copied(),
        };
    }

    /// Appends `order` to the level at its price, creating the level if absent.
    /// Assumes the caller has already checked for a duplicate id.
    pub(crate) fn push(&mut self, order: Order) {
        let price = order.price;
        let id = order.id;
        if self.best.map(|b| self.is_better(price, b)).unwrap_or(true) {
            self.best = Some(price);
        }
        let level = self.levels.entry(price).or_insert_with(|| Level::new(price));
        let handle = level.push_back(&mut self.arena, order);
        self.orders_by_id.insert(id, (price, handle));
    }

    /// Best-priced resting order, or `None` if this side is empty. O(1).
    pub(crate) fn peek(&self) -> Option<&Order> {
        let price = self.best?;
        self.levels.get(&price)?.front(&self.arena)
    }

    pub(crate) fn best_price_and_quantity(&self) -> Option<PriceAndQuantity> {
        let price = self.best?;
        let level = self.levels.get(&price)?;
        Some((price, level.volume()))
    }

    /// Removes and returns the single front order of the best-priced level,
    /// collapsing the level if it becomes empty.
    pub(crate) fn pop(&mut self) -> Option<Order> {
        let price = self.best?;
        let level = self.levels.get_mut(&price).expect("best price must exist");
        let handle = level.front_handle().expect("level must be non-empty");
        let order = level.remove(&mut self.arena, handle);
        self.orders_by_id.remove(&order.id);
        if level.is_empty() {
            self.levels.remove(&price);
            self.recompute_best();
        }
        Some(order)
    }

    /// Removes the entire best-priced level, returning its orders in FIFO order.
    pub(crate) fn pop_level(&mut self) -> Option<Vec<Order>> {
        let price = self.best?;
        let level = self.levels.remove(&price).expect("best price must exist");
        let orders = level.drain(&mut self.arena);
        for order in &orders {
            self.orders_by_id.remove(&order.id);
        }
        self.recompute_best();
        Some(orders)
    }

    pub(crate) fn get(&self, id: Id) -> Option<&Order> {
        let (price, handle) = *self.orders_by_id.get(&id)?;
        Some(self.levels.get(&price)?.order_at(&self.arena, handle))
    }

    pub(crate) fn get_level_volume(&self, price: Price) -> Option<Quantity> {
        self.levels.get(&price).map(Level::volume)
    }

    /// Removes the order `id`, wherever it rests in this side. O(1) amortized.
    pub(crate) fn remove(&mut self, id: Id) -> Option<Order> {
        let (price, handle) = self.orders_by_id.remove(&id)?;
        let level = self.levels.get_mut(&price).expect("index consistency");
        let order = level.remove(&mut self.arena, handle);
        if level.is_empty() {
            self.levels.remove(&price);
            if self.best == Some(price) {
                self.recompute_best();
            }
        }
        Some(order)
    }

    /// Removes the level at `price`, returning its orders in FIFO order.
    pub(crate) fn remove_level(&mut self, price: Price) -> Option<Vec<Order>> {
        let level = self.levels.remove(&price)?;
        let orders = level.drain(&mut self.arena);
        for order in &orders {
            self.orders_by_id.remove(&order.id);
        }
        if self.best == Some(price) {
            self.recompute_best();
        }
        Some(orders)
    }

    /// Repositions the resting order `id` to the back of its level's queue.
    /// Used by `Update` when a same-price quantity change forfeits priority.
    pub(crate) fn move_to_back(&mut self, id: Id, new_quantity: Quantity) {
        let (price, handle) = *self
            .orders_by_id
            .get(&id)
            .expect("caller must verify id rests on this side");
        let level = self.levels.get_mut(&price).expect("index consistency");
        level.set_quantity(&mut self.arena, handle, new_quantity);
        level.move_to_back(&mut self.arena, handle);
    }

    /// Decrements the resting order `id` in place, preserving its queue position.
    pub(crate) fn shrink_in_place(&mut self, id: Id, new_quantity: Quantity) {
        let (price, handle) = *self
            .orders_by_id
            .get(&id)
            .expect("caller must verify id rests on this side");
        let level = self.levels.get_mut(&price).expect("index consistency");
        level.set_quantity(&mut self.arena, handle, new_quantity);
    }

    /// Depth snapshot: up to `levels` best-first `(price, total_quantity)` pairs.
    pub(crate) fn depth(&self, levels: usize) -> Vec<PriceAndQuantity> {
        let iter = self.levels.iter().map(|(p, l)| (*p, l.volume()));
        match self.side {
            Side::Buy => iter.rev().take(levels).collect(),
            Side::Sell => iter.take(levels).collect(),
        }
    }

    /// Applies a matched fill to the front order of the best level: either
    /// shrinks it in place (partial fill) or fully removes it (full fill),
    /// deindexing and collapsing the level as needed. Returns the matched
    /// order's id and whether it was fully consumed.
    pub(crate) fn fill_best_front(&mut self, fill_qty: Quantity) -> (Id, bool) {
        let price = self.best.expect("fill requires a non-empty side");
        let level = self.levels.get_mut(&price).expect("best price must exist");
        let handle = level.front_handle().expect("level must be non-empty");
        let resting_qty = level.order_at(&self.arena, handle).quantity;
        let id = level.order_at(&self.arena, handle).id;

        if fill_qty >= resting_qty {
            let removed = level.remove(&mut self.arena, handle);
            self.orders_by_id.remove(&removed.id);
            if level.is_empty() {
                self.levels.remove(&price);
                self.recompute_best();
            }
            (id, true)
        } else {
            level.set_quantity(&mut self.arena, handle, resting_qty - fill_qty);
            (id, false)
        }
    }
}
