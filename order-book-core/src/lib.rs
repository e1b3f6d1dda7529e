//! # Order Book Core
//!
//! A high-performance limit order book implementation in Rust.
//!
//! This crate provides the core data structures and algorithms for maintaining
//! a limit order book with price-time priority matching. It supports placing
//! orders, automatic matching, and querying market depth.
//!
//! ## Example
//!
//! ```rust
//! use order_book_core::{OrderBook, Side};
//! use order_book_core::types::{Asset, Instrument};
//! 
//! // Create a BTC/USDT instrument
//! let usdt = Asset::new("USDT", 2);
//! let btc = Asset::new("BTC", 6);
//! let instrument = Instrument::new(btc, usdt);
//! let mut book = OrderBook::new(instrument);
//!
//! // Place a buy order (prices and quantities in minor units)
//! let trades = book.place_order(Side::Buy, 10000, 10000, 1).unwrap();
//! assert!(trades.is_empty()); // No matching orders yet
//!
//! // Place a matching sell order
//! let trades = book.place_order(Side::Sell, 10000, 5000, 2).unwrap();
//! assert_eq!(trades.len(), 1); // One trade executed
//! ```

mod level;
mod matching;
pub mod order_book;
mod side_book;
#[cfg(test)]
pub(crate) mod test_support;
pub mod types;
mod units;
pub use order_book::OrderBook;
pub use types::{Order, OrderBookError, Side, Trade, Trades};
pub use units::{
    format_price, format_quantity, price_from_minor_units, price_to_minor_units,
    quantity_from_minor_units, quantity_to_minor_units,
};
