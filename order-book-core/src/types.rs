use derive_more::Display;
use std::borrow::Cow;
use validator::Validate;

pub type Price = u128;
pub type Quantity = u128;

pub type PriceAndQuantity = (Price, Quantity);
pub type Id = u64;
pub type Timestamp = u64;

#[derive(Display, Debug, Clone, PartialEq, Eq, Hash)]
#[display("{}", symbol)]
pub struct Asset {
    /// Symbol string
    pub symbol: Cow<'static, str>,
    /// Minor units for display/serde (e.g., USD=2, BTC=8)
    pub decimals: u8,
}

impl Asset {
    pub const fn new(symbol: &'static str, decimals: u8) -> Self {
        Self {
            symbol: Cow::Borrowed(symbol),
            decimals,
        }
    }
}

#[derive(Display, Validate, Debug, Clone, PartialEq, Eq, Hash)]
#[display("{}/{}", base, quote)]
pub struct Instrument {
    /// Base asset (e.g., BTC)
    pub base: Asset,
    /// Quote asset (e.g., USDT)
    pub quote: Asset,
}
impl Instrument {
    pub fn new(base: Asset, quote: Asset) -> Self {
        Self { base, quote }
    }
}

/// Represents the side of an order in the order book.
///
/// Orders can be either buy orders (bids) or sell orders (asks).
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "cli", value(rename_all = "lower"))]
pub enum Side {
    /// Buy order (bid) - willing to buy at specified price or lower
    Buy,
    /// Sell order (ask) - willing to sell at specified price or higher
    Sell,
}

/// Represents an order in the order book.
///
/// An order contains all the information needed to match and execute trades,
/// including the order ID, side (buy/sell), price, quantity, and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Unique identifier for the order
    pub id: Id,
    /// Whether this is a buy or sell order
    pub side: Side,
    /// Price per unit in the smallest denomination
    pub price: Price,
    /// Number of units to buy or sell
    pub quantity: Quantity,
    /// Unix timestamp when the order was created
    pub timestamp: Timestamp,
}

impl Order {
    /// Creates a new order with the specified parameters.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier for the order
    /// * `side` - Whether this is a buy or sell order
    /// * `price` - Price per unit
    /// * `quantity` - Number of units to trade
    /// * `timestamp` - Unix timestamp when the order was created
    pub fn new(id: Id, side: Side, price: Price, quantity: Quantity, timestamp: Timestamp) -> Self {
        Order {
            id,
            side,
            price,
            quantity,
            timestamp,
        }
    }
}

/// Represents a completed trade between two orders.
///
/// A trade occurs when a buy and sell order match at an agreed price.
/// The maker is the order that was resting in the book, while the taker
/// is the order that matched against it.
#[derive(Display, Debug, Clone, PartialEq, Eq)]
#[display(
    "Trade: {} @ {} (maker: {}, taker: {})",
    quantity,
    price,
    maker_id,
    taker_id
)]
pub struct Trade {
    /// Execution price of the trade
    pub price: Price,
    /// Number of units traded
    pub quantity: Quantity,
    /// ID of the maker order (resting in book)
    pub maker_id: Id,
    /// ID of the taker order (incoming)
    pub taker_id: Id,
}

impl Trade {
    /// Creates a new trade record.
    ///
    /// # Arguments
    ///
    /// * `price` - Execution price of the trade
    /// * `quantity` - Number of units traded
    /// * `maker_id` - ID of the maker order
    /// * `taker_id` - ID of the taker order
    pub fn new(price: Price, quantity: Quantity, maker_id: Id, taker_id: Id) -> Self {
        Trade {
            price,
            quantity,
            maker_id,
            taker_id,
        }
    }
}
/// A collection of trades, typically returned from order matching operations.
pub type Trades = Vec<Trade>;

/// Error type for order book operations.
#[derive(Display, Debug, Clone, PartialEq, Eq)]
pub enum OrderBookError {
    /// Order ID already exists in the book
    #[display("Order {} already in book", 0)]
    DuplicateOrderId(Id),
    /// Order quantity is zero (or negative, were the type signed)
    #[display("Order {} quantity {} is 0, no order placed", id, quantity)]
    ZeroQuantity { id: Id, quantity: Quantity },
    /// Update or Cancel referenced an id resting on neither side
    #[display("Order {} not found", 0)]
    OrderNotFound(Id),
}

impl std::error::Error for OrderBookError {}
