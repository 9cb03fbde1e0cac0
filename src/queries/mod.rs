//! Query modules for the CoinGecko endpoints.
//!
//! Each module provides a query struct that borrows the client's
//! [`Transport`](crate::transport::Transport) and returns typed records.
//! One method call is one GET; nothing is cached between calls.

pub mod markets;
pub mod ohlc;

pub use markets::{fetch_market_snapshot, MarketQuery};
pub use ohlc::{fetch_ohlc, OhlcQuery};
