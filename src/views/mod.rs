//! Pure builders that reshape fetched records into display-ready views.
//!
//! Nothing here performs I/O. Views serialize with serde so any
//! presentation surface can render them as tables or charts.

pub mod market;
pub mod ohlc;

pub use market::{build_market_view, MarketRow, MarketView, MoverRow, VolatilityPoint};
pub use ohlc::{build_ohlc_view, OhlcRow, OhlcView};
