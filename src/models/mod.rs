pub mod market;
pub mod ohlc;

pub use market::*;
pub use ohlc::*;
