pub mod markets;
pub mod meta;
pub mod ohlc;
