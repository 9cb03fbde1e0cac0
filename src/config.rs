use std::env;
use std::time::Duration;

use chrono::NaiveDate;

pub const API_BASE: &str = "https://api.coingecko.com/api/v3";

/// Environment variable that overrides [`API_BASE`] when set and non-empty.
pub const API_BASE_ENV: &str = "CRYPTO_INSIGHTS_API_BASE";

/// Path segments of the market-listing endpoint, relative to the API base.
pub const MARKETS_SEGMENTS: &[&str] = &["coins", "markets"];

pub const MARKET_ORDER: &str = "market_cap_desc";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// Coin-count slider bounds
pub const MIN_COIN_COUNT: u32 = 5;
pub const MAX_COIN_COUNT: u32 = 50;
pub const DEFAULT_COIN_COUNT: u32 = 10;

/// Number of rows kept in each of the gainers/losers tables.
pub const MOVERS_LEN: usize = 3;

/// Path segments of the OHLC range endpoint for a coin.
pub fn ohlc_range_segments(coin_id: &str) -> [&str; 4] {
    ["coins", coin_id, "ohlc", "range"]
}

pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default()
}

pub fn default_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 12, 31).unwrap_or_default()
}

pub fn default_base_url() -> String {
    env::var(API_BASE_ENV)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| API_BASE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ohlc_segments_embed_coin_id() {
        assert_eq!(
            ohlc_range_segments("usd-coin"),
            ["coins", "usd-coin", "ohlc", "range"]
        );
    }

    #[test]
    fn default_dates_cover_2023() {
        assert_eq!(default_start_date().to_string(), "2023-01-01");
        assert_eq!(default_end_date().to_string(), "2023-12-31");
    }
}
