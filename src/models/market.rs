use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::{FetchError, Result};

// ---------------------------------------------------------------------------
// Currency — Quote currencies offered by the currency selector
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Inr,
    Jpy,
}

impl Currency {
    /// Every supported currency, in selector order.
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Eur, Currency::Inr, Currency::Jpy];

    /// The `vs_currency` code understood by the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Usd => "usd",
            Currency::Eur => "eur",
            Currency::Inr => "inr",
            Currency::Jpy => "jpy",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim().to_lowercase();
        Currency::ALL
            .into_iter()
            .find(|c| c.as_str() == code)
            .ok_or_else(|| {
                FetchError::InvalidArgument(format!(
                    "Unsupported currency '{}' (expected one of usd, eur, inr, jpy)",
                    s
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// CoinSnapshot — One row of the market listing at query time
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinSnapshot {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub total_volume: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
}

// ---------------------------------------------------------------------------
// MarketParams — Immutable selector state for one snapshot fetch
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarketParams {
    currency: Currency,
    count: u32,
}

impl MarketParams {
    /// Validate `count` against the slider bounds and build the parameters.
    pub fn new(currency: Currency, count: u32) -> Result<Self> {
        if !(config::MIN_COIN_COUNT..=config::MAX_COIN_COUNT).contains(&count) {
            return Err(FetchError::InvalidArgument(format!(
                "Coin count {} outside {}..={}",
                count,
                config::MIN_COIN_COUNT,
                config::MAX_COIN_COUNT
            )));
        }
        Ok(Self { currency, count })
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

impl Default for MarketParams {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            count: config::DEFAULT_COIN_COUNT,
        }
    }
}
