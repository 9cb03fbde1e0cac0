//! Market table, top movers and the volume-vs-change scatter series.
//!
//! Rows without a 24h change are listed in the table but never ranked:
//! they cannot be compared, so they are neither gainers nor losers.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::config::MOVERS_LEN;
use crate::models::CoinSnapshot;

// ---------------------------------------------------------------------------
// View types
// ---------------------------------------------------------------------------

/// One row of the full market table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketRow {
    /// Kept for the coin selector; not a display column.
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub total_volume: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
}

/// One row of the gainers or losers table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoverRow {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub price_change_percentage_24h: f64,
}

/// One bubble of the volatility chart: volume on x, 24h change on y,
/// market cap as the bubble size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolatilityPoint {
    pub name: String,
    pub total_volume: f64,
    pub price_change_percentage_24h: f64,
    pub market_cap: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketView {
    pub rows: Vec<MarketRow>,
    /// Largest 24h change first.
    pub gainers: Vec<MoverRow>,
    /// Smallest 24h change first.
    pub losers: Vec<MoverRow>,
    pub volatility: Vec<VolatilityPoint>,
}

impl MarketView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Coin ids in table order, for the OHLC coin selector.
    pub fn coin_ids(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.id.as_str()).collect()
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

pub fn build_market_view(snapshots: &[CoinSnapshot]) -> MarketView {
    let rows = snapshots
        .iter()
        .map(|s| MarketRow {
            id: s.id.clone(),
            name: s.name.clone(),
            symbol: s.symbol.clone(),
            current_price: s.current_price,
            market_cap: s.market_cap,
            total_volume: s.total_volume,
            price_change_percentage_24h: s.price_change_percentage_24h,
        })
        .collect();

    MarketView {
        rows,
        gainers: top_movers(snapshots, Ordering::Greater),
        losers: top_movers(snapshots, Ordering::Less),
        volatility: volatility_series(snapshots),
    }
}

/// Pick up to [`MOVERS_LEN`] rankable snapshots, most extreme first.
///
/// `direction` is `Greater` for gainers and `Less` for losers. The sort is
/// stable, so equal changes keep their market-cap order.
fn top_movers(snapshots: &[CoinSnapshot], direction: Ordering) -> Vec<MoverRow> {
    let mut ranked: Vec<(&CoinSnapshot, f64)> = snapshots
        .iter()
        .filter_map(|s| s.price_change_percentage_24h.map(|c| (s, c)))
        .collect();

    ranked.sort_by(|a, b| match direction {
        Ordering::Greater => b.1.total_cmp(&a.1),
        _ => a.1.total_cmp(&b.1),
    });

    ranked
        .into_iter()
        .take(MOVERS_LEN)
        .map(|(s, change)| MoverRow {
            id: s.id.clone(),
            name: s.name.clone(),
            symbol: s.symbol.clone(),
            price_change_percentage_24h: change,
        })
        .collect()
}

fn volatility_series(snapshots: &[CoinSnapshot]) -> Vec<VolatilityPoint> {
    snapshots
        .iter()
        .filter_map(|s| {
            Some(VolatilityPoint {
                name: s.name.clone(),
                total_volume: s.total_volume?,
                price_change_percentage_24h: s.price_change_percentage_24h?,
                market_cap: s.market_cap.unwrap_or(0.0),
            })
        })
        .collect()
}
