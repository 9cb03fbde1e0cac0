//! Market-listing queries against `/coins/markets`.

use log::debug;

use crate::config;
use crate::error::Result;
use crate::models::{CoinSnapshot, MarketParams};
use crate::transport::Transport;
use crate::InsightsClient;

// ---------------------------------------------------------------------------
// MarketQuery
// ---------------------------------------------------------------------------

/// Query interface for market snapshots ranked by market capitalization.
pub struct MarketQuery<'a> {
    transport: &'a Transport,
}

impl<'a> MarketQuery<'a> {
    /// Create a new `MarketQuery` bound to the given transport.
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Fetch the top `params.count()` coins by market cap in `params.currency()`.
    ///
    /// Records come back in the order the API sent them (descending market
    /// cap). The API may return fewer rows than requested. Any failure yields
    /// an error and no rows.
    pub fn snapshot(&self, params: &MarketParams) -> Result<Vec<CoinSnapshot>> {
        let query = [
            ("vs_currency", params.currency().as_str().to_string()),
            ("order", config::MARKET_ORDER.to_string()),
            ("per_page", params.count().to_string()),
            ("page", "1".to_string()),
            ("sparkline", "false".to_string()),
        ];
        let rows: Vec<CoinSnapshot> = self.transport.get_json(config::MARKETS_SEGMENTS, &query)?;
        debug!(
            "Fetched {} market rows ({} requested, {})",
            rows.len(),
            params.count(),
            params.currency()
        );
        Ok(rows)
    }
}

/// Free-function form of [`MarketQuery::snapshot`].
pub fn fetch_market_snapshot(
    client: &InsightsClient,
    params: &MarketParams,
) -> Result<Vec<CoinSnapshot>> {
    client.markets().snapshot(params)
}
