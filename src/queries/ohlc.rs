//! OHLC history queries against `/coins/{id}/ohlc/range`.

use log::debug;

use crate::config;
use crate::error::Result;
use crate::models::{OhlcParams, OhlcPoint};
use crate::transport::Transport;
use crate::InsightsClient;

// ---------------------------------------------------------------------------
// OhlcQuery
// ---------------------------------------------------------------------------

/// Query interface for per-coin OHLC candles.
pub struct OhlcQuery<'a> {
    transport: &'a Transport,
}

impl<'a> OhlcQuery<'a> {
    /// Create a new `OhlcQuery` bound to the given transport.
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Fetch OHLC buckets for `params.coin_id` between `from` and `to`.
    ///
    /// The coin id is not checked locally and an inverted window is sent
    /// as-is; the API decides what to return (usually nothing). Bucket
    /// width is chosen by the API from the span.
    pub fn range(&self, params: &OhlcParams) -> Result<Vec<OhlcPoint>> {
        let query = [
            ("vs_currency", params.currency.as_str().to_string()),
            ("from", params.from.to_string()),
            ("to", params.to.to_string()),
        ];
        let points: Vec<OhlcPoint> = self
            .transport
            .get_json(&config::ohlc_range_segments(&params.coin_id), &query)?;
        debug!(
            "Fetched {} OHLC buckets for {} ({}..{})",
            points.len(),
            params.coin_id,
            params.from,
            params.to
        );
        Ok(points)
    }
}

/// Free-function form of [`OhlcQuery::range`].
pub fn fetch_ohlc(client: &InsightsClient, params: &OhlcParams) -> Result<Vec<OhlcPoint>> {
    client.ohlc().range(params)
}
