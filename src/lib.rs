//! Crypto market insights SDK for Rust.
//!
//! Pulls market snapshots and OHLC history from the CoinGecko REST API and
//! reshapes them into display-ready views: the market table, top gainers
//! and losers, a volume-vs-change scatter series, and OHLC rows with a
//! close-price line series. Calls are blocking, uncached and never retried.
//!
//! # Quick start
//!
//! ```no_run
//! use crypto_insights::{build_market_view, Currency, InsightsClient, MarketParams};
//!
//! let client = InsightsClient::builder().build().unwrap();
//!
//! let params = MarketParams::new(Currency::Eur, 20).unwrap();
//! let snapshot = client.markets().snapshot(&params).unwrap();
//! let view = build_market_view(&snapshot);
//! for g in &view.gainers {
//!     println!("{} {:+.2}%", g.name, g.price_change_percentage_24h);
//! }
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod queries;
pub mod transport;
pub mod views;

#[cfg(feature = "async")]
pub use async_client::AsyncInsightsClient;
pub use dashboard::{Dashboard, DashboardParams, Panel};
pub use error::{FetchError, Result};
pub use models::{CoinSnapshot, Currency, MarketParams, OhlcParams, OhlcPoint};
pub use queries::{fetch_market_snapshot, fetch_ohlc};
pub use transport::Transport;
pub use views::{build_market_view, build_ohlc_view, MarketView, OhlcView};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// InsightsClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`InsightsClient`] instance.
///
/// Use [`InsightsClient::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](InsightsClientBuilder::build) to create the client.
pub struct InsightsClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
}

impl Default for InsightsClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl InsightsClientBuilder {
    /// Set the API root (e.g. a local mirror or a test server).
    ///
    /// If not set, `CRYPTO_INSIGHTS_API_BASE` is used when present, otherwise
    /// the public CoinGecko v3 API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds. A request that exceeds it fails with
    /// [`FetchError::Transport`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client. No request is made until a query runs.
    pub fn build(self) -> Result<InsightsClient> {
        let base_url = self.base_url.unwrap_or_else(config::default_base_url);
        let transport = Transport::new(&base_url, self.timeout)?;
        Ok(InsightsClient { transport })
    }
}

// ---------------------------------------------------------------------------
// InsightsClient
// ---------------------------------------------------------------------------

/// The main entry point for the SDK.
///
/// Owns the HTTP [`Transport`] and exposes the endpoint query interfaces as
/// lightweight borrowing wrappers.
///
/// Created via [`InsightsClient::builder()`].
pub struct InsightsClient {
    transport: Transport,
}

impl InsightsClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> InsightsClientBuilder {
        InsightsClientBuilder::default()
    }

    /// Access the market-listing query interface.
    pub fn markets(&self) -> queries::markets::MarketQuery<'_> {
        queries::markets::MarketQuery::new(&self.transport)
    }

    /// Access the OHLC history query interface.
    pub fn ohlc(&self) -> queries::ohlc::OhlcQuery<'_> {
        queries::ohlc::OhlcQuery::new(&self.transport)
    }

    /// Access the dashboard controller, which never returns errors and
    /// instead reports them as [`Panel::Failed`].
    pub fn dashboard(&self) -> Dashboard<'_> {
        Dashboard::new(self)
    }

    /// Return a reference to the underlying [`Transport`] for advanced usage.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }
}

impl fmt::Display for InsightsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "InsightsClient(base_url={}, timeout={}s)",
            self.transport.base_url,
            self.transport.timeout.as_secs()
        )
    }
}
