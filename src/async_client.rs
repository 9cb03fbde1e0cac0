//! Async wrapper around [`InsightsClient`] for use in async runtimes (Tokio, etc.).
//!
//! Runs every blocking fetch on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free. No
//! requests run in parallel on behalf of the caller; each method is still
//! one GET.
//!
//! # Example
//!
//! ```no_run
//! use crypto_insights::{AsyncInsightsClient, MarketParams};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = AsyncInsightsClient::builder().build().await.unwrap();
//!
//!     let panel = client.market_panel(MarketParams::default()).await.unwrap();
//!
//!     // Or run any sync method via closure
//!     let rows = client
//!         .run(|c| c.markets().snapshot(&MarketParams::default()))
//!         .await
//!         .unwrap();
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::dashboard::{DashboardParams, Panel};
use crate::error::{FetchError, Result};
use crate::models::{CoinSnapshot, MarketParams, OhlcParams, OhlcPoint};
use crate::views::{MarketView, OhlcView};
use crate::{config, InsightsClient};

// ---------------------------------------------------------------------------
// AsyncInsightsClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncInsightsClient`] instance.
pub struct AsyncInsightsClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
}

impl Default for AsyncInsightsClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl AsyncInsightsClientBuilder {
    /// Set the API root.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the async client.
    ///
    /// The blocking HTTP client is constructed on the blocking thread pool,
    /// since it owns its own runtime and must not be created on an async worker.
    pub async fn build(self) -> Result<AsyncInsightsClient> {
        tokio::task::spawn_blocking(move || {
            let mut builder = InsightsClient::builder().timeout(self.timeout);
            if let Some(url) = self.base_url {
                builder = builder.base_url(url);
            }
            let client = builder.build()?;
            Ok(AsyncInsightsClient {
                inner: Arc::new(client),
            })
        })
        .await
        .map_err(|e| FetchError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncInsightsClient
// ---------------------------------------------------------------------------

/// Async wrapper around [`InsightsClient`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The client holds no mutable state, so it
/// is shared through an [`Arc`] and cheap to clone.
#[derive(Clone)]
pub struct AsyncInsightsClient {
    inner: Arc<InsightsClient>,
}

impl AsyncInsightsClient {
    /// Create a new builder for configuring the async client.
    pub fn builder() -> AsyncInsightsClientBuilder {
        AsyncInsightsClientBuilder::default()
    }

    /// Run a sync client operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&InsightsClient) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let client = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&client))
            .await
            .map_err(|e| FetchError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Fetch a market snapshot asynchronously.
    pub async fn snapshot(&self, params: MarketParams) -> Result<Vec<CoinSnapshot>> {
        self.run(move |c| c.markets().snapshot(&params)).await
    }

    /// Fetch OHLC history asynchronously.
    pub async fn ohlc(&self, params: OhlcParams) -> Result<Vec<OhlcPoint>> {
        self.run(move |c| c.ohlc().range(&params)).await
    }

    /// Build the market panel asynchronously.
    ///
    /// Only a failure to join the blocking task surfaces as an error; fetch
    /// failures are reported inside the panel.
    pub async fn market_panel(&self, params: MarketParams) -> Result<Panel<MarketView>> {
        self.run(move |c| Ok(c.dashboard().market_panel(&params))).await
    }

    /// Build the OHLC panel for `coin_id` asynchronously.
    pub async fn ohlc_panel(
        &self,
        coin_id: String,
        params: DashboardParams,
    ) -> Result<Panel<OhlcView>> {
        self.run(move |c| Ok(c.dashboard().ohlc_panel(&coin_id, &params)))
            .await
    }

    /// Close the client, releasing the HTTP connection pool on the
    /// blocking thread pool.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || {
            drop(self.inner);
            Ok(())
        })
        .await
        .map_err(|e| FetchError::InvalidArgument(format!("Task join error: {e}")))?
    }
}
