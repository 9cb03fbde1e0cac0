//! Blocking HTTP transport for the CoinGecko REST API.
//!
//! Every call is a single GET with no retry and no caching. Non-2xx answers
//! are turned into [`FetchError::UpstreamStatus`] with the raw body kept for
//! diagnosis; bodies that do not match the expected shape become
//! [`FetchError::Decode`].

use crate::error::{FetchError, Result};
use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Issues GET requests against the configured API base URL.
pub struct Transport {
    /// API root every request path is appended to.
    pub base_url: Url,
    /// Per-request timeout applied by the HTTP client.
    pub timeout: Duration,
    client: Client,
}

impl Transport {
    /// Create a transport for `base_url`.
    ///
    /// Fails if the URL does not parse or cannot carry path segments
    /// (e.g. `mailto:` style URLs).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            FetchError::InvalidArgument(format!("Invalid API base URL '{}': {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidArgument(format!(
                "API base URL '{}' cannot carry a path",
                base_url
            )));
        }
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            base_url,
            timeout,
            client,
        })
    }

    /// Build the full URL for a list of path segments. Segments are
    /// percent-encoded, so a coin id can never escape its path position.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                FetchError::InvalidArgument(format!(
                    "API base URL '{}' cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET `segments` with `query` and decode the JSON body as `T`.
    pub fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.endpoint(segments)?;
        debug!("GET {} {:?}", url, query);

        let resp = self.client.get(url.clone()).query(query).send().map_err(|e| {
            warn!("Request to {} failed: {}", url, e);
            FetchError::from(e)
        })?;

        let status = resp.status();
        if !status.is_success() {
            // A failure reading the error body must not mask the status itself.
            let body = resp.text().unwrap_or_default();
            warn!("{} answered HTTP {}: {}", url, status.as_u16(), body);
            return Err(FetchError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let text = resp.text()?;
        serde_json::from_str(&text).map_err(|e| {
            warn!("Malformed body from {}: {}", url, e);
            FetchError::from(e)
        })
    }
}
