//! Dashboard controller: runs one fetch + build per user action and turns
//! every outcome into a panel the presentation surface can show.
//!
//! Two transitions exist and both are stateless:
//! - parameters changed: [`Dashboard::market_panel`]
//! - OHLC requested for a coin: [`Dashboard::ohlc_panel`]
//!
//! Failures never escape as errors here. They become [`Panel::Failed`] with
//! a user-facing message, so the rest of the surface stays usable.

use chrono::NaiveDate;
use log::{info, warn};
use serde::Serialize;

use crate::config;
use crate::error::FetchError;
use crate::models::{MarketParams, OhlcParams};
use crate::views::{build_market_view, build_ohlc_view, MarketView, OhlcView};
use crate::InsightsClient;

// ---------------------------------------------------------------------------
// Panel — What a section of the surface displays after an action
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum Panel<T> {
    Ready(T),
    /// Well-formed but empty answer; informational, not an error.
    Empty,
    Failed(String),
}

impl<T> Panel<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Panel::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Panel::Failed(_))
    }
}

// ---------------------------------------------------------------------------
// DashboardParams — Immutable snapshot of every sidebar control
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardParams {
    pub market: MarketParams,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Default for DashboardParams {
    fn default() -> Self {
        Self {
            market: MarketParams::default(),
            start: config::default_start_date(),
            end: config::default_end_date(),
        }
    }
}

impl DashboardParams {
    /// OHLC request for `coin_id` over the selected dates, in the selected currency.
    pub fn ohlc_params(&self, coin_id: &str) -> OhlcParams {
        OhlcParams::from_dates(coin_id, self.market.currency(), self.start, self.end)
    }
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

pub struct Dashboard<'a> {
    client: &'a InsightsClient,
}

impl<'a> Dashboard<'a> {
    pub fn new(client: &'a InsightsClient) -> Self {
        Self { client }
    }

    /// Fetch the market snapshot and build the market view.
    pub fn market_panel(&self, params: &MarketParams) -> Panel<MarketView> {
        match self.client.markets().snapshot(params) {
            Ok(rows) if rows.is_empty() => {
                info!("Market listing for {} came back empty", params.currency());
                Panel::Empty
            }
            Ok(rows) => Panel::Ready(build_market_view(&rows)),
            Err(e) => {
                warn!("Market snapshot failed: {}", e);
                Panel::Failed(failure_message("Error fetching data", &e, false))
            }
        }
    }

    /// Fetch OHLC history for `coin_id` over the selected dates and build the series.
    pub fn ohlc_panel(&self, coin_id: &str, params: &DashboardParams) -> Panel<OhlcView> {
        let request = params.ohlc_params(coin_id);
        match self.client.ohlc().range(&request) {
            Ok(points) => {
                let view = build_ohlc_view(&points);
                if view.is_empty() {
                    info!(
                        "No OHLC data for {} between {} and {}",
                        coin_id, params.start, params.end
                    );
                    Panel::Empty
                } else {
                    Panel::Ready(view)
                }
            }
            Err(e) => {
                warn!("OHLC fetch for {} failed: {}", coin_id, e);
                Panel::Failed(failure_message("Error fetching OHLC data", &e, true))
            }
        }
    }

    /// Ids offered by the coin selector, taken from the current market view.
    pub fn coin_choices(view: &MarketView) -> Vec<String> {
        view.coin_ids().into_iter().map(str::to_string).collect()
    }
}

/// Render a fetch failure for the user: the HTTP status when there is one,
/// optionally followed by the raw upstream body.
pub fn failure_message(prefix: &str, err: &FetchError, with_body: bool) -> String {
    match err {
        FetchError::UpstreamStatus { status, body } if with_body && !body.is_empty() => {
            format!("{}: {} - {}", prefix, status, body)
        }
        FetchError::UpstreamStatus { status, .. } => format!("{}: {}", prefix, status),
        other => format!("{}: {}", prefix, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn market_failures_show_status_only() {
        let e = FetchError::UpstreamStatus {
            status: 500,
            body: "boom".into(),
        };
        assert_eq!(failure_message("Error fetching data", &e, false), "Error fetching data: 500");
    }

    #[test]
    fn ohlc_failures_include_body() {
        let e = FetchError::UpstreamStatus {
            status: 404,
            body: "{\"error\":\"coin not found\"}".into(),
        };
        assert_eq!(
            failure_message("Error fetching OHLC data", &e, true),
            "Error fetching OHLC data: 404 - {\"error\":\"coin not found\"}"
        );
    }

    #[test]
    fn non_http_failures_use_error_text() {
        let e = FetchError::InvalidArgument("bad".into());
        assert_eq!(failure_message("X", &e, true), "X: Invalid argument: bad");
    }

    #[test]
    fn default_params_match_sidebar_defaults() {
        let p = DashboardParams::default();
        assert_eq!(p.market, MarketParams::default());
        assert_eq!(p.start.to_string(), "2023-01-01");
        assert_eq!(p.end.to_string(), "2023-12-31");
        assert_eq!(p.ohlc_params("bitcoin").coin_id, "bitcoin");
    }

    #[test]
    fn coin_choices_follow_table_order() {
        let view = crate::views::build_market_view(&[
            crate::models::CoinSnapshot {
                id: "tether".into(),
                name: "Tether".into(),
                symbol: "usdt".into(),
                current_price: Some(1.0),
                market_cap: None,
                total_volume: None,
                price_change_percentage_24h: None,
            },
            crate::models::CoinSnapshot {
                id: "bitcoin".into(),
                name: "Bitcoin".into(),
                symbol: "btc".into(),
                current_price: Some(1.0),
                market_cap: None,
                total_volume: None,
                price_change_percentage_24h: Some(1.0),
            },
        ]);
        assert_eq!(Dashboard::coin_choices(&view), view.coin_ids());
        assert_eq!(Dashboard::coin_choices(&view), vec!["tether", "bitcoin"]);
    }

    #[test]
    fn panel_serializes_with_state_tag() {
        let p: Panel<u8> = Panel::Failed("nope".into());
        assert_eq!(
            serde_json::to_value(&p).unwrap(),
            serde_json::json!({ "state": "failed", "data": "nope" })
        );
        let e: Panel<u8> = Panel::Empty;
        assert_eq!(serde_json::to_value(&e).unwrap(), serde_json::json!({ "state": "empty" }));
    }
}
