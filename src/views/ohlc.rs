//! OHLC table and close-price line series.

use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::models::OhlcPoint;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcRow {
    /// Bucket time in UTC; the API gives no zone.
    pub date: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OhlcView {
    pub rows: Vec<OhlcRow>,
}

impl OhlcView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(date, close)` pairs for a line chart.
    pub fn close_series(&self) -> Vec<(DateTime<Utc>, f64)> {
        self.rows.iter().map(|r| (r.date, r.close)).collect()
    }
}

/// Convert upstream points into dated rows, keeping their order.
///
/// A timestamp chrono cannot represent is dropped with a warning.
pub fn build_ohlc_view(points: &[OhlcPoint]) -> OhlcView {
    let rows = points
        .iter()
        .filter_map(|p| match DateTime::<Utc>::from_timestamp_millis(p.timestamp) {
            Some(date) => Some(OhlcRow {
                date,
                open: p.open,
                high: p.high,
                low: p.low,
                close: p.close,
            }),
            None => {
                warn!("Dropping OHLC point with out-of-range timestamp {}", p.timestamp);
                None
            }
        })
        .collect();
    OhlcView { rows }
}
