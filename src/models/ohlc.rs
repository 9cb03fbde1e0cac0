use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::models::market::Currency;

// ---------------------------------------------------------------------------
// OhlcPoint — One upstream bucket, `[timestamp_ms, open, high, low, close]`
// ---------------------------------------------------------------------------

/// Deserializes from the 5-element array the OHLC endpoint returns.
///
/// `low <= open, close <= high` is not checked; values pass through as sent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcPoint {
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

// ---------------------------------------------------------------------------
// OhlcParams — Immutable request for one coin and time window
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OhlcParams {
    pub coin_id: String,
    pub currency: Currency,
    /// Window start, Unix seconds.
    pub from: i64,
    /// Window end, Unix seconds. Not required to be `>= from`.
    pub to: i64,
}

impl OhlcParams {
    pub fn new(coin_id: impl Into<String>, currency: Currency, from: i64, to: i64) -> Self {
        Self {
            coin_id: coin_id.into(),
            currency,
            from,
            to,
        }
    }

    /// Build a window from calendar dates, each taken at local midnight.
    pub fn from_dates(
        coin_id: impl Into<String>,
        currency: Currency,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        Self::new(coin_id, currency, start_of_day(&Local, start), start_of_day(&Local, end))
    }
}

/// Unix seconds of the first local instant of `date` in `tz`.
///
/// Normally that is midnight. When a DST jump skips midnight, it is the
/// first local time after the gap, found by stepping forward in half hours.
pub fn start_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> i64 {
    let midnight = date.and_time(NaiveTime::MIN);
    (0..=GAP_SEARCH_STEPS)
        .map(|i| midnight + TimeDelta::minutes(30 * i))
        .find_map(|local| local.and_local_timezone(tz.clone()).earliest())
        .map(|dt| dt.timestamp())
        // No zone has a gap this long; fall back to UTC midnight.
        .unwrap_or_else(|| DateTime::<Utc>::from_naive_utc_and_offset(midnight, Utc).timestamp())
}

/// Half-hour steps tried past midnight before giving up (one full day).
const GAP_SEARCH_STEPS: i64 = 48;
