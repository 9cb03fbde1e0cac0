use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use crypto_insights::{config, DashboardParams};

use crate::error::AppError;
use crate::routes::markets::{panel_response, MarketQueryParams};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct OhlcQueryParams {
    pub currency: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// GET /api/coins/:id/ohlc?currency=usd&start=2023-01-01&end=2023-12-31
///
/// OHLC rows for one coin between two calendar dates (local midnight).
/// An inverted range is forwarded unchanged and usually yields an `empty`
/// panel.
pub async fn get_ohlc(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<OhlcQueryParams>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let market = MarketQueryParams {
        currency: query.currency,
        count: None,
    }
    .to_params()?;

    let params = DashboardParams {
        market,
        start: query.start.unwrap_or_else(config::default_start_date),
        end: query.end.unwrap_or_else(config::default_end_date),
    };

    let panel = state.client.ohlc_panel(id, params).await?;
    Ok(panel_response(&panel))
}
