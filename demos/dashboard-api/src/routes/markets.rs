use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::Value;

use crypto_insights::{config, Currency, MarketParams, Panel};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct MarketQueryParams {
    pub currency: Option<String>,
    pub count: Option<u32>,
}

impl MarketQueryParams {
    /// Parse the sidebar selection, falling back to the defaults.
    pub fn to_params(&self) -> Result<MarketParams, AppError> {
        let currency = match self.currency.as_deref() {
            Some(code) => code.parse::<Currency>()?,
            None => Currency::default(),
        };
        let count = self.count.unwrap_or(config::DEFAULT_COIN_COUNT);
        Ok(MarketParams::new(currency, count)?)
    }
}

/// GET /api/markets?currency=eur&count=20
///
/// Market table, top gainers/losers and volatility series. A failed fetch
/// is returned as a `failed` panel with status 502.
pub async fn get_markets(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MarketQueryParams>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let params = query.to_params()?;
    let panel = state.client.market_panel(params).await?;
    Ok(panel_response(&panel))
}

/// Status for a panel: 502 when the upstream call failed, 200 otherwise.
pub fn panel_response<T: serde::Serialize>(panel: &Panel<T>) -> (StatusCode, Json<Value>) {
    let status = if panel.is_failed() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };
    (status, Json(serde_json::to_value(panel).unwrap_or(Value::Null)))
}
