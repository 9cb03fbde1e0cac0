use axum::response::Json;
use serde_json::{json, Value};

use crypto_insights::config;
use crypto_insights::Currency;

/// GET /api/meta
///
/// Returns the selector options and their defaults so a front end can
/// draw the sidebar.
pub async fn get_meta() -> Json<Value> {
    Json(json!({
        "currencies": Currency::ALL,
        "default_currency": Currency::default(),
        "coin_count": {
            "min": config::MIN_COIN_COUNT,
            "max": config::MAX_COIN_COUNT,
            "default": config::DEFAULT_COIN_COUNT
        },
        "start_date": config::default_start_date(),
        "end_date": config::default_end_date()
    }))
}
