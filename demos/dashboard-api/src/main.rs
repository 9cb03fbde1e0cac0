mod error;
mod routes;
mod state;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use log::info;
use tower_http::cors::CorsLayer;

use state::AppState;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let client = crypto_insights::AsyncInsightsClient::builder()
        .build()
        .await
        .expect("Failed to initialize insights client");
    info!("Insights client ready.");

    let state = Arc::new(AppState { client });

    let app = Router::new()
        .route("/api/meta", get(routes::meta::get_meta))
        .route("/api/markets", get(routes::markets::get_markets))
        .route("/api/coins/{id}/ohlc", get(routes::ohlc::get_ohlc))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = std::env::var("DASHBOARD_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    info!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
