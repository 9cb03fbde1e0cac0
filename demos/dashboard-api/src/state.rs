/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// The async insights client. Dispatches blocking fetches to a thread
    /// pool internally; holds no per-user state.
    pub client: crypto_insights::AsyncInsightsClient,
}
