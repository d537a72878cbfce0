use axum::routing::{get, post};
use axum::Router;

use crate::handlers::period;
use crate::state::AppState;

/// ```text
/// POST /add_period      -> add_period
/// GET  /periods/summary -> cycle_summary (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add_period", post(period::add_period))
        .route("/periods/summary", get(period::cycle_summary))
}
