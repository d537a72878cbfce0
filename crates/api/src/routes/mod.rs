pub mod assessment;
pub mod auth;
pub mod health;
pub mod nutrition;
pub mod period;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /register                 register (public)
/// /login                    login (public)
///
/// /breast_cancer            submit breast cancer checklist
/// /pcos                     submit PCOS checklist
/// /pcod                     submit PCOD checklist
/// /iron_deficiency          submit iron deficiency checklist
/// /assessments              assessment history (requires auth)
///
/// /add_period               record a period, returns prediction
/// /periods/summary          cycle summary (requires auth)
///
/// /nutrition/{condition}    food recommendations
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(assessment::router())
        .merge(period::router())
        .merge(nutrition::router())
}
