//! Route definitions for symptom submissions and history.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::assessment;
use crate::state::AppState;

/// ```text
/// POST /breast_cancer   -> breast_cancer
/// POST /pcos            -> pcos
/// POST /pcod            -> pcod
/// POST /iron_deficiency -> iron_deficiency
/// GET  /assessments     -> list_assessments (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/breast_cancer", post(assessment::breast_cancer))
        .route("/pcos", post(assessment::pcos))
        .route("/pcod", post(assessment::pcod))
        .route("/iron_deficiency", post(assessment::iron_deficiency))
        .route("/assessments", get(assessment::list_assessments))
}
