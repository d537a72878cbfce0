//! Handlers for symptom submissions and assessment history.
//!
//! The four submission endpoints share one code path; they differ only in
//! which condition's weight table scores the answers.

use axum::extract::State;
use axum::Json;
use herhealth_core::assessment::{self, AssessmentOutcome, AssessmentRecord};
use herhealth_core::scoring::{Condition, Submission};
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for every submission endpoint: the user's email plus the
/// condition's yes/no symptom fields. Unknown fields are kept in the stored
/// inputs but never scored.
#[derive(Debug, Deserialize)]
pub struct AssessmentRequest {
    pub email: String,
    #[serde(flatten)]
    pub answers: Submission,
}

async fn submit(
    state: &AppState,
    condition: Condition,
    input: AssessmentRequest,
) -> AppResult<Json<AssessmentOutcome>> {
    let outcome =
        assessment::assess(state.store.as_ref(), &input.email, condition, input.answers).await?;
    Ok(Json(outcome))
}

/// POST /api/breast_cancer
pub async fn breast_cancer(
    State(state): State<AppState>,
    Json(input): Json<AssessmentRequest>,
) -> AppResult<Json<AssessmentOutcome>> {
    submit(&state, Condition::BreastCancer, input).await
}

/// POST /api/pcos
pub async fn pcos(
    State(state): State<AppState>,
    Json(input): Json<AssessmentRequest>,
) -> AppResult<Json<AssessmentOutcome>> {
    submit(&state, Condition::Pcos, input).await
}

/// POST /api/pcod
pub async fn pcod(
    State(state): State<AppState>,
    Json(input): Json<AssessmentRequest>,
) -> AppResult<Json<AssessmentOutcome>> {
    submit(&state, Condition::Pcod, input).await
}

/// POST /api/iron_deficiency
pub async fn iron_deficiency(
    State(state): State<AppState>,
    Json(input): Json<AssessmentRequest>,
) -> AppResult<Json<AssessmentOutcome>> {
    submit(&state, Condition::IronDeficiency, input).await
}

/// GET /api/assessments
///
/// The authenticated user's assessment history, oldest first.
pub async fn list_assessments(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<AssessmentRecord>>>> {
    let records = state.store.list_assessments(&auth.email).await?;
    tracing::debug!(user_id = auth.user_id, count = records.len(), "Listed assessments");
    Ok(Json(DataResponse { data: records }))
}
