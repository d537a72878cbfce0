//! Handlers for period tracking.

use axum::extract::State;
use axum::Json;
use herhealth_core::period::{self, CycleSummary, PeriodEntry};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::lenient::int_or_string;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /add_period`.
#[derive(Debug, Deserialize)]
pub struct AddPeriodRequest {
    pub email: String,
    /// `YYYY-MM-DD`.
    pub last_period: String,
    #[serde(deserialize_with = "int_or_string")]
    pub cycle_length: i64,
}

#[derive(Debug, Serialize)]
pub struct AddPeriodResponse {
    pub message: &'static str,
    /// `YYYY-MM-DD`.
    pub predicted_next_period: String,
}

/// POST /api/add_period
///
/// Record a period and return the predicted start of the next one.
pub async fn add_period(
    State(state): State<AppState>,
    Json(input): Json<AddPeriodRequest>,
) -> AppResult<Json<AddPeriodResponse>> {
    let last_period = period::parse_date(&input.last_period)?;
    let cycle_length = period::validate_cycle_length(input.cycle_length)?;
    let entry = PeriodEntry::new(last_period, cycle_length)?;

    state.store.append_period_entry(&input.email, &entry).await?;

    let predicted_next_period = period::format_date(entry.predicted_next_period);
    tracing::info!(
        email = %input.email,
        cycle_length,
        predicted = %predicted_next_period,
        "Period entry recorded"
    );

    Ok(Json(AddPeriodResponse {
        message: "Period saved successfully",
        predicted_next_period,
    }))
}

/// GET /api/periods/summary
///
/// Average cycle length and next-period estimate for the authenticated user.
pub async fn cycle_summary(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<CycleSummary>>> {
    let entries = state.store.list_period_entries(&auth.email).await?;
    tracing::debug!(user_id = auth.user_id, count = entries.len(), "Summarized cycles");
    Ok(Json(DataResponse {
        data: period::summarize_cycles(&entries),
    }))
}
