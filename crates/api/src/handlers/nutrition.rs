//! Handler for per-condition food recommendations.

use axum::extract::Path;
use axum::Json;
use herhealth_core::nutrition::foods_for;
use herhealth_core::scoring::Condition;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;

#[derive(Debug, Serialize)]
pub struct NutritionResponse {
    pub condition: &'static str,
    pub foods: &'static [&'static str],
}

/// GET /api/nutrition/{condition}
///
/// `condition` is a slug (`pcos`) or display name (`Iron Deficiency`).
pub async fn recommendations(
    Path(condition): Path<String>,
) -> AppResult<Json<DataResponse<NutritionResponse>>> {
    let condition: Condition = condition.parse()?;
    Ok(Json(DataResponse {
        data: NutritionResponse {
            condition: condition.name(),
            foods: foods_for(condition),
        },
    }))
}
