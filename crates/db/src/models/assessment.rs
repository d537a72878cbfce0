//! Assessment history rows.

use herhealth_core::assessment::AssessmentRecord;
use herhealth_core::error::CoreError;
use herhealth_core::scoring::Submission;
use herhealth_core::types::{DbId, Timestamp};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `assessments` table.
#[derive(Debug, Clone, FromRow)]
pub struct Assessment {
    pub id: DbId,
    pub user_id: DbId,
    pub condition: String,
    pub inputs: Json<Submission>,
    pub score: i32,
    pub risk: String,
    pub recorded_at: Timestamp,
}

impl TryFrom<Assessment> for AssessmentRecord {
    type Error = CoreError;

    fn try_from(row: Assessment) -> Result<Self, Self::Error> {
        let score = u32::try_from(row.score).map_err(|_| {
            CoreError::Internal(format!("Assessment {} has negative score {}", row.id, row.score))
        })?;
        Ok(AssessmentRecord {
            condition: row.condition,
            inputs: row.inputs.0,
            score,
            risk: row.risk.parse()?,
            recorded_at: row.recorded_at,
        })
    }
}
