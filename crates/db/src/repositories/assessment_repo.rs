//! Repository for the `assessments` table.

use herhealth_core::assessment::AssessmentRecord;
use herhealth_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::assessment::Assessment;

const COLUMNS: &str = "id, user_id, condition, inputs, score, risk, recorded_at";

/// Append-only access to assessment history.
pub struct AssessmentRepo;

impl AssessmentRepo {
    /// Append a record for the user with the given email in one statement.
    ///
    /// Returns `false` if no user has that email (nothing inserted).
    pub async fn append_for_email(
        pool: &PgPool,
        email: &str,
        record: &AssessmentRecord,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO assessments (user_id, condition, inputs, score, risk, recorded_at)
             SELECT id, $2, $3, $4, $5, $6 FROM users WHERE email = $1",
        )
        .bind(email)
        .bind(&record.condition)
        .bind(Json(&record.inputs))
        .bind(record.score as i32)
        .bind(record.risk.as_str())
        .bind(record.recorded_at)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// All assessments for a user, oldest first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Assessment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assessments WHERE user_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Assessment>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
