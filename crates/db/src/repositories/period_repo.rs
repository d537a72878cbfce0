//! Repository for the `period_entries` table.

use herhealth_core::period::PeriodEntry;
use herhealth_core::types::DbId;
use sqlx::PgPool;

use crate::models::period::PeriodEntryRow;

const COLUMNS: &str =
    "id, user_id, last_period_date, cycle_length, predicted_next_period, date_added";

/// Append-only access to period-tracking history.
pub struct PeriodEntryRepo;

impl PeriodEntryRepo {
    /// Append an entry for the user with the given email in one statement.
    ///
    /// Returns `false` if no user has that email (nothing inserted).
    pub async fn append_for_email(
        pool: &PgPool,
        email: &str,
        entry: &PeriodEntry,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO period_entries
                (user_id, last_period_date, cycle_length, predicted_next_period, date_added)
             SELECT id, $2, $3, $4, $5 FROM users WHERE email = $1",
        )
        .bind(email)
        .bind(entry.last_period_date)
        .bind(entry.cycle_length as i32)
        .bind(entry.predicted_next_period)
        .bind(entry.date_added)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// All period entries for a user, oldest first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<PeriodEntryRow>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM period_entries WHERE user_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, PeriodEntryRow>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
