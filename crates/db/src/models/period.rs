//! Period-tracking rows.

use chrono::NaiveDate;
use herhealth_core::error::CoreError;
use herhealth_core::period::PeriodEntry;
use herhealth_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `period_entries` table.
#[derive(Debug, Clone, FromRow)]
pub struct PeriodEntryRow {
    pub id: DbId,
    pub user_id: DbId,
    pub last_period_date: NaiveDate,
    pub cycle_length: i32,
    pub predicted_next_period: NaiveDate,
    pub date_added: Timestamp,
}

impl TryFrom<PeriodEntryRow> for PeriodEntry {
    type Error = CoreError;

    fn try_from(row: PeriodEntryRow) -> Result<Self, Self::Error> {
        let cycle_length = u32::try_from(row.cycle_length).map_err(|_| {
            CoreError::Internal(format!(
                "Period entry {} has invalid cycle length {}",
                row.id, row.cycle_length
            ))
        })?;
        Ok(PeriodEntry {
            last_period_date: row.last_period_date,
            cycle_length,
            predicted_next_period: row.predicted_next_period,
            date_added: row.date_added,
        })
    }
}
