//! Menstrual cycle prediction and cycle-length summaries.

use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Date format accepted and produced by the period endpoints.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Cycle length assumed until at least two periods have been recorded.
pub const DEFAULT_CYCLE_LENGTH: u32 = 28;

/// Longest cycle length accepted on input.
pub const MAX_CYCLE_LENGTH: u32 = 365;

/// One period-tracking entry on a user's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodEntry {
    pub last_period_date: NaiveDate,
    pub cycle_length: u32,
    pub predicted_next_period: NaiveDate,
    pub date_added: Timestamp,
}

impl PeriodEntry {
    /// Build an entry, predicting the next period from `last_period_date`.
    pub fn new(last_period_date: NaiveDate, cycle_length: u32) -> Result<Self, CoreError> {
        Ok(Self {
            last_period_date,
            cycle_length,
            predicted_next_period: predict_next_period(last_period_date, cycle_length)?,
            date_added: Utc::now(),
        })
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        CoreError::Validation(format!("Invalid date '{value}', expected YYYY-MM-DD"))
    })
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Validate a cycle length in days.
pub fn validate_cycle_length(days: i64) -> Result<u32, CoreError> {
    if !(1..=i64::from(MAX_CYCLE_LENGTH)).contains(&days) {
        return Err(CoreError::Validation(format!(
            "cycle_length must be between 1 and {MAX_CYCLE_LENGTH} days, got {days}"
        )));
    }
    Ok(days as u32)
}

/// Calendar-day addition: `last_period + cycle_length` days. No timezone handling.
pub fn predict_next_period(last_period: NaiveDate, cycle_length: u32) -> Result<NaiveDate, CoreError> {
    last_period
        .checked_add_days(Days::new(u64::from(cycle_length)))
        .ok_or_else(|| CoreError::Validation("Predicted date is out of range".into()))
}

// ---------------------------------------------------------------------------
// Cycle summary
// ---------------------------------------------------------------------------

/// Average cycle length and next-period estimate across recorded periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleSummary {
    pub average_cycle_length: u32,
    /// `None` when no period has been recorded.
    pub next_period: Option<NaiveDate>,
    /// Recorded period start dates, most recent first.
    pub history: Vec<NaiveDate>,
}

/// Summarize recorded periods.
///
/// The average is the rounded mean of the gaps between consecutive recorded
/// start dates (sorted ascending), or [`DEFAULT_CYCLE_LENGTH`] with fewer than
/// two dates. The next period is the latest date plus that average.
pub fn summarize_cycles(entries: &[PeriodEntry]) -> CycleSummary {
    let mut dates: Vec<NaiveDate> = entries.iter().map(|e| e.last_period_date).collect();
    dates.sort_unstable();

    let average_cycle_length = average_gap(&dates).unwrap_or(DEFAULT_CYCLE_LENGTH);

    let next_period = dates
        .last()
        .and_then(|last| last.checked_add_days(Days::new(u64::from(average_cycle_length))));

    dates.reverse();

    CycleSummary {
        average_cycle_length,
        next_period,
        history: dates,
    }
}

fn average_gap(sorted: &[NaiveDate]) -> Option<u32> {
    if sorted.len() < 2 {
        return None;
    }
    let total: i64 = sorted
        .windows(2)
        .map(|w| (w[1] - w[0]).num_days())
        .sum();
    let mean = total as f64 / (sorted.len() - 1) as f64;
    Some(mean.round().max(0.0) as u32)
}
