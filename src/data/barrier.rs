use crate::error::{CvGuardError, Result};
use chrono::{DateTime, Utc};
use polars::prelude::*;

/// Entry/exit times of one labeled observation.
///
/// `t0` is the entry time, `t1` the time the label becomes known (e.g.
/// the barrier touch of a triple-barrier label). Invariant: `t1 >= t0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelInterval {
    pub t0: DateTime<Utc>,
    pub t1: DateTime<Utc>,
}

pub const ENTRY_COLUMN: &str = "t0";
pub const EXIT_COLUMN: &str = "t1";

/// Whether a DataFrame carries the barrier-time columns.
pub fn has_barrier_columns(df: &DataFrame) -> bool {
    df.column(ENTRY_COLUMN).is_ok() && df.column(EXIT_COLUMN).is_ok()
}

/// Extract label intervals from the `t0`/`t1` datetime columns.
///
/// Fails if either column is missing, a timestamp is null, or an
/// interval has `t1 < t0`.
pub fn intervals_from_dataframe(df: &DataFrame) -> Result<Vec<LabelInterval>> {
    let t0 = df.column(ENTRY_COLUMN)?.datetime()?;
    let t1 = df.column(EXIT_COLUMN)?.datetime()?;

    if t0.len() != t1.len() {
        return Err(CvGuardError::Validation(format!(
            "Barrier columns differ in length: t0={}, t1={}",
            t0.len(),
            t1.len()
        )));
    }

    let mut intervals = Vec::with_capacity(t0.len());
    for idx in 0..t0.len() {
        let entry = get_datetime_at_index(t0, idx)?;
        let exit = get_datetime_at_index(t1, idx)?;

        if exit < entry {
            return Err(CvGuardError::Validation(format!(
                "Invalid interval at row {}: t1 ({}) precedes t0 ({})",
                idx, exit, entry
            )));
        }

        intervals.push(LabelInterval {
            t0: entry,
            t1: exit,
        });
    }

    Ok(intervals)
}

/// Read one timestamp, honoring the column's time unit. Callers supply
/// the frame, so ms, µs, and ns columns all have to convert correctly.
pub fn get_datetime_at_index(series: &DatetimeChunked, idx: usize) -> Result<DateTime<Utc>> {
    let raw = series.phys.get(idx).ok_or_else(|| {
        CvGuardError::Validation(format!("Cannot get timestamp at index {}", idx))
    })?;

    let datetime = match series.time_unit() {
        TimeUnit::Milliseconds => DateTime::<Utc>::from_timestamp_millis(raw),
        TimeUnit::Microseconds => DateTime::<Utc>::from_timestamp_micros(raw),
        TimeUnit::Nanoseconds => Some(DateTime::<Utc>::from_timestamp_nanos(raw)),
    }
    .ok_or_else(|| CvGuardError::Validation(format!("Invalid timestamp: {}", raw)))?;

    Ok(datetime)
}
