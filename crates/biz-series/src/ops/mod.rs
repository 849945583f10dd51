//! The vector operations.
//!
//! Each operation evaluates element-wise over temporal columns, broadcasts
//! length-1 operands, propagates nulls, and aborts the batch on the first
//! row error.

/// Business-day advance.
pub mod advance;

/// Ceiling to a calendar-duration boundary.
pub mod ceil;

/// Business-day counting between two date columns.
pub mod count;

/// Time-based exponential weighted moving average.
pub mod ewma;

/// Julian-date conversion.
pub mod julian;

/// Previous-greater lookback indices.
pub mod lookback;

/// Whole-month deltas between date columns.
pub mod month_delta;

/// Compound offset strings (business days + residual duration).
pub mod offset;

/// Workday membership.
pub mod workday;

/// Time-zone conversion.
pub mod zone;

use biz_core::errors::{Error, Result};
use biz_time::TimeScale;
use chrono_tz::Tz;

/// The epoch day containing a timestamp.
pub(crate) fn day_of_stamp(t: i64, scale: TimeScale) -> Result<i32> {
    let day = t.div_euclid(scale.per_day());
    i32::try_from(day).map_err(|_| Error::Date(format!("timestamp day {day} exceeds the date range")))
}

/// Parse an optional zone name once per batch.
pub(crate) fn parse_zone(zone: Option<&str>) -> Result<Option<Tz>> {
    zone.map(zone::parse_time_zone).transpose()
}

/// Shift a stored timestamp to local wall time when a zone is attached.
pub(crate) fn localize(t: i64, scale: TimeScale, tz: Option<&Tz>) -> Result<i64> {
    match tz {
        Some(tz) => zone::utc_stamp_to_local(t, scale, tz),
        None => Ok(t),
    }
}

/// Re-anchor a local wall time back to storage, failing on DST ambiguity.
pub(crate) fn delocalize(t: i64, scale: TimeScale, tz: Option<&Tz>) -> Result<i64> {
    match tz {
        Some(tz) => zone::local_stamp_to_utc(t, scale, tz, zone::Ambiguous::Raise),
        None => Ok(t),
    }
}
