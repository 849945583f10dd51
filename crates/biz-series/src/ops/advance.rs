//! Advance dates or timestamps by a per-row count of business days.

use crate::broadcast::try_binary_elementwise;
use crate::ops::{day_of_stamp, delocalize, localize, parse_zone};
use crate::temporal::Temporal;
use crate::vector::Vector;
use biz_core::errors::Result;
use biz_time::{BusinessCalendar, Date, Roll};

/// Advance each row of `input` by the matching row of `n` business days.
///
/// `n` broadcasts when length 1. Datetime columns keep their intra-day
/// offset and time zone: zone-aware stamps are shifted to local wall time
/// for the day arithmetic and re-anchored afterwards.
pub fn advance_workdays(
    input: &Temporal,
    n: &Vector<i32>,
    calendar: &BusinessCalendar,
    roll: Roll,
) -> Result<Temporal> {
    match input {
        Temporal::Days(days) => {
            let out = try_binary_elementwise(days, n, |day, n| {
                Ok(calendar.advance(Date::from_serial(day)?, n, roll)?.serial())
            })?;
            Ok(Temporal::Days(out))
        }
        Temporal::Stamps { data, scale, zone } => {
            let tz = parse_zone(zone.as_deref())?;
            let per_day = scale.per_day();
            let out = try_binary_elementwise(data, n, |t, n| {
                let local = localize(t, *scale, tz.as_ref())?;
                let day = day_of_stamp(local, *scale)?;
                let shifted = calendar.advance(Date::from_serial(day)?, n, roll)?;
                let local_out = local + (shifted.serial() - day) as i64 * per_day;
                delocalize(local_out, *scale, tz.as_ref())
            })?;
            Ok(Temporal::Stamps {
                data: out,
                scale: *scale,
                zone: zone.clone(),
            })
        }
    }
}
