//! Julian-date conversion of temporal columns.

use crate::broadcast::try_unary_elementwise;
use crate::ops::day_of_stamp;
use crate::temporal::Temporal;
use crate::vector::Vector;
use biz_core::errors::Result;
use biz_core::fail;
use biz_time::julian::{julian_day, julian_from_parts};
use biz_time::Date;

/// Convert each row to a fractional julian date.
///
/// Datetime inputs must be naive or UTC; convert zone-aware columns first
/// so the fractional day part is unambiguous.
pub fn to_julian_date(input: &Temporal) -> Result<Vector<f64>> {
    match input {
        Temporal::Days(days) => {
            try_unary_elementwise(days, |day| Ok(julian_day(Date::from_serial(day)?)))
        }
        Temporal::Stamps { data, scale, zone } => {
            if !(zone.is_none() || zone.as_deref() == Some("UTC")) {
                fail!(
                    "to_julian_date only works on UTC or naive Datetime columns; \
                     convert the time zone first"
                );
            }
            try_unary_elementwise(data, |t| {
                let day = day_of_stamp(t, *scale)?;
                let (y, m, d) = Date::from_serial(day)?.ymd();
                let intra_ns = t.rem_euclid(scale.per_day()) * scale.nanos_per_unit();
                let hour = (intra_ns / 3_600_000_000_000) as u32;
                let minute = (intra_ns / 60_000_000_000 % 60) as u32;
                let second = (intra_ns / 1_000_000_000 % 60) as u32;
                let nanosecond = (intra_ns % 1_000_000_000) as u32;
                Ok(julian_from_parts(
                    y as i32, m as u32, d as u32, hour, minute, second, nanosecond,
                ))
            })
        }
    }
}
