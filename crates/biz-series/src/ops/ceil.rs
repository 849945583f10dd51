//! Ceiling of temporal columns to a calendar-duration boundary.

use crate::broadcast::try_unary_elementwise;
use crate::ops::{delocalize, localize, parse_zone};
use crate::temporal::Temporal;
use biz_core::errors::{Error, Result};
use biz_time::{CalendarDuration, TimeScale};

/// Round each row up to the next boundary of `every`; already-aligned rows
/// are unchanged.
///
/// Date columns are ceiled at day resolution, so the window must land on
/// whole days.
pub fn ceil_temporal(input: &Temporal, every: &CalendarDuration) -> Result<Temporal> {
    match input {
        Temporal::Days(days) => {
            let scale = TimeScale::Milliseconds;
            let per_day = scale.per_day();
            let out = try_unary_elementwise(days, |day| {
                let ceiled = every.ceil_stamp(day as i64 * per_day, scale)?;
                if ceiled.rem_euclid(per_day) != 0 {
                    return Err(Error::InvalidOperation(format!(
                        "ceiling by '{every}' does not land on whole days; \
                         cast to a datetime first"
                    )));
                }
                i32::try_from(ceiled.div_euclid(per_day))
                    .map_err(|_| Error::Date("ceiling result exceeds the date range".into()))
            })?;
            Ok(Temporal::Days(out))
        }
        Temporal::Stamps { data, scale, zone } => {
            let tz = parse_zone(zone.as_deref())?;
            let out = try_unary_elementwise(data, |t| {
                let local = localize(t, *scale, tz.as_ref())?;
                delocalize(every.ceil_stamp(local, *scale)?, *scale, tz.as_ref())
            })?;
            Ok(Temporal::Stamps {
                data: out,
                scale: *scale,
                zone: zone.clone(),
            })
        }
    }
}
