//! Workday membership tests.

use crate::broadcast::try_unary_elementwise;
use crate::ops::{day_of_stamp, localize, parse_zone};
use crate::temporal::Temporal;
use crate::vector::Vector;
use biz_core::errors::Result;
use biz_time::{BusinessCalendar, Date};

/// Return, per row, whether the date is a business day: weekday bit set in
/// the mask and not listed as a holiday.
pub fn is_workday(input: &Temporal, calendar: &BusinessCalendar) -> Result<Vector<bool>> {
    match input {
        Temporal::Days(days) => try_unary_elementwise(days, |day| {
            Ok(calendar.is_business_day(Date::from_serial(day)?))
        }),
        Temporal::Stamps { data, scale, zone } => {
            let tz = parse_zone(zone.as_deref())?;
            try_unary_elementwise(data, |t| {
                let local = localize(t, *scale, tz.as_ref())?;
                let day = day_of_stamp(local, *scale)?;
                Ok(calendar.is_business_day(Date::from_serial(day)?))
            })
        }
    }
}
