//! Compound offset application: business days first, then the residual
//! calendar duration.

use crate::broadcast::{broadcast_len, try_unary_elementwise};
use crate::ops::advance::advance_workdays;
use crate::ops::{day_of_stamp, delocalize, localize, parse_zone};
use crate::temporal::Temporal;
use crate::vector::{TextColumn, Vector};
use biz_core::errors::{Error, Result};
use biz_time::{BusinessCalendar, CalendarDuration, Date, OffsetSpec, Roll, TimeScale};
use chrono_tz::Tz;

/// Apply one offset string to every row.
///
/// The string is parsed once; its business-day component moves the date
/// through the calendar, and the residual — if any — is added to the result
/// with the generic calendar-duration arithmetic. The pure-`Nbd` fast path
/// skips the duration step entirely.
pub fn offset_by(
    input: &Temporal,
    by: &str,
    calendar: &BusinessCalendar,
    roll: Roll,
) -> Result<Temporal> {
    let spec = OffsetSpec::parse(by)?;
    let n = business_days_i32(&spec)?;
    let shifted = advance_workdays(input, &Vector::from_values(vec![n]), calendar, roll)?;
    match &spec.residual {
        None => Ok(shifted),
        Some(residual) => apply_duration(&shifted, residual),
    }
}

/// Apply a per-row offset-string column, broadcasting a length-1 column.
pub fn offset_by_column(
    input: &Temporal,
    by: &TextColumn,
    calendar: &BusinessCalendar,
    roll: Roll,
) -> Result<Temporal> {
    let len = broadcast_len(input.len(), by.len())?;
    match input {
        Temporal::Days(days) => {
            let mut out: Vec<Option<i32>> = Vec::with_capacity(len);
            for i in 0..len {
                let day = pick(days, i);
                let s = pick_text(by, i);
                match (day, s) {
                    (Some(day), Some(s)) => {
                        let spec = OffsetSpec::parse(s)?;
                        out.push(Some(shift_day(day, &spec, calendar, roll)?));
                    }
                    _ => out.push(None),
                }
            }
            Ok(Temporal::Days(Vector::from_options(out)))
        }
        Temporal::Stamps { data, scale, zone } => {
            let tz = parse_zone(zone.as_deref())?;
            let mut out: Vec<Option<i64>> = Vec::with_capacity(len);
            for i in 0..len {
                let t = pick(data, i);
                let s = pick_text(by, i);
                match (t, s) {
                    (Some(t), Some(s)) => {
                        let spec = OffsetSpec::parse(s)?;
                        out.push(Some(shift_stamp(
                            t,
                            &spec,
                            calendar,
                            roll,
                            *scale,
                            tz.as_ref(),
                        )?));
                    }
                    _ => out.push(None),
                }
            }
            Ok(Temporal::Stamps {
                data: Vector::from_options(out),
                scale: *scale,
                zone: zone.clone(),
            })
        }
    }
}

/// Add a calendar duration to every row of a temporal column.
pub fn apply_duration(input: &Temporal, duration: &CalendarDuration) -> Result<Temporal> {
    match input {
        Temporal::Days(days) => {
            let out = try_unary_elementwise(days, |day| {
                Ok(duration.add_to_date(Date::from_serial(day)?)?.serial())
            })?;
            Ok(Temporal::Days(out))
        }
        Temporal::Stamps { data, scale, zone } => {
            let tz = parse_zone(zone.as_deref())?;
            let out = try_unary_elementwise(data, |t| {
                let local = localize(t, *scale, tz.as_ref())?;
                delocalize(duration.add_to_stamp(local, *scale)?, *scale, tz.as_ref())
            })?;
            Ok(Temporal::Stamps {
                data: out,
                scale: *scale,
                zone: zone.clone(),
            })
        }
    }
}

fn business_days_i32(spec: &OffsetSpec) -> Result<i32> {
    i32::try_from(spec.business_days).map_err(|_| {
        Error::MalformedOffset(format!(
            "business-day count {} out of range",
            spec.business_days
        ))
    })
}

fn shift_day(day: i32, spec: &OffsetSpec, calendar: &BusinessCalendar, roll: Roll) -> Result<i32> {
    let n = business_days_i32(spec)?;
    let mut date = calendar.advance(Date::from_serial(day)?, n, roll)?;
    if let Some(residual) = &spec.residual {
        date = residual.add_to_date(date)?;
    }
    Ok(date.serial())
}

fn shift_stamp(
    t: i64,
    spec: &OffsetSpec,
    calendar: &BusinessCalendar,
    roll: Roll,
    scale: TimeScale,
    tz: Option<&Tz>,
) -> Result<i64> {
    let n = business_days_i32(spec)?;
    let local = localize(t, scale, tz)?;
    let day = day_of_stamp(local, scale)?;
    let shifted = calendar.advance(Date::from_serial(day)?, n, roll)?;
    let mut local_out = local + (shifted.serial() - day) as i64 * scale.per_day();
    if let Some(residual) = &spec.residual {
        local_out = residual.add_to_stamp(local_out, scale)?;
    }
    delocalize(local_out, scale, tz)
}

fn pick<T: Copy>(v: &Vector<T>, i: usize) -> Option<T> {
    if v.len() == 1 {
        v.get(0)
    } else {
        v.get(i)
    }
}

fn pick_text(v: &TextColumn, i: usize) -> Option<&str> {
    if v.len() == 1 {
        v.get(0)
    } else {
        v.get(i)
    }
}
