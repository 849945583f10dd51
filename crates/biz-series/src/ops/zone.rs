//! Time-zone conversions between UTC-stored timestamps and local wall time.

use crate::broadcast::broadcast_len;
use crate::temporal::Temporal;
use crate::vector::{TextColumn, Vector};
use biz_core::errors::{Error, Result};
use biz_core::fail;
use biz_time::TimeScale;
use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// How to resolve a local wall-clock time that maps to two UTC instants
/// around a daylight-saving transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ambiguous {
    /// Fail the operation.
    #[default]
    Raise,
    /// Take the earlier of the two instants.
    Earliest,
    /// Take the later of the two instants.
    Latest,
}

impl std::str::FromStr for Ambiguous {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "raise" => Ok(Ambiguous::Raise),
            "earliest" => Ok(Ambiguous::Earliest),
            "latest" => Ok(Ambiguous::Latest),
            _ => Err(Error::InvalidConfiguration(format!(
                "`ambiguous` must be one of 'raise', 'earliest' or 'latest'; found '{s}'"
            ))),
        }
    }
}

/// Parse an IANA time-zone name.
pub(crate) fn parse_time_zone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| Error::InvalidConfiguration(format!("unknown time zone '{name}'")))
}

/// Decompose a timestamp into a naive datetime.
pub(crate) fn stamp_to_naive(t: i64, scale: TimeScale) -> Result<NaiveDateTime> {
    let secs = t.div_euclid(scale.per_second());
    let frac = (t.rem_euclid(scale.per_second()) * scale.nanos_per_unit()) as u32;
    DateTime::<Utc>::from_timestamp(secs, frac)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| Error::Date(format!("timestamp {t} out of range")))
}

/// Recompose a naive datetime into a timestamp at the given scale.
pub(crate) fn naive_to_stamp(ndt: NaiveDateTime, scale: TimeScale) -> Result<i64> {
    let utc = ndt.and_utc();
    match scale {
        TimeScale::Milliseconds => Ok(utc.timestamp_millis()),
        TimeScale::Microseconds => Ok(utc.timestamp_micros()),
        TimeScale::Nanoseconds => utc
            .timestamp_nanos_opt()
            .ok_or_else(|| Error::Date(format!("datetime '{ndt}' overflows a nanosecond timestamp"))),
    }
}

/// Shift a UTC-stored timestamp to the wall time of `tz`.
pub(crate) fn utc_stamp_to_local(t: i64, scale: TimeScale, tz: &Tz) -> Result<i64> {
    let ndt = stamp_to_naive(t, scale)?;
    naive_to_stamp(tz.from_utc_datetime(&ndt).naive_local(), scale)
}

/// Re-anchor a local wall time of `tz` back to a UTC-stored timestamp.
pub(crate) fn local_stamp_to_utc(
    t: i64,
    scale: TimeScale,
    tz: &Tz,
    ambiguous: Ambiguous,
) -> Result<i64> {
    let ndt = stamp_to_naive(t, scale)?;
    naive_to_stamp(resolve_local(tz.from_local_datetime(&ndt), ndt, tz, ambiguous)?.naive_utc(), scale)
}

fn resolve_local(
    result: LocalResult<DateTime<Tz>>,
    ndt: NaiveDateTime,
    tz: &Tz,
    ambiguous: Ambiguous,
) -> Result<DateTime<Tz>> {
    match result {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, latest) => match ambiguous {
            Ambiguous::Earliest => Ok(earliest),
            Ambiguous::Latest => Ok(latest),
            Ambiguous::Raise => Err(Error::AmbiguousTime(format!(
                "datetime '{ndt}' is ambiguous in time zone '{tz}'; use `ambiguous` to resolve it"
            ))),
        },
        LocalResult::None => Err(Error::AmbiguousTime(format!(
            "datetime '{ndt}' is non-existent in time zone '{tz}'"
        ))),
    }
}

/// Convert timestamps to the local wall time of a (possibly per-row) target
/// time zone. The result is a naive Datetime column.
pub fn to_local_datetime(input: &Temporal, time_zones: &TextColumn) -> Result<Temporal> {
    let Temporal::Stamps { data, scale, zone } = input else {
        fail!(
            "to_local_datetime only works on Datetime columns, got {}",
            input.type_name()
        )
    };
    let from_tz = parse_time_zone(zone.as_deref().unwrap_or("UTC"))?;

    let len = broadcast_len(data.len(), time_zones.len())?;
    let mut out: Vec<Option<i64>> = Vec::with_capacity(len);
    for i in 0..len {
        let t = if data.len() == 1 { data.get(0) } else { data.get(i) };
        let name = if time_zones.len() == 1 {
            time_zones.get(0)
        } else {
            time_zones.get(i)
        };
        match (t, name) {
            (Some(t), Some(name)) => {
                let to_tz = parse_time_zone(name)?;
                let ndt = stamp_to_naive(t, *scale)?;
                let local = from_tz
                    .from_utc_datetime(&ndt)
                    .with_timezone(&to_tz)
                    .naive_local();
                out.push(Some(naive_to_stamp(local, *scale)?));
            }
            _ => out.push(None),
        }
    }
    Ok(Temporal::Stamps {
        data: Vector::from_options(out),
        scale: *scale,
        zone: None,
    })
}

/// Interpret naive timestamps as wall time in a (possibly per-row) source
/// time zone and express them in `to_tz`.
pub fn from_local_datetime(
    input: &Temporal,
    from_zones: &TextColumn,
    to_tz: &str,
    ambiguous: Ambiguous,
) -> Result<Temporal> {
    let Temporal::Stamps { data, scale, .. } = input else {
        fail!(
            "from_local_datetime only works on Datetime columns, got {}",
            input.type_name()
        )
    };
    parse_time_zone(to_tz)?;

    let len = broadcast_len(data.len(), from_zones.len())?;
    let mut out: Vec<Option<i64>> = Vec::with_capacity(len);
    for i in 0..len {
        let t = if data.len() == 1 { data.get(0) } else { data.get(i) };
        let name = if from_zones.len() == 1 {
            from_zones.get(0)
        } else {
            from_zones.get(i)
        };
        match (t, name) {
            (Some(t), Some(name)) => {
                let from_tz = parse_time_zone(name)?;
                out.push(Some(local_stamp_to_utc(t, *scale, &from_tz, ambiguous)?));
            }
            _ => out.push(None),
        }
    }
    Ok(Temporal::Stamps {
        data: Vector::from_options(out),
        scale: *scale,
        zone: Some(to_tz.to_string()),
    })
}
