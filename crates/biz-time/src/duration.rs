//! `CalendarDuration` — a compound calendar time span.
//!
//! Parsed from token strings in the `1h`, `3d12h4m25s`, `2w`, `1mo`, `1y`
//! language. Months are calendar-aware (end-of-month clamping); weeks and
//! everything below are fixed-length. A single leading `-` negates every
//! component.

use crate::date::Date;
use crate::scale::TimeScale;
use biz_core::errors::{Error, Result};

const NANOS_PER_SECOND: i64 = 1_000_000_000;
const NANOS_PER_MINUTE: i64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MINUTE;
const NANOS_PER_DAY: i64 = 24 * NANOS_PER_HOUR;

/// A compound calendar duration: months + weeks + a fixed nanosecond span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CalendarDuration {
    months: i64,
    weeks: i64,
    nsecs: i64,
    negative: bool,
}

impl CalendarDuration {
    /// The zero-length duration.
    pub fn zero() -> Self {
        CalendarDuration::default()
    }

    /// Parse a duration token string.
    ///
    /// Supported units: `ns`, `us`, `ms`, `s`, `m` (minutes), `h`, `d`, `w`,
    /// `mo`, `q` (three months), `y`. Tokens may be chained (`3d12h`); one
    /// leading minus sign negates the whole duration.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let negative = s.starts_with('-');
        let body = if negative { &s[1..] } else { s };
        if body.contains('-') {
            return Err(Error::MalformedOffset(format!(
                "'{s}': only a single leading minus sign is allowed"
            )));
        }

        let mut months = 0i64;
        let mut weeks = 0i64;
        let mut nsecs = 0i64;
        let mut tokens = Tokens::new(body, s)?;
        while let Some((n, unit)) = tokens.scan()? {
            match unit {
                "ns" => nsecs += n,
                "us" => nsecs += n * 1_000,
                "ms" => nsecs += n * 1_000_000,
                "s" => nsecs += n * NANOS_PER_SECOND,
                "m" => nsecs += n * NANOS_PER_MINUTE,
                "h" => nsecs += n * NANOS_PER_HOUR,
                "d" => nsecs += n * NANOS_PER_DAY,
                "w" => weeks += n,
                "mo" => months += n,
                "q" => months += 3 * n,
                "y" => months += 12 * n,
                _ => {
                    return Err(Error::MalformedOffset(format!(
                        "'{s}': unknown unit '{unit}'"
                    )))
                }
            }
        }

        Ok(CalendarDuration {
            months,
            weeks,
            nsecs,
            negative,
        })
    }

    /// Return `true` if every component is zero.
    pub fn is_zero(&self) -> bool {
        self.months == 0 && self.weeks == 0 && self.nsecs == 0
    }

    /// The signed fixed-length part in nanoseconds (weeks + sub-week
    /// components). Fails when a calendar-aware months component is
    /// present, since months have no fixed length.
    pub fn fixed_nanoseconds(&self) -> Result<i64> {
        if self.months != 0 {
            return Err(Error::InvalidOperation(
                "a month-based duration has no fixed nanosecond length".into(),
            ));
        }
        let total = self.weeks * 7 * NANOS_PER_DAY + self.nsecs;
        Ok(if self.negative { -total } else { total })
    }

    /// Apply to a date. The sub-day part must be a whole number of days.
    pub fn add_to_date(&self, date: Date) -> Result<Date> {
        let sign = if self.negative { -1i64 } else { 1 };
        if self.nsecs % NANOS_PER_DAY != 0 {
            return Err(Error::InvalidOperation(
                "cannot apply a sub-daily duration to a date column; cast to a datetime first"
                    .into(),
            ));
        }
        let mut out = date;
        if self.months != 0 {
            out = out.add_months((sign * self.months) as i32)?;
        }
        let days = sign * (self.weeks * 7 + self.nsecs / NANOS_PER_DAY);
        out.add_days(days as i32)
    }

    /// Apply to a timestamp at the given scale. Months are applied first
    /// (calendar-aware, preserving the intra-day offset), then the fixed
    /// week/nanosecond span.
    pub fn add_to_stamp(&self, t: i64, scale: TimeScale) -> Result<i64> {
        let sign = if self.negative { -1i64 } else { 1 };
        let mut t = t;
        if self.months != 0 {
            let per_day = scale.per_day();
            let day = stamp_day(t, scale)?;
            let intra = t.rem_euclid(per_day);
            let shifted = day.add_months((sign * self.months) as i32)?;
            t = shifted.serial() as i64 * per_day + intra;
        }
        let fixed = self.weeks * 7 * scale.per_day() + scale.units_from_nanos(self.nsecs);
        Ok(t + sign * fixed)
    }

    /// Truncate a timestamp down to the most recent boundary of this
    /// duration. Month, week, and fixed spans cannot be mixed in one
    /// truncation window.
    pub fn truncate_stamp(&self, t: i64, scale: TimeScale) -> Result<i64> {
        if self.negative {
            return Err(Error::InvalidOperation(
                "cannot truncate by a negative duration".into(),
            ));
        }
        match (self.months, self.weeks, self.nsecs) {
            (0, 0, 0) => Err(Error::InvalidOperation(
                "cannot truncate by a zero-length duration".into(),
            )),
            (0, 0, _) => {
                let unit = scale.units_from_nanos(self.nsecs);
                if unit == 0 {
                    return Err(Error::InvalidOperation(format!(
                        "duration is below the resolution of a {scale} timestamp"
                    )));
                }
                Ok(t - t.rem_euclid(unit))
            }
            (0, _, 0) => {
                // Window boundaries sit on Mondays.
                let day = stamp_day(t, scale)?;
                let monday = day.serial() as i64 - (day.weekday().ordinal() as i64 - 1);
                let anchor = monday - 7 * (self.weeks - 1);
                Ok(anchor * scale.per_day())
            }
            (_, 0, 0) => {
                let day = stamp_day(t, scale)?;
                let (y, m, _) = day.ymd();
                let mut total = y as i64 * 12 + (m as i64 - 1);
                total -= total.rem_euclid(self.months);
                let first = Date::from_ymd((total / 12) as u16, (total % 12 + 1) as u8, 1)?;
                Ok(first.serial() as i64 * scale.per_day())
            }
            _ => Err(Error::InvalidOperation(
                "truncation window may not mix month, week and sub-week units".into(),
            )),
        }
    }

    /// Round a timestamp up to the next boundary of this duration.
    /// Already-aligned timestamps are returned unchanged.
    pub fn ceil_stamp(&self, t: i64, scale: TimeScale) -> Result<i64> {
        let truncated = self.truncate_stamp(t, scale)?;
        if truncated == t {
            Ok(t)
        } else {
            self.add_to_stamp(truncated, scale)
        }
    }
}

/// The calendar day containing a timestamp.
fn stamp_day(t: i64, scale: TimeScale) -> Result<Date> {
    let day = t.div_euclid(scale.per_day());
    let day = i32::try_from(day)
        .map_err(|_| Error::Date(format!("timestamp day {day} exceeds the date range")))?;
    Date::from_serial(day)
}

impl std::fmt::Display for CalendarDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0ns");
        }
        if self.negative {
            write!(f, "-")?;
        }
        if self.months != 0 {
            write!(f, "{}mo", self.months)?;
        }
        if self.weeks != 0 {
            write!(f, "{}w", self.weeks)?;
        }
        if self.nsecs != 0 {
            write!(f, "{}ns", self.nsecs)?;
        }
        Ok(())
    }
}

/// Token scanner over a duration body: digit runs followed by unit runs.
pub(crate) struct Tokens<'a> {
    body: &'a str,
    pos: usize,
    original: &'a str,
    yielded_any: bool,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(body: &'a str, original: &'a str) -> Result<Self> {
        if body.is_empty() {
            return Err(Error::MalformedOffset(format!(
                "'{original}': empty duration string"
            )));
        }
        Ok(Tokens {
            body,
            pos: 0,
            original,
            yielded_any: false,
        })
    }

    pub(crate) fn scan(&mut self) -> Result<Option<(i64, &'a str)>> {
        if self.pos >= self.body.len() {
            if !self.yielded_any {
                return Err(Error::MalformedOffset(format!(
                    "'{}': expected <number><unit> tokens",
                    self.original
                )));
            }
            return Ok(None);
        }
        let rest = &self.body[self.pos..];
        let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
        let unit_len = rest[digits..]
            .chars()
            .take_while(|c| c.is_ascii_alphabetic())
            .count();
        if digits == 0 || unit_len == 0 {
            return Err(Error::MalformedOffset(format!(
                "'{}': expected <number><unit> at '{rest}'",
                self.original
            )));
        }
        let n: i64 = rest[..digits].parse().map_err(|_| {
            Error::MalformedOffset(format!(
                "'{}': number '{}' out of range",
                self.original,
                &rest[..digits]
            ))
        })?;
        let unit = &rest[digits..digits + unit_len];
        self.pos += digits + unit_len;
        self.yielded_any = true;
        Ok(Some((n, unit)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const US: TimeScale = TimeScale::Microseconds;

    fn stamp(y: u16, m: u8, d: u8, h: i64, min: i64, scale: TimeScale) -> i64 {
        let day = Date::from_ymd(y, m, d).unwrap().serial() as i64;
        day * scale.per_day() + (h * 3600 + min * 60) * scale.per_second()
    }

    #[test]
    fn parse_compound() {
        let dur = CalendarDuration::parse("3d12h4m25s").unwrap();
        assert_eq!(
            dur.fixed_nanoseconds().unwrap(),
            3 * NANOS_PER_DAY + 12 * NANOS_PER_HOUR + 4 * NANOS_PER_MINUTE + 25 * NANOS_PER_SECOND
        );
    }

    #[test]
    fn parse_negative() {
        let dur = CalendarDuration::parse("-1h30m").unwrap();
        assert_eq!(
            dur.fixed_nanoseconds().unwrap(),
            -(NANOS_PER_HOUR + 30 * NANOS_PER_MINUTE)
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(CalendarDuration::parse("").is_err());
        assert!(CalendarDuration::parse("h1").is_err());
        assert!(CalendarDuration::parse("1parsec").is_err());
        assert!(CalendarDuration::parse("1h-2m").is_err());
    }

    #[test]
    fn quarters_and_years_fold_to_months() {
        assert_eq!(
            CalendarDuration::parse("1y").unwrap(),
            CalendarDuration::parse("12mo").unwrap()
        );
        assert_eq!(
            CalendarDuration::parse("2q").unwrap(),
            CalendarDuration::parse("6mo").unwrap()
        );
    }

    #[test]
    fn add_months_preserves_intraday() {
        let dur = CalendarDuration::parse("1mo").unwrap();
        let t = stamp(2024, 1, 31, 9, 30, US);
        // Jan 31 09:30 + 1mo = Feb 29 09:30 (leap year clamp).
        assert_eq!(dur.add_to_stamp(t, US).unwrap(), stamp(2024, 2, 29, 9, 30, US));
    }

    #[test]
    fn add_fixed_spans() {
        let dur = CalendarDuration::parse("1h").unwrap();
        let t = stamp(2000, 1, 5, 0, 0, US);
        assert_eq!(dur.add_to_stamp(t, US).unwrap(), stamp(2000, 1, 5, 1, 0, US));
        let dur = CalendarDuration::parse("-1w").unwrap();
        assert_eq!(
            dur.add_to_stamp(t, US).unwrap(),
            stamp(1999, 12, 29, 0, 0, US)
        );
    }

    #[test]
    fn add_to_date_requires_whole_days() {
        let d = Date::from_ymd(2023, 4, 3).unwrap();
        let dur = CalendarDuration::parse("2d").unwrap();
        assert_eq!(
            dur.add_to_date(d).unwrap(),
            Date::from_ymd(2023, 4, 5).unwrap()
        );
        assert!(CalendarDuration::parse("1h").unwrap().add_to_date(d).is_err());
    }

    #[test]
    fn truncate_sub_daily() {
        let dur = CalendarDuration::parse("1h").unwrap();
        let t = stamp(2020, 6, 15, 14, 37, US);
        assert_eq!(
            dur.truncate_stamp(t, US).unwrap(),
            stamp(2020, 6, 15, 14, 0, US)
        );
        // Pre-epoch timestamps truncate downwards, not towards zero.
        let t = stamp(1969, 12, 31, 23, 59, US);
        assert_eq!(
            dur.truncate_stamp(t, US).unwrap(),
            stamp(1969, 12, 31, 23, 0, US)
        );
    }

    #[test]
    fn truncate_months_and_weeks() {
        let mo = CalendarDuration::parse("1mo").unwrap();
        let t = stamp(2024, 8, 24, 13, 0, US);
        assert_eq!(mo.truncate_stamp(t, US).unwrap(), stamp(2024, 8, 1, 0, 0, US));
        let w = CalendarDuration::parse("1w").unwrap();
        // 2024-08-24 is a Saturday; the week starts Monday 08-19.
        assert_eq!(w.truncate_stamp(t, US).unwrap(), stamp(2024, 8, 19, 0, 0, US));
    }

    #[test]
    fn ceil_matches_truncate_plus_one() {
        let mo = CalendarDuration::parse("1mo").unwrap();
        let t = stamp(2024, 8, 24, 0, 0, US);
        assert_eq!(mo.ceil_stamp(t, US).unwrap(), stamp(2024, 9, 1, 0, 0, US));
        // Already aligned: unchanged.
        let aligned = stamp(2024, 10, 1, 0, 0, US);
        assert_eq!(mo.ceil_stamp(aligned, US).unwrap(), aligned);
    }

    #[test]
    fn truncate_rejects_mixed_windows() {
        let dur = CalendarDuration::parse("1mo1d").unwrap();
        assert!(dur.truncate_stamp(0, US).is_err());
        assert!(CalendarDuration::parse("-1h")
            .unwrap()
            .truncate_stamp(0, US)
            .is_err());
    }
}
