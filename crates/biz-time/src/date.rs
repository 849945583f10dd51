//! `Date` — a calendar date as a day count since the Unix epoch.
//!
//! Day 0 is **1970-01-01**; earlier dates have negative serials. The valid
//! range is 1900-01-01 to 2262-12-31, wide enough to round-trip any
//! nanosecond-resolution timestamp.

use crate::weekday::{weekday_of, Weekday};
use biz_core::errors::{Error, Result};
use biz_core::EpochDay;

/// A calendar date represented as days since 1970-01-01.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Date(EpochDay);

impl Date {
    /// Minimum valid date: 1900-01-01.
    pub const MIN: Date = Date(-25_567);

    /// Maximum valid date: 2262-12-31.
    pub const MAX: Date = Date(107_015);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from an epoch-day serial.
    ///
    /// Returns an error if the serial is outside the supported range.
    pub fn from_serial(serial: EpochDay) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!(
                "epoch day {serial} outside supported range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2262).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2262]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the epoch-day serial.
    pub fn serial(&self) -> EpochDay {
        self.0
    }

    /// Return the year (1900–2262).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return (year, month, day) in one decomposition.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the weekday. Day 0 (1970-01-01) is a Thursday.
    pub fn weekday(&self) -> Weekday {
        weekday_of(self.0)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days. Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        Self::from_serial(self.0 + n)
    }

    /// Advance by `n` calendar months, clamping the day-of-month to the end
    /// of the target month (Jan 31 + 1 month = Feb 28/29).
    pub fn add_months(self, n: i32) -> Result<Self> {
        let (y, m, d) = ymd_from_serial(self.0);
        let total_months = y as i32 * 12 + (m as i32 - 1) + n;
        let new_y = total_months.div_euclid(12);
        let new_m = (total_months.rem_euclid(12) + 1) as u8;
        if !(1900..=2262).contains(&new_y) {
            return Err(Error::Date(format!("year {new_y} out of range")));
        }
        let new_y = new_y as u16;
        let new_d = d.min(days_in_month(new_y, new_m));
        Ok(Date(serial_from_ymd(new_y, new_m, new_d)))
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }
}

/// Count the whole calendar months between `left` and `right`.
///
/// The delta is the largest `n` (by magnitude) such that advancing `left` by
/// `n` months does not overshoot `right`; negative when `right` is before
/// `left`. Day-of-month clamping applies, so
/// `months_between(Jan 31, Feb 28)` is 1.
pub fn months_between(left: Date, right: Date) -> i32 {
    let mut n: i32 = 0;
    if right >= left {
        if right.year() + 1 > left.year() {
            n = (right.year() as i32 - left.year() as i32 - 1) * 12;
        }
        while left.add_months(n + 1).map(|d| d <= right).unwrap_or(false) {
            n += 1;
        }
    } else {
        if left.year() + 1 > right.year() {
            n = -(left.year() as i32 - right.year() as i32 - 1) * 12;
        }
        while left.add_months(n - 1).map(|d| d >= right).unwrap_or(false) {
            n -= 1;
        }
    }
    n
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition out of range")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction out of range")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.add_days(rhs).expect("date addition out of range");
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Leap years in `[1, year)`.
fn leap_years_before(year: i32) -> i32 {
    let y = year - 1;
    y / 4 - y / 100 + y / 400
}

/// Convert (year, month, day) to an epoch-day serial (day 0 = 1970-01-01).
fn serial_from_ymd(year: u16, month: u8, day: u8) -> EpochDay {
    let y = year as i32;
    let mut serial = (y - 1970) * 365 + leap_years_before(y) - leap_years_before(1970);
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32 - 1
}

/// Decompose an epoch-day serial into (year, month, day).
fn ymd_from_serial(serial: EpochDay) -> (u16, u8, u8) {
    debug_assert!(serial >= Date::MIN.0 && serial <= Date::MAX.0);
    // Estimate the year, then adjust until the serial falls within it.
    let mut y = (1970 + serial / 365) as u16;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1; // 1-based day of year
    let mut m = 1u8;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch() {
        let d = Date::from_ymd(1970, 1, 1).unwrap();
        assert_eq!(d.serial(), 0);
        assert_eq!(d.weekday(), Weekday::Thursday);
    }

    #[test]
    fn roundtrip() {
        let dates = [
            (1900, 1, 1),
            (1969, 12, 31),
            (1970, 1, 1),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2023, 6, 15),
            (2262, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.ymd(), (y, m, d), "roundtrip for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn known_serials() {
        assert_eq!(Date::from_ymd(1969, 12, 31).unwrap().serial(), -1);
        // 2000-01-03 (the classic Monday) is epoch day 10959.
        assert_eq!(Date::from_ymd(2000, 1, 3).unwrap().serial(), 10_959);
        assert_eq!(Date::from_ymd(1900, 1, 1).unwrap(), Date::MIN);
        assert_eq!(Date::from_ymd(2262, 12, 31).unwrap(), Date::MAX);
    }

    #[test]
    fn weekdays() {
        // 2024-01-01 is a Monday, 2000-01-01 a Saturday.
        assert_eq!(Date::from_ymd(2024, 1, 1).unwrap().weekday(), Weekday::Monday);
        assert_eq!(
            Date::from_ymd(2000, 1, 1).unwrap().weekday(),
            Weekday::Saturday
        );
    }

    #[test]
    fn add_months_clamps() {
        let d = Date::from_ymd(2023, 1, 31).unwrap();
        let next = d.add_months(1).unwrap();
        assert_eq!(next.ymd(), (2023, 2, 28));
        // Leap February keeps the 29th.
        let d = Date::from_ymd(2024, 1, 31).unwrap();
        assert_eq!(d.add_months(1).unwrap().ymd(), (2024, 2, 29));
        // Backwards across a year boundary.
        let d = Date::from_ymd(2024, 3, 31).unwrap();
        assert_eq!(d.add_months(-13).unwrap().ymd(), (2023, 2, 28));
    }

    #[test]
    fn out_of_range() {
        assert!(Date::from_ymd(1899, 12, 31).is_err());
        assert!(Date::from_serial(Date::MAX.serial() + 1).is_err());
        assert!(Date::MAX.add_days(1).is_err());
    }

    #[test]
    fn month_deltas() {
        let d = |y, m, dd| Date::from_ymd(y, m, dd).unwrap();
        assert_eq!(months_between(d(2023, 1, 1), d(2023, 4, 1)), 3);
        assert_eq!(months_between(d(2023, 4, 1), d(2023, 1, 1)), -3);
        assert_eq!(months_between(d(2023, 1, 31), d(2023, 2, 28)), 1);
        // Not a whole month yet.
        assert_eq!(months_between(d(2023, 1, 15), d(2023, 2, 14)), 0);
        assert_eq!(months_between(d(2023, 1, 1), d(2023, 1, 1)), 0);
        // Spanning several years.
        assert_eq!(months_between(d(2020, 6, 15), d(2024, 6, 15)), 48);
    }

    #[test]
    fn end_of_month() {
        let d = Date::from_ymd(2024, 2, 15).unwrap();
        assert_eq!(d.end_of_month().ymd(), (2024, 2, 29));
    }
}
