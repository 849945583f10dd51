//! `BusinessCalendar` — the business-day offset, count, and membership
//! engine.
//!
//! A calendar pairs a [`WeekMask`] with a [`HolidaySet`]. A day is a
//! business day when its weekday bit is set in the mask and it is not a
//! holiday. Both inputs are immutable after construction, so one calendar
//! may be read concurrently by every row of a vectorized batch.

use crate::date::Date;
use crate::holiday::HolidaySet;
use crate::roll::Roll;
use crate::weekday::weekday_of;
use crate::weekmask::WeekMask;
use biz_core::errors::{Error, Result};
use biz_core::EpochDay;

/// A business-day calendar: weekend pattern plus explicit holidays.
#[derive(Debug, Clone)]
pub struct BusinessCalendar {
    mask: WeekMask,
    /// All supplied holidays; answers membership queries.
    holidays: HolidaySet,
    /// Holidays on business weekdays only; drives the counting arithmetic.
    /// A weekend holiday is excluded by the mask alone, and the whole-week
    /// skip below must not correct for it a second time.
    working: HolidaySet,
    days_per_week: i32,
}

impl BusinessCalendar {
    /// Create a calendar from a weekmask and holiday set.
    pub fn new(mask: WeekMask, holidays: HolidaySet) -> Self {
        let working = holidays.retain_business(&mask);
        let days_per_week = mask.business_days_per_week();
        BusinessCalendar {
            mask,
            holidays,
            working,
            days_per_week,
        }
    }

    /// The weekmask this calendar was built with.
    pub fn weekmask(&self) -> &WeekMask {
        &self.mask
    }

    /// The full holiday set this calendar was built with.
    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    /// Return `true` if `date` is a business day: weekday bit set and not a
    /// holiday.
    pub fn is_business_day(&self, date: Date) -> bool {
        self.is_business_serial(date.serial())
    }

    fn is_business_serial(&self, day: EpochDay) -> bool {
        self.mask.is_business(weekday_of(day)) && !self.holidays.contains(day)
    }

    /// Snap `date` to a business day according to the roll policy.
    ///
    /// `Raise` fails when `date` is not already a business day; `Forward`
    /// and `Backward` walk one calendar day at a time to the nearest
    /// business day in that direction.
    pub fn roll(&self, date: Date, roll: Roll) -> Result<Date> {
        if self.is_business_day(date) {
            return Ok(date);
        }
        match roll {
            Roll::Raise => Err(Error::NonBusinessStart(date.to_string())),
            Roll::Forward => {
                let mut day = date.serial();
                while !self.is_business_serial(day) {
                    day += 1;
                }
                Date::from_serial(day)
            }
            Roll::Backward => {
                let mut day = date.serial();
                while !self.is_business_serial(day) {
                    day -= 1;
                }
                Date::from_serial(day)
            }
        }
    }

    /// Advance `start` by `n` business days.
    ///
    /// The start is first rolled per `roll`; a zero offset returns the
    /// rolled date unchanged. Whole weeks are skipped in one step and the
    /// holidays inside the skipped span are re-added to the remaining
    /// offset, so cost is O(days-per-week + holidays) per call rather than
    /// O(|n|); results are identical to a one-day-at-a-time walk.
    pub fn advance(&self, start: Date, n: i32, roll: Roll) -> Result<Date> {
        let mut day = self.roll(start, roll)?.serial();
        let dpw = self.days_per_week;
        let mut offset = n;

        if offset > 0 {
            let begin = day;
            day = self.skip_weeks(day, offset)?;
            offset %= dpw;
            // Holidays consumed by the skipped span, (begin, day].
            offset += self.working.count_in_range(begin + 1, day + 1) as i32;
            while offset > 0 {
                day += 1;
                if self.is_working_serial(day) {
                    offset -= 1;
                }
            }
        } else if offset < 0 {
            let begin = day;
            day = self.skip_weeks(day, offset)?;
            offset %= dpw;
            // Holidays inside the skipped span, [day, begin).
            offset -= self.working.count_in_range(day, begin) as i32;
            while offset < 0 {
                day -= 1;
                if self.is_working_serial(day) {
                    offset += 1;
                }
            }
        }

        Date::from_serial(day)
    }

    /// Count business days in the half-open interval between `start` and
    /// `end`.
    ///
    /// For `start <= end` this counts business days in `[start, end)`; for
    /// reversed arguments the count of `[end, start)` is negated, so
    /// `count_between(a, b) == -count_between(b, a)` always holds. Neither
    /// endpoint needs to be a business day.
    pub fn count_between(&self, start: Date, end: Date) -> i32 {
        let swapped = start > end;
        let (mut s, e) = if swapped {
            (end.serial() + 1, start.serial() + 1)
        } else {
            (start.serial(), end.serial())
        };

        let mut count = -(self.working.count_in_range(s, e) as i32);
        let whole_weeks = (e - s) / 7;
        count += whole_weeks * self.days_per_week;
        s += whole_weeks * 7;

        let mut wd = weekday_of(s);
        while s < e {
            if self.mask.is_business(wd) {
                count += 1;
            }
            s += 1;
            wd = wd.succ();
        }

        if swapped {
            -count
        } else {
            count
        }
    }

    /// Weekday bit set and not in the weekend-filtered holiday list.
    /// Equivalent to `is_business_serial`: a weekend holiday already fails
    /// the mask check.
    fn is_working_serial(&self, day: EpochDay) -> bool {
        self.mask.is_business(weekday_of(day)) && !self.working.contains(day)
    }

    /// Jump the whole weeks contained in `offset` business days, erroring
    /// out instead of wrapping when an extreme offset would leave the
    /// representable date range.
    fn skip_weeks(&self, day: EpochDay, offset: i32) -> Result<EpochDay> {
        let target = day as i64 + offset as i64 / self.days_per_week as i64 * 7;
        if target < Date::MIN.serial() as i64 || target > Date::MAX.serial() as i64 {
            return Err(Error::Date(format!(
                "business-day offset lands on epoch day {target}, outside the supported range"
            )));
        }
        Ok(target as EpochDay)
    }
}
