//! Integration tests for the business-day engines: concrete scenarios plus
//! the algebraic properties the engines must satisfy, checked against a
//! one-day-at-a-time reference walk.

use biz_time::{BusinessCalendar, Date, HolidaySet, Roll, WeekMask};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn weekend_only() -> BusinessCalendar {
    BusinessCalendar::new(WeekMask::standard(), HolidaySet::empty())
}

/// England & Wales bank holidays, 2023.
fn england_2023() -> HolidaySet {
    HolidaySet::new([
        date(2023, 1, 2),
        date(2023, 4, 7),
        date(2023, 4, 10),
        date(2023, 5, 1),
        date(2023, 5, 8),
        date(2023, 5, 29),
        date(2023, 8, 28),
        date(2023, 12, 25),
        date(2023, 12, 26),
    ])
}

/// Reference implementation: advance one calendar day at a time.
fn naive_advance(cal: &BusinessCalendar, start: Date, n: i32) -> Date {
    let step: i32 = if n >= 0 { 1 } else { -1 };
    let mut remaining = n.abs();
    let mut d = start;
    while remaining > 0 {
        d = d + step;
        if cal.is_business_day(d) {
            remaining -= 1;
        }
    }
    d
}

/// Reference implementation: count business days in the half-open interval.
fn naive_count(cal: &BusinessCalendar, start: Date, end: Date) -> i32 {
    if start > end {
        return -naive_count(cal, end, start);
    }
    let mut count = 0;
    let mut d = start;
    while d < end {
        if cal.is_business_day(d) {
            count += 1;
        }
        d = d + 1;
    }
    count
}

#[test]
fn advance_around_the_millennium() {
    let cal = weekend_only();
    let mon = date(2000, 1, 3);
    assert_eq!(cal.advance(mon, 1, Roll::Raise).unwrap(), date(2000, 1, 4));
    assert_eq!(cal.advance(mon, 2, Roll::Raise).unwrap(), date(2000, 1, 5));
    assert_eq!(cal.advance(mon, -1, Roll::Raise).unwrap(), date(1999, 12, 31));
}

#[test]
fn advance_through_a_real_holiday_calendar() {
    let cal = BusinessCalendar::new(WeekMask::standard(), england_2023());
    // Thursday before Easter 2023 + 1bd lands after Good Friday, the
    // weekend, and Easter Monday.
    assert_eq!(
        cal.advance(date(2023, 4, 6), 1, Roll::Raise).unwrap(),
        date(2023, 4, 11)
    );
    // Five business days across the early-May bank holiday.
    assert_eq!(
        cal.advance(date(2023, 4, 28), 5, Roll::Raise).unwrap(),
        date(2023, 5, 9)
    );
}

#[test]
fn new_years_day_2000_is_excluded_twice_over() {
    // A Saturday that is also a listed holiday: both exclusion paths agree
    // and the holiday contributes nothing extra to counts.
    let with_holiday =
        BusinessCalendar::new(WeekMask::standard(), HolidaySet::new([date(2000, 1, 1)]));
    assert!(!with_holiday.is_business_day(date(2000, 1, 1)));
    assert!(!weekend_only().is_business_day(date(2000, 1, 1)));
    assert_eq!(
        with_holiday.count_between(date(1999, 12, 27), date(2000, 1, 10)),
        weekend_only().count_between(date(1999, 12, 27), date(2000, 1, 10)),
    );
}

#[test]
fn count_reference_values() {
    let cal = weekend_only();
    assert_eq!(cal.count_between(date(2000, 1, 3), date(2000, 1, 8)), 5);
    assert_eq!(cal.count_between(date(2000, 1, 8), date(2000, 1, 3)), -5);
    let uk = BusinessCalendar::new(WeekMask::standard(), england_2023());
    // December 2023: 25th and 26th fall Mon/Tue.
    assert_eq!(uk.count_between(date(2023, 12, 22), date(2023, 12, 29)), 3);
}

#[test]
fn all_weekend_mask_is_rejected() {
    let all = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    assert!(WeekMask::from_weekend(&all).is_err());
}

proptest! {
    #[test]
    fn advance_matches_the_naive_walk(
        serial in 8_000i32..14_000,
        n in -130i32..130,
        holidays in proptest::collection::vec(8_000i32..15_000, 0..12),
    ) {
        let cal = BusinessCalendar::new(
            WeekMask::standard(),
            HolidaySet::from_days(holidays),
        );
        let start = Date::from_serial(serial).unwrap();
        prop_assume!(cal.is_business_day(start));
        let fast = cal.advance(start, n, Roll::Raise).unwrap();
        prop_assert_eq!(fast, naive_advance(&cal, start, n));
    }

    #[test]
    fn count_is_antisymmetric_and_matches_the_walk(
        a in 8_000i32..14_000,
        b in 8_000i32..14_000,
        holidays in proptest::collection::vec(8_000i32..14_000, 0..12),
    ) {
        let cal = BusinessCalendar::new(
            WeekMask::standard(),
            HolidaySet::from_days(holidays),
        );
        let (a, b) = (Date::from_serial(a).unwrap(), Date::from_serial(b).unwrap());
        prop_assert_eq!(cal.count_between(a, b), -cal.count_between(b, a));
        prop_assert_eq!(cal.count_between(a, b), naive_count(&cal, a, b));
    }

    #[test]
    fn offsets_compose(
        serial in 9_000i32..12_000,
        m in -40i32..40,
        n in -40i32..40,
    ) {
        let cal = weekend_only();
        let start = Date::from_serial(serial).unwrap();
        prop_assume!(cal.is_business_day(start));
        let two_hops = cal
            .advance(cal.advance(start, m, Roll::Raise).unwrap(), n, Roll::Raise)
            .unwrap();
        let one_hop = cal.advance(start, m + n, Roll::Raise).unwrap();
        prop_assert_eq!(two_hops, one_hop);
    }

    #[test]
    fn roll_is_consistent(serial in 8_000i32..14_000) {
        let cal = BusinessCalendar::new(
            WeekMask::standard(),
            HolidaySet::new([date(2000, 1, 3), date(2001, 12, 25)]),
        );
        let d = Date::from_serial(serial).unwrap();
        let forward = cal.roll(d, Roll::Forward).unwrap();
        let backward = cal.roll(d, Roll::Backward).unwrap();
        prop_assert!(cal.is_business_day(forward));
        prop_assert!(cal.is_business_day(backward));
        prop_assert!(forward >= d);
        prop_assert!(backward <= d);
        // Nothing business-like sits strictly between d and the snap target.
        prop_assert_eq!(cal.count_between(d, forward), 0);
        if cal.is_business_day(d) {
            prop_assert_eq!(forward, d);
            prop_assert_eq!(backward, d);
            prop_assert_eq!(cal.advance(d, 0, Roll::Raise).unwrap(), d);
        } else {
            prop_assert!(cal.roll(d, Roll::Raise).is_err());
        }
    }
}
