//! # biz-time
//!
//! Business-day calendars, epoch-day date arithmetic, calendar durations,
//! and compound offset-string parsing.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `BusinessCalendar` — the offset / count / membership engine.
pub mod calendar;

/// `Date` — epoch-day date type.
pub mod date;

/// `CalendarDuration` — a compound calendar time span.
pub mod duration;

/// `HolidaySet` — sorted holiday day-offsets.
pub mod holiday;

/// Julian-date conversion.
pub mod julian;

/// `OffsetSpec` — compound offset-string parsing.
pub mod offset;

/// `Roll` — policy for non-business start dates.
pub mod roll;

/// `TimeScale` — sub-second timestamp resolutions.
pub mod scale;

/// `WeekMask` — which weekdays are business days.
pub mod weekmask;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::BusinessCalendar;
pub use date::{months_between, Date};
pub use duration::CalendarDuration;
pub use holiday::HolidaySet;
pub use offset::OffsetSpec;
pub use roll::Roll;
pub use scale::TimeScale;
pub use weekday::Weekday;
pub use weekmask::WeekMask;
