//! # bizdays
//!
//! Business-calendar date arithmetic with vectorized, null-aware evaluation
//! over columnar data.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `biz-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use bizdays::time::{BusinessCalendar, Date, HolidaySet, Roll, WeekMask};
//!
//! let cal = BusinessCalendar::new(WeekMask::standard(), HolidaySet::empty());
//! let monday = Date::from_ymd(2000, 1, 3).unwrap();
//! let next = cal.advance(monday, 1, Roll::Raise).unwrap();
//! assert_eq!(next, Date::from_ymd(2000, 1, 4).unwrap());
//! ```
//!
//! Vectorized evaluation over columns with nulls lives in [`series`]:
//!
//! ```rust
//! use bizdays::series::{offset_by, Temporal};
//! use bizdays::time::{BusinessCalendar, HolidaySet, Roll, WeekMask};
//!
//! let cal = BusinessCalendar::new(WeekMask::standard(), HolidaySet::empty());
//! let dates = Temporal::days(vec![Some(10_959), None]); // 2000-01-03, null
//! let out = offset_by(&dates, "2bd", &cal, Roll::Raise).unwrap();
//! assert_eq!(out.len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and primitive aliases.
pub use biz_core as core;

/// Calendars, dates, durations, and offset parsing.
pub use biz_time as time;

/// Columnar vectors and the vectorized operations.
pub use biz_series as series;
