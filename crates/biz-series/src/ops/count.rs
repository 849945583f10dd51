//! Business-day counts between two date columns.

use crate::broadcast::try_binary_elementwise;
use crate::temporal::Temporal;
use crate::vector::Vector;
use biz_core::errors::Result;
use biz_core::fail;
use biz_time::{BusinessCalendar, Date};

/// Count, per row, the business days in the half-open interval from `start`
/// to `end`. Reversed rows count negatively, so swapping the two columns
/// negates the result.
pub fn workday_count(
    start: &Temporal,
    end: &Temporal,
    calendar: &BusinessCalendar,
) -> Result<Vector<i32>> {
    let (Temporal::Days(start), Temporal::Days(end)) = (start, end) else {
        fail!(
            "workday_count only works on Date columns, got {} and {}; cast to Date first",
            start.type_name(),
            end.type_name()
        )
    };
    try_binary_elementwise(start, end, |a, b| {
        Ok(calendar.count_between(Date::from_serial(a)?, Date::from_serial(b)?))
    })
}
