//! Whole-month deltas between two date columns.

use crate::broadcast::try_binary_elementwise;
use crate::temporal::Temporal;
use crate::vector::Vector;
use biz_core::errors::Result;
use biz_core::fail;
use biz_time::{months_between, Date};

/// Count, per row, the whole calendar months from `start` to `end`,
/// negative when `end` is earlier.
pub fn month_delta(start: &Temporal, end: &Temporal) -> Result<Vector<i32>> {
    let (Temporal::Days(start), Temporal::Days(end)) = (start, end) else {
        fail!(
            "month_delta only works on Date columns, got {} and {}; cast to Date first",
            start.type_name(),
            end.type_name()
        )
    };
    try_binary_elementwise(start, end, |a, b| {
        Ok(months_between(Date::from_serial(a)?, Date::from_serial(b)?))
    })
}
