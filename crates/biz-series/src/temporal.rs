//! `Temporal` — a date or timestamp column.

use crate::vector::Vector;
use biz_time::TimeScale;

/// A temporal column: calendar days or timestamps at a given resolution.
///
/// The zone, when present, names the IANA time zone the timestamps are
/// interpreted in; the stored values always count from the epoch in UTC.
#[derive(Clone, Debug, PartialEq)]
pub enum Temporal {
    /// Epoch-day values — a Date column.
    Days(Vector<i32>),
    /// Epoch timestamps — a Datetime column.
    Stamps {
        /// The timestamp values.
        data: Vector<i64>,
        /// Resolution the values count in.
        scale: TimeScale,
        /// Optional IANA time-zone name.
        zone: Option<String>,
    },
}

impl Temporal {
    /// A Date column from epoch-day options.
    pub fn days(rows: Vec<Option<i32>>) -> Self {
        Temporal::Days(Vector::from_options(rows))
    }

    /// A naive Datetime column from timestamp options.
    pub fn stamps(rows: Vec<Option<i64>>, scale: TimeScale) -> Self {
        Temporal::Stamps {
            data: Vector::from_options(rows),
            scale,
            zone: None,
        }
    }

    /// A zone-aware Datetime column from timestamp options.
    pub fn stamps_in_zone(rows: Vec<Option<i64>>, scale: TimeScale, zone: &str) -> Self {
        Temporal::Stamps {
            data: Vector::from_options(rows),
            scale,
            zone: Some(zone.to_string()),
        }
    }

    /// Row count.
    pub fn len(&self) -> usize {
        match self {
            Temporal::Days(v) => v.len(),
            Temporal::Stamps { data, .. } => data.len(),
        }
    }

    /// Return `true` if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A short name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Temporal::Days(_) => "Date",
            Temporal::Stamps { .. } => "Datetime",
        }
    }
}
