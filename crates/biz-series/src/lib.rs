//! # biz-series
//!
//! Columnar vectors with validity bitmaps, scalar/column broadcasting, and
//! the vectorized business-calendar operations.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Bit-packed validity bitmap.
pub mod bitmap;

/// Element-wise evaluation with scalar broadcasting.
pub mod broadcast;

/// The vector operations.
pub mod ops;

/// `Temporal` — a date or timestamp column.
pub mod temporal;

/// `Vector` — typed column with optional validity.
pub mod vector;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use bitmap::Bitmap;
pub use ops::advance::advance_workdays;
pub use ops::ceil::ceil_temporal;
pub use ops::count::workday_count;
pub use ops::ewma::ewma_by_time;
pub use ops::julian::to_julian_date;
pub use ops::lookback::arg_previous_greater;
pub use ops::month_delta::month_delta;
pub use ops::offset::{apply_duration, offset_by, offset_by_column};
pub use ops::workday::is_workday;
pub use ops::zone::{from_local_datetime, to_local_datetime, Ambiguous};
pub use temporal::Temporal;
pub use vector::{TextColumn, Vector};
