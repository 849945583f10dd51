//! Error types for bizdays.
//!
//! Every fallible operation in the workspace funnels into a single
//! `thiserror`-derived enum. A vectorized operation fails as a whole: the
//! first row-level error aborts the batch and is returned to the caller
//! unchanged.

use thiserror::Error;

/// The top-level error type used throughout bizdays.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A calendar configuration admits no business days at all.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A business-day offset was requested from a non-business start date
    /// under the `Raise` roll policy.
    #[error("{0} is not a business date; set a `roll` policy to adjust it")]
    NonBusinessStart(String),

    /// An offset string did not contain a parseable business-day token, or
    /// its residual calendar-duration part was unparseable.
    #[error("malformed offset string: {0}")]
    MalformedOffset(String),

    /// A local wall-clock time is ambiguous or non-existent in the target
    /// time zone. Surfaced unchanged from the zone-conversion collaborator.
    #[error("{0}")]
    AmbiguousTime(String),

    /// Date construction or arithmetic out of the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// Two columnar operands had incompatible (non-broadcastable) lengths.
    #[error("length mismatch: left has {left} rows, right has {right}")]
    LengthMismatch {
        /// Rows in the left operand.
        left: usize,
        /// Rows in the right operand.
        right: usize,
    },

    /// The operation is not defined for the given column type.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}

/// Shorthand `Result` type used throughout bizdays.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidConfiguration(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use biz_core::ensure;
/// fn at_least_one(n: usize) -> biz_core::errors::Result<usize> {
///     ensure!(n > 0, "expected at least one entry, got {n}");
///     Ok(n)
/// }
/// assert!(at_least_one(1).is_ok());
/// assert!(at_least_one(0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidConfiguration(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::InvalidOperation(...))` immediately.
///
/// # Example
/// ```
/// use biz_core::fail;
/// fn unsupported() -> biz_core::errors::Result<()> {
///     fail!("this column type is not supported");
/// }
/// assert!(unsupported().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::InvalidOperation(format!($($msg)*)))
    };
}
