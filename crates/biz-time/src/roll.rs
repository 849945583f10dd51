//! `Roll` — policy for offset requests that start on a non-business day.

use biz_core::errors::{Error, Result};

/// How to handle a business-day offset whose start date is not itself a
/// business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Roll {
    /// Fail the operation. Offsetting from a non-business day is undefined.
    #[default]
    Raise,
    /// Snap forward to the next business day before applying the offset.
    Forward,
    /// Snap backward to the previous business day before applying the offset.
    Backward,
}

impl std::str::FromStr for Roll {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "raise" => Ok(Roll::Raise),
            "forward" => Ok(Roll::Forward),
            "backward" => Ok(Roll::Backward),
            _ => Err(Error::InvalidConfiguration(format!(
                "`roll` must be one of 'raise', 'forward' or 'backward'; found '{s}'"
            ))),
        }
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Roll::Raise => "raise",
            Roll::Forward => "forward",
            Roll::Backward => "backward",
        };
        write!(f, "{s}")
    }
}
