//! `OffsetSpec` — parsing of compound offset strings with a business-day
//! component.
//!
//! An offset string mixes one `<n>bd` token with ordinary calendar-duration
//! tokens: `"2bd"`, `"-3bd"`, `"2bd1h"`, `"1h2bd"`. The business-day count
//! is always applied first; the remaining tokens form a residual
//! [`CalendarDuration`] applied to the result. Token order is irrelevant —
//! the split is by component, not by position.

use crate::duration::{CalendarDuration, Tokens};
use biz_core::errors::{Error, Result};

/// The two components of a compound offset string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetSpec {
    /// Signed business-day count.
    pub business_days: i64,
    /// Residual calendar duration; `None` on the pure-`Nbd` fast path, so
    /// callers can skip the duration step entirely.
    pub residual: Option<CalendarDuration>,
}

impl OffsetSpec {
    /// Parse an offset string into its business-day count and residual.
    ///
    /// Fails with [`Error::MalformedOffset`] when the string contains no
    /// `bd` token, more than one, or an unparseable residual.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();

        // Fast path: the whole string is one signed business-day token.
        if let Some(n) = parse_pure_business(trimmed) {
            return Ok(OffsetSpec {
                business_days: n,
                residual: None,
            });
        }

        let negative = trimmed.starts_with('-');
        let body = if negative { &trimmed[1..] } else { trimmed };
        if body.contains('-') {
            return Err(Error::MalformedOffset(format!(
                "'{s}': only a single leading minus sign is allowed"
            )));
        }

        let mut business_days: Option<i64> = None;
        let mut residual = String::new();
        let mut tokens = Tokens::new(body, trimmed)?;
        while let Some((n, unit)) = tokens.scan()? {
            if unit == "bd" {
                if business_days.is_some() {
                    return Err(Error::MalformedOffset(format!(
                        "'{s}': more than one business-day token"
                    )));
                }
                business_days = Some(n);
            } else {
                residual.push_str(&format!("{n}{unit}"));
            }
        }

        let Some(n) = business_days else {
            return Err(Error::MalformedOffset(format!(
                "'{s}': no business-day ('bd') component found"
            )));
        };

        let residual = if residual.is_empty() {
            None
        } else {
            let full = if negative {
                format!("-{residual}")
            } else {
                residual
            };
            Some(CalendarDuration::parse(&full)?)
        };

        Ok(OffsetSpec {
            business_days: if negative { -n } else { n },
            residual,
        })
    }
}

/// Parse a string that is exactly `-?<digits>bd`, or return `None`.
fn parse_pure_business(s: &str) -> Option<i64> {
    let body = s.strip_suffix("bd")?;
    let (negative, digits) = match body.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, body),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n: i64 = digits.parse().ok()?;
    Some(if negative { -n } else { n })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_business_fast_path() {
        let spec = OffsetSpec::parse("2bd").unwrap();
        assert_eq!(spec.business_days, 2);
        assert!(spec.residual.is_none());

        let spec = OffsetSpec::parse("-3bd").unwrap();
        assert_eq!(spec.business_days, -3);
        assert!(spec.residual.is_none());
    }

    #[test]
    fn compound_with_residual() {
        let spec = OffsetSpec::parse("2bd1h").unwrap();
        assert_eq!(spec.business_days, 2);
        let residual = spec.residual.unwrap();
        assert_eq!(residual.fixed_nanoseconds().unwrap(), 3_600_000_000_000);
    }

    #[test]
    fn component_split_ignores_token_order() {
        let a = OffsetSpec::parse("1h2bd").unwrap();
        let b = OffsetSpec::parse("2bd1h").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn leading_minus_negates_all_components() {
        let spec = OffsetSpec::parse("-3bd1h").unwrap();
        assert_eq!(spec.business_days, -3);
        assert_eq!(
            spec.residual.unwrap().fixed_nanoseconds().unwrap(),
            -3_600_000_000_000
        );
    }

    #[test]
    fn missing_business_token_is_an_error() {
        assert!(matches!(
            OffsetSpec::parse("1h"),
            Err(Error::MalformedOffset(_))
        ));
        assert!(OffsetSpec::parse("").is_err());
        assert!(OffsetSpec::parse("bd").is_err());
    }

    #[test]
    fn duplicate_business_token_is_an_error() {
        assert!(OffsetSpec::parse("1bd2bd").is_err());
    }

    #[test]
    fn interior_minus_is_an_error() {
        assert!(OffsetSpec::parse("1bd-1h").is_err());
    }
}
