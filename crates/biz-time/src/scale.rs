//! `TimeScale` — resolution of an integer timestamp.

/// The resolution a timestamp column counts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeScale {
    /// Milliseconds since the epoch.
    Milliseconds,
    /// Microseconds since the epoch.
    Microseconds,
    /// Nanoseconds since the epoch.
    Nanoseconds,
}

impl TimeScale {
    /// Timestamp units per second.
    pub fn per_second(&self) -> i64 {
        match self {
            TimeScale::Milliseconds => 1_000,
            TimeScale::Microseconds => 1_000_000,
            TimeScale::Nanoseconds => 1_000_000_000,
        }
    }

    /// Timestamp units per calendar day.
    pub fn per_day(&self) -> i64 {
        self.per_second() * 86_400
    }

    /// Nanoseconds per timestamp unit.
    pub fn nanos_per_unit(&self) -> i64 {
        match self {
            TimeScale::Milliseconds => 1_000_000,
            TimeScale::Microseconds => 1_000,
            TimeScale::Nanoseconds => 1,
        }
    }

    /// Convert a nanosecond span to this scale, truncating sub-unit parts.
    pub fn units_from_nanos(&self, nanos: i64) -> i64 {
        nanos / self.nanos_per_unit()
    }
}

impl std::fmt::Display for TimeScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TimeScale::Milliseconds => "ms",
            TimeScale::Microseconds => "us",
            TimeScale::Nanoseconds => "ns",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_day_factors() {
        assert_eq!(TimeScale::Milliseconds.per_day(), 86_400_000);
        assert_eq!(TimeScale::Microseconds.per_day(), 86_400_000_000);
        assert_eq!(TimeScale::Nanoseconds.per_day(), 86_400_000_000_000);
    }

    #[test]
    fn nanos_conversion_truncates() {
        assert_eq!(TimeScale::Milliseconds.units_from_nanos(1_999_999), 1);
        assert_eq!(TimeScale::Nanoseconds.units_from_nanos(42), 42);
    }
}
