//! `WeekMask` — which weekdays are business days.

use crate::weekday::Weekday;
use biz_core::ensure;
use biz_core::errors::{Error, Result};

/// A 7-slot mask indexed by ISO weekday, `true` meaning "business day".
///
/// Built once per operation from a list of weekend-day names and immutable
/// thereafter. At least one slot is always `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekMask([bool; 7]);

impl WeekMask {
    /// The canonical five-on/two-off mask (Saturday and Sunday off).
    pub fn standard() -> Self {
        WeekMask([true, true, true, true, true, false, false])
    }

    /// Build a mask from a list of weekend day names (`"Mon"` … `"Sun"`).
    ///
    /// The literal pair `["Sat", "Sun"]` short-circuits to the canonical
    /// mask without name lookup. Unknown names and all-weekend inputs are
    /// rejected.
    pub fn from_weekend<S: AsRef<str>>(weekend: &[S]) -> Result<Self> {
        if let [a, b] = weekend {
            if a.as_ref() == "Sat" && b.as_ref() == "Sun" {
                return Self::standard().validated();
            }
        }
        let mut mask = [true; 7];
        for name in weekend {
            let day = Weekday::from_short_name(name.as_ref()).ok_or_else(|| {
                Error::InvalidConfiguration(format!(
                    "unknown weekday name '{}'; expected one of Mon..Sun",
                    name.as_ref()
                ))
            })?;
            mask[day.ordinal() as usize - 1] = false;
        }
        WeekMask(mask).validated()
    }

    /// Build a mask directly from a boolean array (`true` = business day).
    pub fn from_bools(mask: [bool; 7]) -> Result<Self> {
        WeekMask(mask).validated()
    }

    fn validated(self) -> Result<Self> {
        ensure!(
            self.0.iter().any(|&b| b),
            "at least one day of the week must be a business day"
        );
        Ok(self)
    }

    /// Return `true` if the given weekday is a business day.
    pub fn is_business(&self, weekday: Weekday) -> bool {
        self.0[weekday.ordinal() as usize - 1]
    }

    /// Number of business days per week under this mask.
    pub fn business_days_per_week(&self) -> i32 {
        self.0.iter().filter(|&&b| b).count() as i32
    }

    /// The underlying 7-slot boolean array.
    pub fn as_array(&self) -> &[bool; 7] {
        &self.0
    }
}
