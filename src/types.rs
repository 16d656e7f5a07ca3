use crate::DateError;
use crate::prelude::*;
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// First day of the week in a month view.
/// Determines both the weekday label rotation and the grid offset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[display(fmt = "sunday")]
    Sunday,
    #[default]
    #[display(fmt = "monday")]
    Monday,
}

impl WeekStart {
    /// Weekday index with Sunday = 0
    #[inline]
    pub const fn index(self) -> u32 {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
        }
    }

    pub const fn weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }
}

/// Accepts the numeric flag used by UI callers: 0 for Sunday, 1 for Monday.
impl TryFrom<u8> for WeekStart {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Sunday),
            1 => Ok(Self::Monday),
            other => Err(DateError::InvalidWeekStart(other)),
        }
    }
}

impl From<WeekStart> for u8 {
    fn from(start: WeekStart) -> Self {
        match start {
            WeekStart::Sunday => 0,
            WeekStart::Monday => 1,
        }
    }
}

impl From<WeekStart> for Weekday {
    fn from(start: WeekStart) -> Self {
        start.weekday()
    }
}

/// Width of a weekday label
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum WeekdayFormat {
    /// Single character, e.g. `M`
    #[display(fmt = "narrow")]
    Narrow,
    /// Abbreviated name, e.g. `Mon`
    #[default]
    #[display(fmt = "short")]
    Short,
    /// Full name, e.g. `Monday`
    #[display(fmt = "long")]
    Long,
}

/// How the month is rendered by [`crate::month_label`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthStyle {
    /// `October`
    Long,
    /// `Oct`
    Short,
    /// `10`
    Numeric,
    /// `09`
    #[serde(rename = "2-digit")]
    TwoDigit,
}

impl MonthStyle {
    const fn pattern(self) -> &'static str {
        match self {
            Self::Long => "%B",
            Self::Short => "%b",
            Self::Numeric => "%-m",
            Self::TwoDigit => "%m",
        }
    }

    const fn is_numeric(self) -> bool {
        matches!(self, Self::Numeric | Self::TwoDigit)
    }
}

/// How the year is rendered by [`crate::month_label`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearStyle {
    /// `2026`
    Numeric,
    /// `26`
    #[serde(rename = "2-digit")]
    TwoDigit,
}

impl YearStyle {
    const fn pattern(self) -> &'static str {
        match self {
            Self::Numeric => "%Y",
            Self::TwoDigit => "%y",
        }
    }
}

/// Fields rendered by [`crate::month_label`].
///
/// `Default` is the full month name followed by the numeric year and applies
/// only when no options are given. A deserialized record renders exactly the
/// fields it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthLabelOptions {
    #[serde(default)]
    pub month: Option<MonthStyle>,
    #[serde(default)]
    pub year:  Option<YearStyle>,
}

impl Default for MonthLabelOptions {
    fn default() -> Self {
        Self {
            month: Some(MonthStyle::Long),
            year:  Some(YearStyle::Numeric),
        }
    }
}

impl MonthLabelOptions {
    /// Strftime pattern for these options.
    /// With neither field selected the locale's own date representation is used.
    pub fn pattern(&self) -> String {
        match (self.month, self.year) {
            (Some(month), Some(year)) if month.is_numeric() => {
                format!("{}/{}", month.pattern(), year.pattern())
            },
            (Some(month), Some(year)) => format!("{} {}", month.pattern(), year.pattern()),
            (Some(month), None) => month.pattern().to_owned(),
            (None, Some(year)) => year.pattern().to_owned(),
            (None, None) => "%x".to_owned(),
        }
    }
}
