#![doc = include_str!("../README.md")]

mod calendar;
mod consts;
mod prelude;
#[cfg(test)]
mod test_utils;
mod types;

pub use calendar::{grid_start, month_grid, month_label, resolve_locale, weekday_labels};
pub use consts::{DAYS_PER_WEEK, DEFAULT_LOCALE, GRID_CELLS};
pub use types::{MonthLabelOptions, MonthStyle, WeekStart, WeekdayFormat, YearStyle};

use crate::consts::{DATE_SEPARATOR, FIELD_DIGITS, MONTHS_PER_YEAR, YEAR_DIGITS};
use crate::prelude::*;
use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Weekday};
use std::str::FromStr;

/// A civil date with no time of day.
///
/// Always holds a valid calendar date; out-of-range components passed to
/// [`compose`] are absorbed by calendar overflow before one is built.
/// The month accessor is zero-based (January = 0). Ordering is year, then
/// month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into)]
#[display(fmt = "{:04}-{:02}-{:02}", "_0.year()", "_0.month()", "_0.day()")]
pub struct CalendarDate(NaiveDate);

/// Errors produced while building or shifting dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Empty date string")]
    EmptyInput,

    /// The string does not have the `YYYY-MM-DD` shape.
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidFormat(String),

    /// Components overflow to a date chrono cannot represent.
    #[error("Date out of range: year {year}, month {month}, day {day}")]
    OutOfRange { year: i64, month: i64, day: i64 },

    /// Shifting a date by a number of days left the representable range.
    #[error("Date arithmetic overflow: {date} {days:+} days")]
    Overflow { date: CalendarDate, days: i64 },

    #[error("Invalid week start: {0} (must be 0 for Sunday or 1 for Monday)")]
    InvalidWeekStart(u8),
}

/// Input accepted by [`normalize`]: a host date value or a `YYYY-MM-DD` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput<'a> {
    Native(NaiveDateTime),
    Text(&'a str),
}

impl From<NaiveDateTime> for DateInput<'_> {
    fn from(value: NaiveDateTime) -> Self {
        Self::Native(value)
    }
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(value: NaiveDate) -> Self {
        Self::Native(value.and_time(NaiveTime::MIN))
    }
}

impl From<CalendarDate> for DateInput<'_> {
    fn from(value: CalendarDate) -> Self {
        value.0.into()
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl CalendarDate {
    /// Builds a date from components with calendar overflow, see [`compose`].
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result is not representable.
    pub fn new(year: i64, month: i64, day: i64) -> Result<Self, DateError> {
        compose(year, month, day)
    }

    #[inline]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Zero-based month (January = 0)
    #[inline]
    pub fn month(self) -> u32 {
        self.0.month0()
    }

    /// Day of month starting at 1
    #[inline]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    #[inline]
    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the underlying chrono date
    #[inline]
    pub const fn naive(self) -> NaiveDate {
        self.0
    }

    /// Number of days in this date's month
    pub fn days_in_month(self) -> u32 {
        u32::from(self.0.num_days_in_month())
    }
}

impl From<NaiveDateTime> for CalendarDate {
    fn from(value: NaiveDateTime) -> Self {
        Self(value.date())
    }
}

/// Takes the calendar date in the value's own timezone.
impl<Tz: TimeZone> From<DateTime<Tz>> for CalendarDate {
    fn from(value: DateTime<Tz>) -> Self {
        Self(value.date_naive())
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses exactly `YYYY-MM-DD` (four digits, dash, two digits, dash, two digits).
    /// Only the shape is checked; month and day values overflow as in [`compose`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = s.split(DATE_SEPARATOR).collect();
        let shape_ok = parts.len() == 3
            && parts
                .iter()
                .zip([YEAR_DIGITS, FIELD_DIGITS, FIELD_DIGITS])
                .all(|(part, width)| part.len() == width && part.bytes().all(|b| b.is_ascii_digit()));
        if !shape_ok {
            return Err(DateError::InvalidFormat(s.to_owned()));
        }

        let year = Self::parse_field(parts[0])?;
        let month = Self::parse_field(parts[1])?;
        let day = Self::parse_field(parts[2])?;

        compose(year, month - 1, day)
    }
}

impl CalendarDate {
    /// Helper to parse a digit-only field with better error messages
    fn parse_field(s: &str) -> Result<i64, DateError> {
        s.parse::<i64>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }

    /// Parses the `Display` form back: a signed year of any width, then
    /// two-digit month and day. Components must already form a valid date.
    fn parse_display(s: &str) -> Result<Self, DateError> {
        let invalid = || DateError::InvalidFormat(s.to_owned());

        let (negative, rest) = match s.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let parts: Vec<&str> = rest.split(DATE_SEPARATOR).collect();
        let shape_ok = parts.len() == 3
            && !parts[0].is_empty()
            && parts[1].len() == FIELD_DIGITS
            && parts[2].len() == FIELD_DIGITS
            && parts.iter().all(|part| part.bytes().all(|b| b.is_ascii_digit()));
        if !shape_ok {
            return Err(invalid());
        }

        let year = parts[0].parse::<i32>().map_err(|_| invalid())?;
        let year = if negative { -year } else { year };
        let month = parts[1].parse::<u32>().map_err(|_| invalid())?;
        let day = parts[2].parse::<u32>().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_display(&s).map_err(serde::de::Error::custom)
    }
}

// --- helpers ---

fn shift_days(date: NaiveDate, n: i64) -> Option<NaiveDate> {
    let days = Days::new(n.unsigned_abs());
    if n >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    }
}

/// Extracts the calendar date from a date value, dropping any time of day.
pub fn decompose(date: impl Into<CalendarDate>) -> CalendarDate {
    date.into()
}

/// Builds a date from a year, a zero-based month and a day of month.
///
/// Components outside their usual range roll over the way calendar
/// arithmetic does: month 12 is January of the next year, month -1 is
/// December of the previous year, day 0 is the last day of the previous
/// month and day 32 of January is February 1.
///
/// # Errors
/// Returns `DateError::OutOfRange` if the result is not representable.
pub fn compose(year: i64, month: i64, day: i64) -> Result<CalendarDate, DateError> {
    let out_of_range = || DateError::OutOfRange { year, month, day };

    let total_months = year
        .checked_mul(MONTHS_PER_YEAR)
        .and_then(|months| months.checked_add(month))
        .ok_or_else(out_of_range)?;
    let y = i32::try_from(total_months.div_euclid(MONTHS_PER_YEAR)).map_err(|_| out_of_range())?;
    let m = u32::try_from(total_months.rem_euclid(MONTHS_PER_YEAR)).map_err(|_| out_of_range())?;

    let first = NaiveDate::from_ymd_opt(y, m + 1, 1).ok_or_else(out_of_range)?;
    let offset = day.checked_sub(1).ok_or_else(out_of_range)?;
    shift_days(first, offset)
        .map(CalendarDate)
        .ok_or_else(out_of_range)
}

/// Normalizes a heterogeneous date input to a calendar date.
///
/// Returns `None` for absent input, an empty string or a string that is not
/// exactly `YYYY-MM-DD`. Host date values lose their time of day.
pub fn normalize(input: Option<DateInput<'_>>) -> Option<CalendarDate> {
    match input? {
        DateInput::Native(value) => Some(value.into()),
        DateInput::Text(s) => match s.parse() {
            Ok(date) => Some(date),
            Err(err) => {
                log::trace!("Rejected date input {s:?}: {err}");
                None
            },
        },
    }
}

/// Formats as `YYYY-MM-DD`, independent of locale.
pub fn format_ymd(date: impl Into<CalendarDate>) -> String {
    date.into().to_string()
}

/// Returns the date `n` days after `date` (before it when `n` is negative).
///
/// # Errors
/// Returns `DateError::Overflow` if the result is not representable.
pub fn add_days(date: impl Into<CalendarDate>, n: i64) -> Result<CalendarDate, DateError> {
    let date = date.into();
    shift_days(date.0, n)
        .map(CalendarDate)
        .ok_or(DateError::Overflow { date, days: n })
}

/// True when both dates are present and fall on the same calendar day.
pub fn same_day(a: Option<CalendarDate>, b: Option<CalendarDate>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a == b)
}

/// Checks whether `date` lies between `min` and `max` at calendar-day granularity.
/// A missing bound leaves that side open. With `inclusive` the bounds themselves
/// count as inside.
pub fn is_between(
    date: impl Into<CalendarDate>,
    min: Option<CalendarDate>,
    max: Option<CalendarDate>,
    inclusive: bool,
) -> bool {
    let date = date.into();
    let above_min = min.is_none_or(|lo| if inclusive { date >= lo } else { date > lo });
    let below_max = max.is_none_or(|hi| if inclusive { date <= hi } else { date < hi });
    above_min && below_max
}

/// Clamps `date` into `[min, max]`.
///
/// Unlike [`is_between`] this compares the full values, so a `NaiveDateTime`
/// later on the same day as `max` is replaced by `max`.
pub fn clamp_date<T: PartialOrd>(date: T, min: Option<T>, max: Option<T>) -> T {
    if let Some(lo) = min.filter(|lo| date < *lo) {
        return lo;
    }
    if let Some(hi) = max.filter(|hi| date > *hi) {
        return hi;
    }
    date
}

/// First day of the month containing `date`.
pub fn start_of_month(date: impl Into<CalendarDate>) -> CalendarDate {
    let date = date.into();
    // stays within the same month, cannot overflow
    CalendarDate(date.0 - Days::new(u64::from(date.0.day0())))
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: impl Into<CalendarDate>) -> u32 {
    date.into().days_in_month()
}
