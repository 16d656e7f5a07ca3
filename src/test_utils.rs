//! Date constructors shared by the unit tests.

use crate::{CalendarDate, compose};
use chrono::{NaiveDateTime, NaiveTime};

/// Builds a date from a year, zero-based month and day of month.
pub fn date(year: i32, month0: u32, day: u32) -> CalendarDate {
    compose(i64::from(year), i64::from(month0), i64::from(day)).expect("valid test date")
}

/// Same as [`date`] with a time of day attached.
pub fn date_time(year: i32, month0: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    let time = NaiveTime::from_hms_opt(hour, minute, 0).expect("valid test time");
    date(year, month0, day).naive().and_time(time)
}
