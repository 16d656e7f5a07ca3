/// Date component separator (ISO 8601 format)
pub(crate) const DATE_SEPARATOR: char = '-';

/// Number of digits in the year field of a `YYYY-MM-DD` string
pub(crate) const YEAR_DIGITS: usize = 4;
/// Number of digits in the month and day fields of a `YYYY-MM-DD` string
pub(crate) const FIELD_DIGITS: usize = 2;

/// Months in a year
pub(crate) const MONTHS_PER_YEAR: i64 = 12;
/// Days in a week
pub const DAYS_PER_WEEK: u32 = 7;

/// Rows in a month grid. Six weeks always cover a month whatever weekday it starts on.
pub(crate) const GRID_ROWS: usize = 6;
/// Cells in a month grid
pub const GRID_CELLS: usize = GRID_ROWS * DAYS_PER_WEEK as usize;

/// A known Sunday used to generate weekday names in Sunday-first order.
pub(crate) const WEEKDAY_ANCHOR: chrono::NaiveDate = match chrono::NaiveDate::from_ymd_opt(1970, 1, 4) {
    Some(date) => date,
    None => panic!("1970-01-04 is a valid date"),
};

/// Locale used when the caller passes an empty or unknown identifier
pub const DEFAULT_LOCALE: chrono::Locale = chrono::Locale::POSIX;
