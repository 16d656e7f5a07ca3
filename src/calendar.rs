//! Month-view layout and locale-aware labels.
//!
//! Locale data comes from chrono's `unstable-locales` formatting. Locale
//! identifiers are plain strings such as `"en_US"` or `"de-DE"`; an empty
//! string selects [`DEFAULT_LOCALE`].

use chrono::{Days, Locale, NaiveTime, TimeZone, Utc};

use crate::consts::WEEKDAY_ANCHOR;
use crate::{
    CalendarDate, DAYS_PER_WEEK, DEFAULT_LOCALE, DateError, GRID_CELLS, MonthLabelOptions,
    WeekStart, WeekdayFormat, add_days, start_of_month,
};

/// Resolves a locale identifier, accepting `_` or `-` between language and region.
/// Empty or unknown identifiers resolve to [`DEFAULT_LOCALE`].
pub fn resolve_locale(identifier: &str) -> Locale {
    if identifier.is_empty() {
        return DEFAULT_LOCALE;
    }

    let normalized = identifier.replace('-', "_");
    Locale::try_from(normalized.as_str()).unwrap_or_else(|_| {
        log::warn!("Unknown locale '{identifier}', falling back to {DEFAULT_LOCALE:?}");
        DEFAULT_LOCALE
    })
}

fn format_localized(date: CalendarDate, pattern: &str, locale: Locale) -> String {
    let midnight = Utc.from_utc_datetime(&date.naive().and_time(NaiveTime::MIN));
    midnight.format_localized(pattern, locale).to_string()
}

/// Renders the month containing `date` for a heading, e.g. `"October 2026"`.
/// Which fields appear is controlled by `options`; names come from `locale`.
pub fn month_label(
    date: impl Into<CalendarDate>,
    locale: &str,
    options: &MonthLabelOptions,
) -> String {
    format_localized(date.into(), &options.pattern(), resolve_locale(locale))
}

/// Weekday names for the column headers of a month view.
///
/// The first label belongs to `week_start`; with [`WeekStart::Monday`] the
/// Sunday label is the last one.
pub fn weekday_labels(
    locale: &str,
    week_start: WeekStart,
    format: WeekdayFormat,
) -> [String; DAYS_PER_WEEK as usize] {
    let locale = resolve_locale(locale);
    let pattern = match format {
        WeekdayFormat::Long => "%A",
        WeekdayFormat::Short | WeekdayFormat::Narrow => "%a",
    };

    // Sunday-first, generated from a known Sunday
    let mut labels: [String; DAYS_PER_WEEK as usize] = std::array::from_fn(|i| {
        let day = CalendarDate::from(WEEKDAY_ANCHOR + Days::new(i as u64));
        let label = format_localized(day, pattern, locale);
        match format {
            WeekdayFormat::Narrow => label.chars().take(1).collect(),
            WeekdayFormat::Short | WeekdayFormat::Long => label,
        }
    });

    labels.rotate_left(week_start.index() as usize);
    labels
}

/// Date shown in the top-left cell of the month view containing `view_month_date`.
///
/// Always falls on `week_start` and within the six days up to and including
/// the first of the month.
///
/// # Errors
/// Returns `DateError::Overflow` only at the lower edge of the representable range.
pub fn grid_start(
    view_month_date: impl Into<CalendarDate>,
    week_start: WeekStart,
) -> Result<CalendarDate, DateError> {
    let first = start_of_month(view_month_date);
    let day_of_week = first.weekday().num_days_from_sunday();
    let offset = (day_of_week + DAYS_PER_WEEK - week_start.index()) % DAYS_PER_WEEK;
    add_days(first, -i64::from(offset))
}

/// All cells of the month view containing `view_month_date`: six consecutive
/// weeks starting at [`grid_start`].
///
/// # Errors
/// Returns `DateError::Overflow` if the grid leaves the representable range.
pub fn month_grid(
    view_month_date: impl Into<CalendarDate>,
    week_start: WeekStart,
) -> Result<[CalendarDate; GRID_CELLS], DateError> {
    let start = grid_start(view_month_date, week_start)?;
    let mut cells = [start; GRID_CELLS];
    for (offset, cell) in (0_i64..).zip(cells.iter_mut()) {
        *cell = add_days(start, offset)?;
    }
    log::trace!("Built month grid {} .. {}", cells[0], cells[GRID_CELLS - 1]);
    Ok(cells)
}
