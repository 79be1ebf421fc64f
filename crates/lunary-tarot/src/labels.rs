//! Seed labels and day arithmetic.
//!
//! Daily, weekly, and general cards are keyed on labels with distinct
//! prefixes so a day's personal card and its week's card never share a seed
//! just because they fall on the same date.

use chrono::{Datelike, Duration, FixedOffset, NaiveDate, Utc, Weekday};

/// Identity paired with [`cosmic_label`] for the shared general card.
pub const COSMIC_IDENTITY: &str = "cosmic-daily-energy";

/// Base for a person's card of the day: `daily-YYYY-MM-DD`.
pub fn daily_label(date: NaiveDate) -> String {
    format!("daily-{}", date.format("%Y-%m-%d"))
}

/// Base for a week's card, keyed on the day the week starts:
/// `weekly-<ISO year>-W<ISO week>-YYYY-MM-DD`.
pub fn weekly_label(week_start: NaiveDate) -> String {
    format!("weekly-{}", week_start.format("%G-W%V-%Y-%m-%d"))
}

/// Base for the general card everyone sees on a day:
/// `cosmic-YYYY-MM-DD-<day of year>-energy`.
pub fn cosmic_label(date: NaiveDate) -> String {
    format!("cosmic-{}-{}-energy", date.format("%Y-%m-%d"), date.ordinal())
}

/// The first day of the week containing `date`.
///
/// In the first week of the calendar range the result is clamped to
/// [`NaiveDate::MIN`].
pub fn week_start(date: NaiveDate, first_day: Weekday) -> NaiveDate {
    let back = (7 + date.weekday().num_days_from_monday() - first_day.num_days_from_monday()) % 7;
    let back = Duration::days(i64::from(back));
    date.checked_sub_signed(back).unwrap_or(NaiveDate::MIN)
}

/// `days` dates counting back from `today`, most recent first.
///
/// With `include_today` the list starts at `today`; otherwise it starts the
/// day before. The list stops early at [`NaiveDate::MIN`].
pub fn past_days(today: NaiveDate, days: u32, include_today: bool) -> Vec<NaiveDate> {
    let skip = if include_today { 0 } else { 1 };
    (0..i64::from(days))
        .map_while(|back| today.checked_sub_signed(Duration::days(back + skip)))
        .collect()
}

/// The calendar date right now at `offset` from UTC.
pub fn today(offset: FixedOffset) -> NaiveDate {
    Utc::now().with_timezone(&offset).date_naive()
}
