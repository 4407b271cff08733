use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::error::{Error, Result};

/// Canonical date-key format. Lexical order of keys in this form equals
/// chronological order, which the record relies on.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date_key(input: &str) -> Result<NaiveDate> {
    let input = input.trim();

    // Reserved keywords, relative to the user's local day.
    match input.to_lowercase().as_str() {
        "today" | "tod" => return Ok(Local::now().date_naive()),
        "yesterday" | "yest" => return Ok(Local::now().date_naive() - Duration::days(1)),
        _ => {}
    }

    NaiveDate::parse_from_str(input, DATE_KEY_FORMAT)
        .map_err(|_| Error::invalid(format!("could not parse date '{}', expected YYYY-MM-DD", input)))
}

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// "YYYY-MM" key for a month, the range selector used by month stats and CSV
/// export.
pub fn month_key(year: i32, month: u32) -> String {
    format!("{:04}-{:02}", year, month)
}

pub fn parse_month_key(input: &str) -> Result<(i32, u32)> {
    let input = input.trim();
    let invalid = || Error::invalid(format!("could not parse month '{}', expected YYYY-MM", input));

    let (year_str, month_str) = input.split_once('-').ok_or_else(invalid)?;
    let year: i32 = year_str.parse().map_err(|_| invalid())?;
    let month: u32 = month_str.parse().map_err(|_| invalid())?;

    // Reject e.g. "2025-13" up front instead of at first use.
    if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
        return Err(invalid());
    }
    Ok((year, month))
}

/// Day-of-week 0 under a Sunday-first week.
pub fn is_sunday(date: NaiveDate) -> bool {
    date.weekday().num_days_from_sunday() == 0
}

/// Full English weekday name ("Monday"), as the CSV export wants it.
pub fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next) = next_month(year, month);
    // Month is validated by every caller, so the first of the next month exists.
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next, 1).unwrap();
    (first_of_next - Duration::days(1)).day()
}

/// Number of blank leading cells in a Sunday-first month grid.
pub fn first_weekday_offset(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    first.weekday().num_days_from_sunday()
}
