use chrono::NaiveDate;

use crate::calendar::HolidaySet;
use crate::date::{next_month, prev_month};

/// The tracked academic session runs April 2025 through March 2026.
pub const SESSION_LABEL: &str = "2025-26";

const SESSION_FIRST_MONTH: (i32, u32) = (2025, 4);
const SESSION_LAST_MONTH: (i32, u32) = (2026, 3);

// Known public holidays for the session. Read-only configuration; anything
// else the user marks as holiday lives in the record itself.
const SESSION_HOLIDAYS: [(i32, u32, u32); 5] = [
    (2025, 8, 15),  // Independence Day
    (2025, 10, 2),  // Gandhi Jayanti
    (2025, 10, 24), // Diwali
    (2025, 12, 25), // Christmas
    (2026, 1, 26),  // Republic Day
];

pub fn session_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
}

/// Default projection horizon when the user gives no target date.
pub fn session_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 31).unwrap()
}

pub fn session_holidays() -> HolidaySet {
    SESSION_HOLIDAYS
        .iter()
        .map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
        .collect()
}

pub fn in_session(year: i32, month: u32) -> bool {
    (year, month) >= SESSION_FIRST_MONTH && (year, month) <= SESSION_LAST_MONTH
}

/// Previous month, unless that would leave the session window.
pub fn clamped_prev_month(year: i32, month: u32) -> Option<(i32, u32)> {
    let (y, m) = prev_month(year, month);
    in_session(y, m).then_some((y, m))
}

/// Next month, unless that would leave the session window.
pub fn clamped_next_month(year: i32, month: u32) -> Option<(i32, u32)> {
    let (y, m) = next_month(year, month);
    in_session(y, m).then_some((y, m))
}
