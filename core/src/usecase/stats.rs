use chrono::{Datelike, NaiveDate};

use crate::model::record::AttendanceRecord;
use crate::model::stats::RangeStats;

/// Counts every recorded date the predicate admits. Dates without a recorded
/// status never reach any bucket, even when the calendar would display them
/// as Sunday or holiday; that asymmetry matches the display layer on purpose.
pub fn compute_stats<P>(record: &AttendanceRecord, in_range: P) -> RangeStats
where
    P: Fn(NaiveDate) -> bool,
{
    let mut stats = RangeStats::default();
    for (date, status) in record.entries() {
        if in_range(date) {
            stats.record(status);
        }
    }
    stats
}

pub fn month_stats(record: &AttendanceRecord, year: i32, month: u32) -> RangeStats {
    compute_stats(record, |date| date.year() == year && date.month() == month)
}

pub fn overall_stats(record: &AttendanceRecord) -> RangeStats {
    compute_stats(record, |_| true)
}
