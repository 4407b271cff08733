use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::is_sunday;
use crate::model::record::AttendanceRecord;
use crate::model::status::AttendanceStatus;

/// Dates known in advance to be non-working, independent of what gets
/// recorded against them. Session-scoped, read-only configuration.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct HolidaySet {
    dates: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

/// A date is a holiday if the fixed set says so, or the user explicitly
/// recorded it as one.
pub fn is_holiday(date: NaiveDate, holidays: &HolidaySet, record: &AttendanceRecord) -> bool {
    holidays.contains(date) || record.status_of(date) == Some(AttendanceStatus::Holiday)
}

/// Calendar-cell classification. Display-only: the statistics aggregator
/// deliberately ignores the derived Sunday/holiday states and counts recorded
/// statuses alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayClass {
    Holiday,
    Sunday,
    Recorded(AttendanceStatus),
    Pending,
}

/// Precedence: holiday (set or record) > Sunday > recorded status > pending.
pub fn classify(date: NaiveDate, holidays: &HolidaySet, record: &AttendanceRecord) -> DayClass {
    if is_holiday(date, holidays, record) {
        return DayClass::Holiday;
    }
    if is_sunday(date) {
        return DayClass::Sunday;
    }
    match record.status_of(date) {
        Some(status) => DayClass::Recorded(status),
        None => DayClass::Pending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn holiday_set_membership_or_recorded_holiday() {
        let holidays: HolidaySet = [d("2025-12-25")].into_iter().collect();
        let mut record = AttendanceRecord::new();
        record.set_status(d("2025-11-03"), AttendanceStatus::Holiday);

        assert!(is_holiday(d("2025-12-25"), &holidays, &record));
        assert!(is_holiday(d("2025-11-03"), &holidays, &record));
        assert!(!is_holiday(d("2025-11-04"), &holidays, &record));
    }

    #[test]
    fn classification_precedence() {
        let holidays: HolidaySet = [d("2025-12-25")].into_iter().collect();
        let mut record = AttendanceRecord::new();
        // A recorded status on a set holiday still displays as holiday.
        record.set_status(d("2025-12-25"), AttendanceStatus::Present);
        // A recorded status on a Sunday loses to the Sunday rule.
        record.set_status(d("2025-09-07"), AttendanceStatus::Present);
        record.set_status(d("2025-09-08"), AttendanceStatus::Leave);

        assert_eq!(classify(d("2025-12-25"), &holidays, &record), DayClass::Holiday);
        assert_eq!(classify(d("2025-09-07"), &holidays, &record), DayClass::Sunday);
        assert_eq!(
            classify(d("2025-09-08"), &holidays, &record),
            DayClass::Recorded(AttendanceStatus::Leave)
        );
        assert_eq!(classify(d("2025-09-09"), &holidays, &record), DayClass::Pending);
    }

    #[test]
    fn recorded_holiday_classifies_as_holiday_even_on_sunday() {
        let holidays = HolidaySet::new();
        let mut record = AttendanceRecord::new();
        record.set_status(d("2025-09-07"), AttendanceStatus::Holiday); // a Sunday

        assert_eq!(classify(d("2025-09-07"), &holidays, &record), DayClass::Holiday);
    }
}
