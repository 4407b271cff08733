use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::status::AttendanceStatus;

/// The canonical attendance record: one status per calendar date, nothing for
/// unrecorded dates. Serializes as a flat `{"YYYY-MM-DD": "status"}` object,
/// the same shape the durable store holds.
///
/// BTreeMap keys keep `entries()` in ascending date order without a separate
/// sort step.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct AttendanceRecord {
    entries: BTreeMap<NaiveDate, AttendanceStatus>,
}

impl AttendanceRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites any prior status for the date; returns what was replaced.
    pub fn set_status(&mut self, date: NaiveDate, status: AttendanceStatus) -> Option<AttendanceStatus> {
        self.entries.insert(date, status)
    }

    /// `None` means unrecorded, which is distinct from every status value.
    pub fn status_of(&self, date: NaiveDate) -> Option<AttendanceStatus> {
        self.entries.get(&date).copied()
    }

    /// Ascending-by-date walk over every recorded entry.
    pub fn entries(&self) -> impl Iterator<Item = (NaiveDate, AttendanceStatus)> + '_ {
        self.entries.iter().map(|(date, status)| (*date, *status))
    }

    /// Wholesale reset. Idempotent.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(NaiveDate, AttendanceStatus)> for AttendanceRecord {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, AttendanceStatus)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn set_then_get_returns_the_status() {
        let mut record = AttendanceRecord::new();
        for (date, status) in [
            ("2025-09-01", AttendanceStatus::Present),
            ("2025-09-02", AttendanceStatus::Absent),
            ("2025-09-03", AttendanceStatus::Leave),
            ("2025-09-04", AttendanceStatus::Holiday),
        ] {
            record.set_status(d(date), status);
            assert_eq!(record.status_of(d(date)), Some(status));
        }
        assert_eq!(record.status_of(d("2025-09-05")), None);
    }

    #[test]
    fn insertion_overwrites() {
        let mut record = AttendanceRecord::new();
        assert_eq!(record.set_status(d("2025-09-01"), AttendanceStatus::Absent), None);
        let replaced = record.set_status(d("2025-09-01"), AttendanceStatus::Present);
        assert_eq!(replaced, Some(AttendanceStatus::Absent));
        assert_eq!(record.status_of(d("2025-09-01")), Some(AttendanceStatus::Present));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn entries_iterate_in_ascending_date_order() {
        let mut record = AttendanceRecord::new();
        record.set_status(d("2025-12-25"), AttendanceStatus::Holiday);
        record.set_status(d("2025-04-01"), AttendanceStatus::Present);
        record.set_status(d("2025-09-15"), AttendanceStatus::Absent);

        let dates: Vec<NaiveDate> = record.entries().map(|(date, _)| date).collect();
        assert_eq!(dates, vec![d("2025-04-01"), d("2025-09-15"), d("2025-12-25")]);

        // Restartable: a second pass sees the same sequence.
        let again: Vec<NaiveDate> = record.entries().map(|(date, _)| date).collect();
        assert_eq!(dates, again);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut record = AttendanceRecord::new();
        record.set_status(d("2025-09-01"), AttendanceStatus::Present);
        record.clear();
        assert!(record.is_empty());
        record.clear();
        assert!(record.is_empty());
    }

    #[test]
    fn serializes_as_date_keyed_object() {
        let mut record = AttendanceRecord::new();
        record.set_status(d("2025-09-01"), AttendanceStatus::Present);
        record.set_status(d("2025-09-02"), AttendanceStatus::Absent);

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"2025-09-01":"present","2025-09-02":"absent"}"#);

        let back: AttendanceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
