use serde::{Deserialize, Serialize};

use crate::model::status::AttendanceStatus;

/// Counts by status over some date range. Derived, never stored; `total` only
/// reflects recorded dates, so the four buckets always sum to it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeStats {
    pub present: u32,
    pub absent: u32,
    pub leave: u32,
    pub holiday: u32,
    pub total: u32,
}

impl RangeStats {
    pub fn record(&mut self, status: AttendanceStatus) {
        match status {
            AttendanceStatus::Present => self.present += 1,
            AttendanceStatus::Absent => self.absent += 1,
            AttendanceStatus::Leave => self.leave += 1,
            AttendanceStatus::Holiday => self.holiday += 1,
        }
        self.total += 1;
    }

    pub fn count_of(&self, status: AttendanceStatus) -> u32 {
        match status {
            AttendanceStatus::Present => self.present,
            AttendanceStatus::Absent => self.absent,
            AttendanceStatus::Leave => self.leave,
            AttendanceStatus::Holiday => self.holiday,
        }
    }

    /// Recorded days that were expected to be working days, i.e. everything
    /// except the holiday bucket. The dashboard-style progress view uses this
    /// as its denominator.
    pub fn working_days(&self) -> u32 {
        self.present + self.absent + self.leave
    }

    /// Present share of all recorded days, 0 when nothing is recorded.
    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            self.present as f64 / self.total as f64 * 100.0
        } else {
            0.0
        }
    }

    /// Share of one bucket within the recorded total, for per-status cards.
    pub fn share_of(&self, status: AttendanceStatus) -> f64 {
        if self.total > 0 {
            self.count_of(status) as f64 / self.total as f64 * 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_sum_to_total() {
        let mut stats = RangeStats::default();
        for status in [
            AttendanceStatus::Present,
            AttendanceStatus::Present,
            AttendanceStatus::Absent,
            AttendanceStatus::Leave,
            AttendanceStatus::Holiday,
        ] {
            stats.record(status);
        }
        assert_eq!(stats.present + stats.absent + stats.leave + stats.holiday, stats.total);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.working_days(), 4);
    }

    #[test]
    fn percentage_is_zero_without_records() {
        assert_eq!(RangeStats::default().percentage(), 0.0);
        assert_eq!(RangeStats::default().share_of(AttendanceStatus::Present), 0.0);
    }

    #[test]
    fn percentage_is_present_over_total() {
        let stats = RangeStats {
            present: 3,
            absent: 1,
            leave: 0,
            holiday: 0,
            total: 4,
        };
        assert_eq!(stats.percentage(), 75.0);
        assert_eq!(stats.share_of(AttendanceStatus::Absent), 25.0);
    }
}
