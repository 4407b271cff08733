use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::export::BackupImport;
use crate::model::record::AttendanceRecord;
use crate::model::stats::RangeStats;
use crate::model::status::AttendanceStatus;
use crate::model::target::{validate_percentage, DEFAULT_TARGET_PERCENTAGE};
use crate::repository::AttendanceRepository;
use crate::usecase::stats::{month_stats, overall_stats};

/// What an import actually replaced, for reporting back to the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImportSummary {
    pub attendance_entries: Option<usize>,
    pub target: Option<f64>,
}

/// Owns the in-memory attendance state and writes it through the repository
/// after every mutation. This is the single mutation path to the record; the
/// aggregator and projector only ever read from it.
pub struct AttendanceService<R: AttendanceRepository> {
    repo: R,
    record: AttendanceRecord,
    target: f64,
}

impl<R: AttendanceRepository> AttendanceService<R> {
    /// Strict constructor: any storage failure is the caller's problem.
    pub fn new(repo: R) -> Result<Self> {
        let record = repo.load_attendance()?;
        let target = repo.load_target()?;
        Ok(Self { repo, record, target })
    }

    /// Degrading constructor: on load failure, start from an empty record and
    /// the default target, and hand the error back so the caller can report
    /// it. Operations keep working; persistence may still succeed later.
    pub fn load_or_empty(repo: R) -> (Self, Option<Error>) {
        let (record, record_err) = match repo.load_attendance() {
            Ok(record) => (record, None),
            Err(e) => (AttendanceRecord::new(), Some(e)),
        };
        let (target, target_err) = match repo.load_target() {
            Ok(target) => (target, None),
            Err(e) => (DEFAULT_TARGET_PERCENTAGE, Some(e)),
        };
        (Self { repo, record, target }, record_err.or(target_err))
    }

    pub fn record(&self) -> &AttendanceRecord {
        &self.record
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Records (or overwrites) one day and persists.
    pub fn mark(&mut self, date: NaiveDate, status: AttendanceStatus) -> Result<()> {
        self.record.set_status(date, status);
        self.repo.save_attendance(&self.record)
    }

    pub fn set_target(&mut self, target: f64) -> Result<()> {
        validate_percentage(target)?;
        self.target = target;
        self.repo.save_target(target)
    }

    /// Wholesale reset of the record; the target survives.
    pub fn clear(&mut self) -> Result<()> {
        self.record.clear();
        self.repo.save_attendance(&self.record)
    }

    pub fn month_stats(&self, year: i32, month: u32) -> RangeStats {
        month_stats(&self.record, year, month)
    }

    pub fn overall_stats(&self) -> RangeStats {
        overall_stats(&self.record)
    }

    /// Applies a parsed backup: each present key replaces its state
    /// wholesale and is persisted immediately.
    pub fn import_backup(&mut self, backup: BackupImport) -> Result<ImportSummary> {
        let mut summary = ImportSummary {
            attendance_entries: None,
            target: None,
        };

        if let Some(record) = backup.attendance_data {
            self.record = record;
            self.repo.save_attendance(&self.record)?;
            summary.attendance_entries = Some(self.record.len());
        }
        if let Some(target) = backup.target {
            validate_percentage(target)?;
            self.target = target;
            self.repo.save_target(target)?;
            summary.target = Some(target);
        }
        Ok(summary)
    }
}
