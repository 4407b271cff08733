pub mod calendar;
pub mod date;
pub mod error;
pub mod export;
pub mod model;
pub mod repository;
pub mod service;
pub mod session;
pub mod usecase;

pub use calendar::{classify, is_holiday, DayClass, HolidaySet};
pub use date::{date_key, is_sunday, month_key, parse_date_key, parse_month_key, weekday_name};
pub use error::{Error, Result};
pub use export::{backup_json, month_to_csv, parse_backup, BackupImport};
pub use model::projection::{ProjectionResult, ScenarioKind, ScenarioOutcome, TargetProgress};
pub use model::record::AttendanceRecord;
pub use model::stats::RangeStats;
pub use model::status::AttendanceStatus;
pub use model::target::{TargetConfig, DEFAULT_TARGET_PERCENTAGE};
pub use repository::{AttendanceRepository, FileAttendanceRepository};
pub use service::attendance::{AttendanceService, ImportSummary};
pub use usecase::predict::{project, simulate, target_progress, WORKING_DAY_FRACTION};
pub use usecase::stats::{compute_stats, month_stats, overall_stats};
