use chrono::{DateTime, Datelike, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::HolidaySet;
use crate::date::{date_key, weekday_name};
use crate::error::{Error, Result};
use crate::model::record::AttendanceRecord;

/// One month of recorded days as CSV: `Date,Status,Day`, ascending by date,
/// `Day` being the full English weekday name. A month with nothing recorded
/// produces just the header row.
pub fn month_to_csv(record: &AttendanceRecord, year: i32, month: u32) -> Result<String> {
    let csv_err = |e: csv::Error| Error::storage(format!("csv: {}", e));

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Date", "Status", "Day"]).map_err(csv_err)?;

    for (date, status) in record.entries() {
        if date.year() == year && date.month() == month {
            writer
                .write_record([date_key(date), status.to_string(), weekday_name(date)])
                .map_err(csv_err)?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::storage(format!("csv: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| Error::storage(format!("csv: {}", e)))
}

/// Full backup payload. Field names match the durable JSON the original data
/// was exported with, so backups stay interchangeable.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct BackupPayload<'a> {
    attendance_data: &'a AttendanceRecord,
    target: f64,
    holidays: Vec<NaiveDate>,
    export_date: String,
}

pub fn backup_json(
    record: &AttendanceRecord,
    target: f64,
    holidays: &HolidaySet,
    exported_at: DateTime<Utc>,
) -> Result<String> {
    let payload = BackupPayload {
        attendance_data: record,
        target,
        holidays: holidays.dates().collect(),
        export_date: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    serde_json::to_string_pretty(&payload).map_err(|e| Error::storage(format!("backup: {}", e)))
}

/// What an import is willing to take from a backup: either key may be absent,
/// unknown keys are ignored rather than rejected.
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BackupImport {
    pub attendance_data: Option<AttendanceRecord>,
    pub target: Option<f64>,
}

pub fn parse_backup(json: &str) -> Result<BackupImport> {
    serde_json::from_str(json).map_err(|e| Error::invalid(format!("invalid backup payload: {}", e)))
}
