use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::model::record::AttendanceRecord;
use crate::model::target::DEFAULT_TARGET_PERCENTAGE;
use crate::repository::traits::AttendanceRepository;

const ATTENDANCE_FILE_NAME: &str = "attendance.json";
const TARGET_FILE_NAME: &str = "target.json";

/// JSON files under `~/.attendly` (or a caller-supplied directory). The
/// record file holds the date→status object, the target file a bare number.
#[derive(Clone)]
pub struct FileAttendanceRepository {
    data_dir: PathBuf,
}

impl FileAttendanceRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| Error::storage("could not determine home directory"))?;
                home_dir.join(".attendly")
            }
        };
        fs::create_dir_all(&path)
            .map_err(|e| Error::storage(format!("create {}: {}", path.display(), e)))?;

        Ok(FileAttendanceRepository { data_dir: path })
    }

    fn attendance_path(&self) -> PathBuf {
        self.data_dir.join(ATTENDANCE_FILE_NAME)
    }

    fn target_path(&self) -> PathBuf {
        self.data_dir.join(TARGET_FILE_NAME)
    }
}

impl AttendanceRepository for FileAttendanceRepository {
    fn load_attendance(&self) -> Result<AttendanceRecord> {
        let path = self.attendance_path();
        if !path.exists() {
            // Nothing saved yet is not a failure.
            return Ok(AttendanceRecord::new());
        }
        let file =
            File::open(&path).map_err(|e| Error::storage(format!("open {}: {}", path.display(), e)))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| Error::storage(format!("read {}: {}", path.display(), e)))
    }

    fn save_attendance(&self, record: &AttendanceRecord) -> Result<()> {
        let path = self.attendance_path();
        let file = File::create(&path)
            .map_err(|e| Error::storage(format!("create {}: {}", path.display(), e)))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, record)
            .map_err(|e| Error::storage(format!("write {}: {}", path.display(), e)))?;
        writer
            .flush()
            .map_err(|e| Error::storage(format!("write {}: {}", path.display(), e)))?;
        Ok(())
    }

    fn load_target(&self) -> Result<f64> {
        let path = self.target_path();
        if !path.exists() {
            return Ok(DEFAULT_TARGET_PERCENTAGE);
        }
        let content = fs::read_to_string(&path)
            .map_err(|e| Error::storage(format!("open {}: {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| Error::storage(format!("read {}: {}", path.display(), e)))
    }

    fn save_target(&self, target: f64) -> Result<()> {
        let path = self.target_path();
        let content = serde_json::to_string(&target)
            .map_err(|e| Error::storage(format!("write {}: {}", path.display(), e)))?;
        fs::write(&path, content)
            .map_err(|e| Error::storage(format!("write {}: {}", path.display(), e)))?;
        Ok(())
    }
}
