use crate::error::Result;
use crate::model::record::AttendanceRecord;

/// The durable-storage collaborator. Loads fall back to empty/default when
/// nothing has been stored yet; a store that is genuinely unreachable
/// surfaces `Error::Storage` so the caller can degrade deliberately.
pub trait AttendanceRepository {
    fn load_attendance(&self) -> Result<AttendanceRecord>;
    fn save_attendance(&self, record: &AttendanceRecord) -> Result<()>;
    fn load_target(&self) -> Result<f64>;
    fn save_target(&self, target: f64) -> Result<()>;
}
