use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The closed set of recordable day statuses. The wire form is the lowercase
/// name; anything else is rejected at the parse boundary.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Leave,
    Holiday,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 4] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Leave,
        AttendanceStatus::Holiday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Leave => "leave",
            AttendanceStatus::Holiday => "holiday",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Leave => "Leave",
            AttendanceStatus::Holiday => "Holiday",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "present" | "p" => Ok(AttendanceStatus::Present),
            "absent" | "a" => Ok(AttendanceStatus::Absent),
            "leave" | "l" => Ok(AttendanceStatus::Leave),
            "holiday" | "h" => Ok(AttendanceStatus::Holiday),
            other => Err(Error::invalid(format!(
                "unknown status '{}', expected one of present/absent/leave/holiday",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_lowercase_form() {
        for status in AttendanceStatus::ALL {
            assert_eq!(status.as_str().parse::<AttendanceStatus>().unwrap(), status);
        }
    }

    #[test]
    fn accepts_single_letter_shorthand() {
        assert_eq!("p".parse::<AttendanceStatus>().unwrap(), AttendanceStatus::Present);
        assert_eq!("H".parse::<AttendanceStatus>().unwrap(), AttendanceStatus::Holiday);
    }

    #[test]
    fn rejects_anything_outside_the_set() {
        assert!("late".parse::<AttendanceStatus>().is_err());
        assert!("".parse::<AttendanceStatus>().is_err());
    }

    #[test]
    fn serde_form_is_the_lowercase_name() {
        let json = serde_json::to_string(&AttendanceStatus::Leave).unwrap();
        assert_eq!(json, "\"leave\"");
        let back: AttendanceStatus = serde_json::from_str("\"holiday\"").unwrap();
        assert_eq!(back, AttendanceStatus::Holiday);
        assert!(serde_json::from_str::<AttendanceStatus>("\"weekend\"").is_err());
    }
}
