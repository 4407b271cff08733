use serde::Serialize;
use std::str::FromStr;

use crate::error::Error;

/// Output of the target projector. Purely a function of the stats, the
/// target config and "today" at calculation time; recomputed on demand and
/// never persisted.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProjectionResult {
    pub target_percentage: f64,
    pub current_percentage: f64,
    pub days_remaining: i64,
    pub working_days_remaining: i64,
    pub days_needed: i64,
    pub present_needed: i64,
    pub absents_allowed: i64,
    pub absents_per_week: f64,
    pub absents_per_month: f64,
    pub weekly_present_needed: f64,
    pub confidence_score: f64,
    pub is_achievable: bool,
    pub recommendations: Vec<String>,
}

/// Dashboard-style progress toward the saved target, computed over recorded
/// working days (holidays excluded from the denominator).
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct TargetProgress {
    pub percentage: f64,
    pub days_needed: i64,
    pub absents_allowed: i64,
}

/// What-if scenario input: mark the extra days present or absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioKind {
    Present,
    Absent,
}

impl FromStr for ScenarioKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "present" | "p" => Ok(ScenarioKind::Present),
            "absent" | "a" => Ok(ScenarioKind::Absent),
            other => Err(Error::invalid(format!(
                "unknown scenario '{}', expected present or absent",
                other
            ))),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ScenarioOutcome {
    pub current_percentage: f64,
    pub confidence_score: f64,
}
