use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::model::projection::{ProjectionResult, ScenarioKind, ScenarioOutcome, TargetProgress};
use crate::model::stats::RangeStats;
use crate::model::target::{validate_percentage, TargetConfig};

/// Fraction of remaining calendar days assumed to be working days. A fixed
/// heuristic standing in for the weekly off-days and holidays between now and
/// the target date; it is NOT derived from the actual holiday calendar.
pub const WORKING_DAY_FRACTION: f64 = 0.85;

/// Future working days assumed by the dashboard progress view.
pub const ASSUMED_FUTURE_WORKING_DAYS: i64 = 30;

/// Confidence below this switches the recommendations to the cautionary pair.
pub const CONFIDENCE_COMFORT_THRESHOLD: f64 = 70.0;

/// Projects whether the target percentage is reachable by the target date.
/// Deterministic: same stats, config and `today` always produce the same
/// result, and no division can leak NaN or Infinity into it.
pub fn project(stats: &RangeStats, config: &TargetConfig, today: NaiveDate) -> Result<ProjectionResult> {
    config.validate()?;

    let current_percentage = stats.percentage();

    let days_remaining = config.target_date.signed_duration_since(today).num_days().max(0);
    let working_days_remaining = (days_remaining as f64 * WORKING_DAY_FRACTION).floor() as i64;

    let (base_days, base_present) = if config.include_historical {
        (stats.total as i64, stats.present as i64)
    } else {
        (0, 0)
    };

    let total_future_days = base_days + working_days_remaining;
    let required_present_days =
        (config.target_percentage / 100.0 * total_future_days as f64).ceil() as i64;
    let days_needed = (required_present_days - base_present).max(0);
    let is_achievable = days_needed <= working_days_remaining;

    let confidence_score = (current_percentage / config.target_percentage * 100.0).clamp(0.0, 100.0);

    let absents_allowed = (working_days_remaining - days_needed).max(0);
    let weeks_remaining = (working_days_remaining as f64 / 7.0).max(1.0);
    let months_remaining = (working_days_remaining as f64 / 30.0).max(1.0);
    let absents_per_week = absents_allowed as f64 / weeks_remaining;
    let absents_per_month = absents_allowed as f64 / months_remaining;
    let weekly_present_needed = days_needed as f64 / weeks_remaining;

    let recommendations = recommend(is_achievable, confidence_score, absents_per_month);

    Ok(ProjectionResult {
        target_percentage: config.target_percentage,
        current_percentage,
        days_remaining,
        working_days_remaining,
        days_needed,
        present_needed: days_needed,
        absents_allowed,
        absents_per_week,
        absents_per_month,
        weekly_present_needed,
        confidence_score,
        is_achievable,
        recommendations,
    })
}

fn recommend(is_achievable: bool, confidence_score: f64, absents_per_month: f64) -> Vec<String> {
    if !is_achievable {
        vec![
            "Target may not be achievable with current attendance pattern.".to_string(),
            "Consider adjusting your target or improving attendance consistency.".to_string(),
        ]
    } else if confidence_score < CONFIDENCE_COMFORT_THRESHOLD {
        vec![
            "Maintain consistent attendance to meet your target.".to_string(),
            "Avoid unnecessary absences, especially in the coming weeks.".to_string(),
        ]
    } else {
        vec![
            "You are on track to meet your target!".to_string(),
            format!(
                "You can afford {} absent days per month.",
                absents_per_month.floor() as i64
            ),
        ]
    }
}

/// Progress toward the saved target over recorded working days, assuming a
/// short fixed horizon of future working days. Holidays drop out of the
/// denominator here, unlike the projector's recorded-total basis.
pub fn target_progress(stats: &RangeStats, target_percentage: f64) -> Result<TargetProgress> {
    validate_percentage(target_percentage)?;

    let working_days = stats.working_days() as i64;
    let percentage = if working_days > 0 {
        stats.present as f64 / working_days as f64 * 100.0
    } else {
        0.0
    };

    let horizon = working_days + ASSUMED_FUTURE_WORKING_DAYS;
    let required_present = (target_percentage / 100.0 * horizon as f64).ceil() as i64;
    let days_needed = (required_present - stats.present as i64).max(0);

    let max_absents = ((100.0 - target_percentage) / 100.0 * horizon as f64).floor() as i64;
    let absents_allowed = (max_absents - stats.absent as i64).max(0);

    Ok(TargetProgress {
        percentage,
        days_needed,
        absents_allowed,
    })
}

/// What-if: append `days` future days to the record, present or absent, and
/// see where percentage and confidence land.
pub fn simulate(
    stats: &RangeStats,
    target_percentage: f64,
    days: u32,
    kind: ScenarioKind,
) -> Result<ScenarioOutcome> {
    validate_percentage(target_percentage)?;
    if days == 0 {
        return Err(Error::invalid("scenario needs at least one day"));
    }

    let new_present = stats.present + if kind == ScenarioKind::Present { days } else { 0 };
    let new_total = stats.total + days;
    // new_total >= days >= 1, so the division is safe.
    let current_percentage = new_present as f64 / new_total as f64 * 100.0;
    let confidence_score = (current_percentage / target_percentage * 100.0).min(100.0);

    Ok(ScenarioOutcome {
        current_percentage,
        confidence_score,
    })
}
