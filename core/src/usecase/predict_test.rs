
#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::model::projection::ScenarioKind;
    use crate::model::stats::RangeStats;
    use crate::model::target::TargetConfig;
    use crate::usecase::predict::{project, simulate, target_progress};
    use chrono::NaiveDate;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn stats(present: u32, absent: u32, leave: u32, holiday: u32) -> RangeStats {
        RangeStats {
            present,
            absent,
            leave,
            holiday,
            total: present + absent + leave + holiday,
        }
    }

    #[test]
    fn projecting_onto_today_leaves_no_working_days() {
        // One present, one absent, and the target date is already here.
        let stats = stats(1, 1, 0, 0);
        let config = TargetConfig::new(75.0, d("2025-09-02"));

        let result = project(&stats, &config, d("2025-09-02")).unwrap();

        assert_eq!(result.days_remaining, 0);
        assert_eq!(result.working_days_remaining, 0);
        // ceil(0.75 * 2) = 2 required, 1 already present.
        assert_eq!(result.days_needed, 1);
        assert_eq!(result.present_needed, 1);
        assert!(!result.is_achievable);
        assert_eq!(result.absents_allowed, 0);
        assert_eq!(result.absents_per_week, 0.0);
        assert!((result.confidence_score - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(
            result.recommendations,
            vec![
                "Target may not be achievable with current attendance pattern.".to_string(),
                "Consider adjusting your target or improving attendance consistency.".to_string(),
            ]
        );
    }

    #[test]
    fn projecting_a_fresh_start_thirty_days_out() {
        let stats = RangeStats::default();
        let config = TargetConfig::new(75.0, d("2025-10-01"));

        let result = project(&stats, &config, d("2025-09-01")).unwrap();

        assert_eq!(result.days_remaining, 30);
        assert_eq!(result.working_days_remaining, 25); // floor(30 * 0.85)
        assert_eq!(result.days_needed, 19); // ceil(0.75 * 25)
        assert!(result.is_achievable);
        assert_eq!(result.absents_allowed, 6);
        assert_eq!(result.current_percentage, 0.0);
        assert_eq!(result.confidence_score, 0.0);
        assert!((result.absents_per_week - 6.0 * 7.0 / 25.0).abs() < 1e-9);
    }

    #[test]
    fn zero_target_fails_instead_of_dividing() {
        let config = TargetConfig::new(0.0, d("2025-10-01"));
        let err = project(&stats(1, 0, 0, 0), &config, d("2025-09-01")).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        assert!(target_progress(&stats(1, 0, 0, 0), 0.0).is_err());
        assert!(simulate(&stats(1, 0, 0, 0), -5.0, 3, ScenarioKind::Absent).is_err());
    }

    #[test]
    fn excluding_history_zeroes_the_base() {
        let stats = stats(10, 0, 0, 0);
        let mut config = TargetConfig::new(80.0, d("2025-10-01"));
        config.include_historical = false;

        let result = project(&stats, &config, d("2025-09-01")).unwrap();

        // Base drops to 0/0, so only the 25 projected working days count:
        // ceil(0.8 * 25) = 20 needed from scratch.
        assert_eq!(result.days_needed, 20);
        assert!(result.is_achievable);
        // Current percentage still reports the real history.
        assert_eq!(result.current_percentage, 100.0);
    }

    #[test]
    fn on_track_recommendation_quotes_monthly_allowance() {
        // 90% current against a 75% target, a month of runway.
        let stats = stats(9, 1, 0, 0);
        let config = TargetConfig::new(75.0, d("2025-10-01"));

        let result = project(&stats, &config, d("2025-09-01")).unwrap();

        assert!(result.is_achievable);
        assert_eq!(result.confidence_score, 100.0); // clamped from 120
        assert_eq!(result.absents_allowed, 7);
        assert_eq!(
            result.recommendations,
            vec![
                "You are on track to meet your target!".to_string(),
                "You can afford 7 absent days per month.".to_string(),
            ]
        );
    }

    #[test]
    fn shaky_but_achievable_gets_the_cautionary_pair() {
        // 50% current against 75%: confidence 66.7, still achievable.
        let stats = stats(1, 1, 0, 0);
        let config = TargetConfig::new(75.0, d("2025-12-01"));

        let result = project(&stats, &config, d("2025-09-01")).unwrap();

        assert!(result.is_achievable);
        assert!(result.confidence_score < 70.0);
        assert_eq!(
            result.recommendations,
            vec![
                "Maintain consistent attendance to meet your target.".to_string(),
                "Avoid unnecessary absences, especially in the coming weeks.".to_string(),
            ]
        );
    }

    #[test]
    fn progress_excludes_holidays_from_the_denominator() {
        let stats = stats(3, 1, 1, 2);
        let progress = target_progress(&stats, 75.0).unwrap();

        // 5 working days recorded, 3 present.
        assert_eq!(progress.percentage, 60.0);
        // Horizon 35: ceil(0.75 * 35) = 27 required, 3 present so far.
        assert_eq!(progress.days_needed, 24);
        // floor(0.25 * 35) = 8 allowed in total, 1 already spent.
        assert_eq!(progress.absents_allowed, 7);
    }

    #[test]
    fn progress_with_no_working_days_is_zero_percent() {
        let progress = target_progress(&stats(0, 0, 0, 3), 75.0).unwrap();
        assert_eq!(progress.percentage, 0.0);
    }

    #[test]
    fn simulation_moves_percentage_and_confidence() {
        let stats = stats(3, 1, 0, 0); // 75%

        let worse = simulate(&stats, 75.0, 2, ScenarioKind::Absent).unwrap();
        assert_eq!(worse.current_percentage, 50.0);
        assert!((worse.confidence_score - 200.0 / 3.0).abs() < 1e-9);

        let better = simulate(&stats, 75.0, 2, ScenarioKind::Present).unwrap();
        assert!((better.current_percentage - 500.0 / 6.0).abs() < 1e-9);
        assert_eq!(better.confidence_score, 100.0); // capped
    }

    #[test]
    fn simulation_rejects_zero_days() {
        let err = simulate(&stats(1, 0, 0, 0), 75.0, 0, ScenarioKind::Present).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
