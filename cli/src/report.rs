use attendly_core::{
    AttendanceStatus, ProjectionResult, RangeStats, ScenarioKind, ScenarioOutcome, TargetProgress,
};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Days")]
    days: u32,
    #[tabled(rename = "Share")]
    share: String,
}

pub fn print_stats(title: &str, stats: &RangeStats) {
    println!("\n\x1b[1;36m{}\x1b[0m", title);
    if stats.total == 0 {
        println!("Nothing recorded yet.");
        return;
    }

    let rows: Vec<StatRow> = AttendanceStatus::ALL
        .iter()
        .map(|&status| StatRow {
            status: status.label(),
            days: stats.count_of(status),
            share: format!("{:.0}%", stats.share_of(status)),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);
    println!("{} recorded days, {:.1}% present.", stats.total, stats.percentage());
}

pub fn print_progress(progress: &TargetProgress, target: f64) {
    println!("\n\x1b[1;36mTarget progress\x1b[0m");
    println!("{:<26} {:.1}%", "Attendance (working days)", progress.percentage);
    println!("{:<26} {:.0}%", "Target", target);
    println!("{:<26} {}", "Present days still needed", progress.days_needed);
    println!("{:<26} {}", "Absents still allowed", progress.absents_allowed);
}

pub fn print_projection(result: &ProjectionResult) {
    println!("\n\x1b[1;36mProjection\x1b[0m");
    println!("{:<26} {:.1}%", "Current attendance", result.current_percentage);
    println!("{:<26} {:.0}%", "Target", result.target_percentage);
    println!("{:<26} {:.0}%", "Confidence", result.confidence_score);
    println!("{:<26} {}", "Calendar days remaining", result.days_remaining);
    println!("{:<26} {}", "Working days remaining", result.working_days_remaining);
    println!("{:<26} {}", "Present days needed", result.present_needed);
    println!("{:<26} {}", "Absents allowed", result.absents_allowed);
    println!("{:<26} {:.1}", "Absents per week", result.absents_per_week);
    println!("{:<26} {:.1}", "Absents per month", result.absents_per_month);
    println!("{:<26} {:.1}", "Present needed per week", result.weekly_present_needed);

    let status = if result.is_achievable {
        "\x1b[1;32mAchievable\x1b[0m"
    } else {
        "\x1b[1;31mChallenging\x1b[0m"
    };
    println!("{:<26} {}", "Status", status);

    println!();
    for recommendation in &result.recommendations {
        println!("  • {}", recommendation);
    }
}

pub fn print_scenario(before: &RangeStats, days: u32, kind: ScenarioKind, outcome: &ScenarioOutcome) {
    let label = match kind {
        ScenarioKind::Present => "present",
        ScenarioKind::Absent => "absent",
    };
    println!("\n\x1b[1;36mScenario: {} more {} days\x1b[0m", days, label);
    println!(
        "{:<26} {:.1}% -> {:.1}%",
        "Attendance",
        before.percentage(),
        outcome.current_percentage
    );
    println!("{:<26} {:.0}%", "Confidence", outcome.confidence_score);
}
