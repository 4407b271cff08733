mod calendar_view;
mod dashboard;
mod report;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use attendly_core::session::{session_end, session_holidays};
use attendly_core::{
    backup_json, month_key, month_to_csv, parse_backup, parse_date_key, parse_month_key, project,
    simulate, target_progress, AttendanceService, AttendanceStatus, FileAttendanceRepository,
    ScenarioKind, TargetConfig,
};
use chrono::{Datelike, Local, Utc};
use clap::Parser;

#[derive(Parser)]
#[command(name = "attendly")]
#[command(about = "Track attendance and forecast whether your target is reachable", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Record a day (usage: mark 2025-09-01 present, or: mark today p)
    Mark {
        /// Date as YYYY-MM-DD, or today/yesterday
        date: String,
        /// One of present/absent/leave/holiday (or p/a/l/h)
        status: String,
    },
    /// Show the calendar for a month (YYYY-MM, default: current)
    Show { month: Option<String> },
    /// Show statistics for a month (default: current)
    Stats {
        month: Option<String>,
        /// Aggregate over every recorded day instead of one month
        #[arg(long)]
        all: bool,
    },
    /// Show the saved target, or set a new one
    Target { value: Option<f64> },
    /// Progress toward the saved target over recorded working days
    Progress,
    /// Project whether the target is reachable by a date
    Predict {
        /// Target percentage (default: the saved target)
        #[arg(long)]
        target: Option<f64>,
        /// Target date as YYYY-MM-DD (default: end of the session)
        #[arg(long)]
        date: Option<String>,
        /// Ignore recorded history and project from scratch
        #[arg(long)]
        fresh: bool,
    },
    /// What-if: add future days and see where attendance lands
    Simulate {
        /// How many days to add
        days: u32,
        /// present or absent
        kind: String,
    },
    /// Export one month as CSV
    Export {
        /// Month as YYYY-MM
        month: String,
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Write a JSON backup of the record, target and holiday list
    Backup {
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Import a JSON backup (replaces whatever keys it carries)
    Import { file: PathBuf },
    /// Delete every recorded day
    Clear {
        /// Confirm the wipe
        #[arg(long)]
        yes: bool,
    },
    /// Open the interactive dashboard
    Tui,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let repo = FileAttendanceRepository::new(None)?;
    let (mut service, degraded) = AttendanceService::load_or_empty(repo);
    if let Some(e) = degraded {
        eprintln!("Warning: {}. Continuing with in-memory data only.", e);
    }

    let holidays = session_holidays();
    let today = Local::now().date_naive();

    match cli.command {
        Some(Commands::Mark { date, status }) => {
            let date = parse_date_key(&date)?;
            let status: AttendanceStatus = status.parse()?;
            service.mark(date, status)?;

            let stats = service.month_stats(date.year(), date.month());
            println!("Marked {} as {}.", date, status);
            println!(
                "{}: {} recorded days, {:.1}% present.",
                date.format("%B %Y"),
                stats.total,
                stats.percentage()
            );
        }
        Some(Commands::Show { month }) => {
            let (year, month) = resolve_month(month)?;
            calendar_view::show_month(service.record(), &holidays, year, month);
        }
        Some(Commands::Stats { month, all }) => {
            if all {
                report::print_stats("All time", &service.overall_stats());
            } else {
                let (year, month) = resolve_month(month)?;
                let title = month_title(year, month);
                report::print_stats(&title, &service.month_stats(year, month));
            }
        }
        Some(Commands::Target { value }) => match value {
            Some(value) => {
                service.set_target(value)?;
                println!("Target set to {:.0}%.", value);
            }
            None => println!("Target: {:.0}%.", service.target()),
        },
        Some(Commands::Progress) => {
            let progress = target_progress(&service.overall_stats(), service.target())?;
            report::print_progress(&progress, service.target());
        }
        Some(Commands::Predict { target, date, fresh }) => {
            let target_percentage = target.unwrap_or_else(|| service.target());
            let target_date = match date {
                Some(date) => parse_date_key(&date)?,
                None => session_end(),
            };
            let mut config = TargetConfig::new(target_percentage, target_date);
            config.include_historical = !fresh;

            let result = project(&service.overall_stats(), &config, today)?;
            report::print_projection(&result);
        }
        Some(Commands::Simulate { days, kind }) => {
            let kind: ScenarioKind = kind.parse()?;
            let stats = service.overall_stats();
            let outcome = simulate(&stats, service.target(), days, kind)?;
            report::print_scenario(&stats, days, kind, &outcome);
        }
        Some(Commands::Export { month, output }) => {
            let (year, month) = parse_month_key(&month)?;
            let csv = month_to_csv(service.record(), year, month)?;
            let rows = csv.lines().count().saturating_sub(1);

            let path =
                output.unwrap_or_else(|| PathBuf::from(format!("attendance-{}.csv", month_key(year, month))));
            fs::write(&path, &csv).with_context(|| format!("write {}", path.display()))?;
            println!("Exported {} days to {}.", rows, path.display());
        }
        Some(Commands::Backup { output }) => {
            let json = backup_json(service.record(), service.target(), &holidays, Utc::now())?;
            let path = output.unwrap_or_else(|| PathBuf::from("attendance-backup.json"));
            fs::write(&path, &json).with_context(|| format!("write {}", path.display()))?;
            println!("Backed up {} days to {}.", service.record().len(), path.display());
        }
        Some(Commands::Import { file }) => {
            let content =
                fs::read_to_string(&file).with_context(|| format!("read {}", file.display()))?;
            let summary = service.import_backup(parse_backup(&content)?)?;

            match summary.attendance_entries {
                Some(count) => println!("Imported attendance record ({} days).", count),
                None => println!("No attendance data in backup; record unchanged."),
            }
            match summary.target {
                Some(target) => println!("Imported target: {:.0}%.", target),
                None => println!("No target in backup; target unchanged."),
            }
        }
        Some(Commands::Clear { yes }) => {
            if yes {
                service.clear()?;
                println!("Attendance record cleared.");
            } else {
                println!("This deletes every recorded day. Re-run with --yes to confirm.");
            }
        }
        Some(Commands::Tui) => {
            dashboard::run(service.record(), service.target())?;
        }
        None => {
            // No subcommand: the month at a glance plus progress.
            let (year, month) = (today.year(), today.month());
            calendar_view::show_month(service.record(), &holidays, year, month);
            let progress = target_progress(&service.overall_stats(), service.target())?;
            report::print_progress(&progress, service.target());
        }
    }

    Ok(())
}

fn resolve_month(month: Option<String>) -> Result<(i32, u32)> {
    match month {
        Some(month) => Ok(parse_month_key(&month)?),
        None => {
            let today = Local::now().date_naive();
            Ok((today.year(), today.month()))
        }
    }
}

fn month_title(year: i32, month: u32) -> String {
    chrono::NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| month_key(year, month))
}
