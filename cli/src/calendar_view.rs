use attendly_core::date::{days_in_month, first_weekday_offset};
use attendly_core::{classify, AttendanceRecord, AttendanceStatus, DayClass, HolidaySet};
use chrono::NaiveDate;
use tabled::builder::Builder;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};

fn marker(class: DayClass) -> &'static str {
    match class {
        DayClass::Holiday => "H",
        DayClass::Sunday => "S",
        DayClass::Recorded(status) => match status {
            AttendanceStatus::Present => "✓",
            AttendanceStatus::Absent => "✗",
            AttendanceStatus::Leave => "L",
            AttendanceStatus::Holiday => "H",
        },
        DayClass::Pending => "·",
    }
}

/// Sunday-first month grid, one marker per day, classified the same way the
/// original calendar colored its cells.
pub fn show_month(record: &AttendanceRecord, holidays: &HolidaySet, year: i32, month: u32) {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("validated month");
    println!("\n\x1b[1;36m{}\x1b[0m", first.format("%B %Y"));

    let mut builder = Builder::default();
    builder.push_record(["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);

    let offset = first_weekday_offset(year, month) as usize;
    let mut cells: Vec<String> = vec![String::new(); offset];
    for day in 1..=days_in_month(year, month) {
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("validated month");
        cells.push(format!("{:>2} {}", day, marker(classify(date, holidays, record))));
    }
    while cells.len() % 7 != 0 {
        cells.push(String::new());
    }
    for week in cells.chunks(7) {
        builder.push_record(week.iter().map(|cell| cell.as_str()));
    }

    let mut table = builder.build();
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);
    println!("  ✓ present  ✗ absent  L leave  H holiday  S sunday  · pending");
}
