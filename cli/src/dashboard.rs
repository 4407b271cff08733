use std::{io, time::Duration};

use anyhow::Result;
use attendly_core::session::{
    clamped_next_month, clamped_prev_month, in_session, session_start, SESSION_LABEL,
};
use attendly_core::{month_stats, overall_stats, AttendanceRecord, RangeStats};
use chrono::{Datelike, Local, NaiveDate};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Gauge, Padding, Paragraph},
};

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    present: Color,
    absent: Color,
    leave: Color,
    holiday: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan, // Highlights
    muted: Color::DarkGray,
    text: Color::White,
    present: Color::Green,
    absent: Color::Red,
    leave: Color::Blue,
    holiday: Color::Yellow,
};

pub struct DashboardApp {
    record: AttendanceRecord,
    target: f64,
    year: i32,
    month: u32,
}

impl DashboardApp {
    pub fn new(record: AttendanceRecord, target: f64) -> Self {
        let today = Local::now().date_naive();
        let (year, month) = if in_session(today.year(), today.month()) {
            (today.year(), today.month())
        } else {
            let start = session_start();
            (start.year(), start.month())
        };
        Self {
            record,
            target,
            year,
            month,
        }
    }

    pub fn next_month(&mut self) {
        if let Some((year, month)) = clamped_next_month(self.year, self.month) {
            self.year = year;
            self.month = month;
        }
    }

    pub fn previous_month(&mut self) {
        if let Some((year, month)) = clamped_prev_month(self.year, self.month) {
            self.year = year;
            self.month = month;
        }
    }

    fn can_go_prev(&self) -> bool {
        clamped_prev_month(self.year, self.month).is_some()
    }

    fn can_go_next(&self) -> bool {
        clamped_next_month(self.year, self.month).is_some()
    }

    fn current_stats(&self) -> RangeStats {
        month_stats(&self.record, self.year, self.month)
    }
}

pub fn run(record: &AttendanceRecord, target: f64) -> Result<()> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // App setup
    let mut app = DashboardApp::new(record.clone(), target);

    // Main loop
    loop {
        terminal.draw(|f| ui(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Left | KeyCode::Char('h') => app.previous_month(),
                        KeyCode::Right | KeyCode::Char('l') => app.next_month(),
                        _ => {}
                    }
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn month_title(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_default()
}

fn ui(frame: &mut Frame, app: &DashboardApp) {
    let size = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Chart + Info panel
            Constraint::Length(1), // Footer
        ])
        .split(size);

    // --- Header ---
    let title = format!(" {} ", month_title(app.year, app.month));

    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(THEME.muted));

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24), // App title
            Constraint::Min(1),     // Spacer
            Constraint::Length(30), // Month selector
        ])
        .split(main_layout[0]);

    let app_title = Paragraph::new(Span::styled(
        format!("ATTENDLY {}", SESSION_LABEL),
        Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(app_title, header_layout[0]);

    let nav_text = Line::from(vec![
        Span::styled(
            " < ",
            Style::default().fg(if app.can_go_prev() { THEME.text } else { THEME.muted }),
        ),
        Span::styled(title, Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)),
        Span::styled(
            " > ",
            Style::default().fg(if app.can_go_next() { THEME.text } else { THEME.muted }),
        ),
    ]);
    let nav = Paragraph::new(nav_text)
        .alignment(Alignment::Right)
        .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(nav, header_layout[2]);

    frame.render_widget(header_block, main_layout[0]);

    // --- Main content split ---
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // Chart
            Constraint::Length(1),      // Gutter
            Constraint::Percentage(34), // Info panel
        ])
        .split(main_layout[1]);

    draw_chart(frame, &app.current_stats(), content_chunks[0]);
    draw_info_panel(frame, app, content_chunks[2]);

    // --- Footer ---
    let help = Line::from(vec![
        Span::styled("NAV: ", Style::default().fg(THEME.muted)),
        Span::styled("←/→ ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    let footer = Paragraph::new(help)
        .alignment(Alignment::Center)
        .style(Style::default().fg(THEME.muted));
    frame.render_widget(footer, main_layout[2]);
}

fn draw_chart(frame: &mut Frame, stats: &RangeStats, area: Rect) {
    let bar_data = [
        ("Present", stats.present, THEME.present),
        ("Absent", stats.absent, THEME.absent),
        ("Leave", stats.leave, THEME.leave),
        ("Holiday", stats.holiday, THEME.holiday),
    ];

    let bar_items: Vec<Bar> = bar_data
        .iter()
        .map(|(label, value, color)| {
            Bar::default()
                .label(*label)
                .value(*value as u64)
                .style(Style::default().fg(*color))
                .text_value(if *value > 0 { value.to_string() } else { String::new() })
        })
        .collect();

    let chart_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(" Month Breakdown (Days) ");

    let max = bar_data.iter().map(|(_, value, _)| *value as u64).max().unwrap_or(0);

    let chart = BarChart::default()
        .block(chart_block)
        .bar_width(9)
        .bar_gap(2)
        .data(BarGroup::default().bars(&bar_items))
        .max(max.max(5));

    frame.render_widget(chart, area);
}

fn draw_info_panel(frame: &mut Frame, app: &DashboardApp, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // Summary
            Constraint::Min(1),     // Target gauge
        ])
        .split(area);

    // 1. Summary card
    let stats = app.current_stats();
    let overall = overall_stats(&app.record);

    let info_text = vec![
        Line::from(vec![Span::styled("This month", Style::default().add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Present:  ", Style::default().fg(THEME.muted)),
            Span::styled(
                format!("{}", stats.present),
                Style::default().fg(THEME.present).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Absent:   ", Style::default().fg(THEME.muted)),
            Span::styled(
                format!("{}", stats.absent),
                Style::default().fg(THEME.absent).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Leave:    ", Style::default().fg(THEME.muted)),
            Span::styled(
                format!("{}", stats.leave),
                Style::default().fg(THEME.leave).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Holiday:  ", Style::default().fg(THEME.muted)),
            Span::styled(
                format!("{}", stats.holiday),
                Style::default().fg(THEME.holiday).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Recorded: ", Style::default().fg(THEME.muted)),
            Span::styled(format!("{}", stats.total), Style::default().fg(THEME.text)),
        ]),
    ];

    let info_block = Paragraph::new(info_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME.muted))
            .title(" Summary "),
    );
    frame.render_widget(info_block, chunks[0]);

    // 2. Overall attendance against the target
    let percentage = overall.percentage();
    let on_target = percentage >= app.target;

    let label = format!("{:.1}% (target {:.0}%)", percentage, app.target);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Overall Attendance ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME.muted)),
        )
        .gauge_style(Style::default().fg(if on_target { THEME.present } else { THEME.absent }))
        .ratio((percentage / 100.0).clamp(0.0, 1.0))
        .label(label);

    frame.render_widget(gauge, chunks[1]);
}
