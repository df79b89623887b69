//! Terminal preview of the timetable engine.
//!
//! Loads lesson events from a JSON file, plays the role of the
//! fetch-owning caller, and prints the resulting grid. The engine never
//! reads the clock itself; "today" is supplied here, at the binary seam.

use anyhow::{bail, Context, Result};
use chrono::{Datelike, NaiveDate};
use shared::{month_name, weekday_name, LessonEvent, TimetableView, ViewMode};
use timetable_engine::date_utils::parse_wall_clock;
use timetable_engine::{TimetableService, ViewState};
use tracing::{info, warn, Level};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(path) = args.first() else {
        bail!("usage: timetable-cli <lessons.json> [daily|weekly|monthly] [YYYY-MM-DD]");
    };
    let mode = match args.get(1) {
        Some(raw) => parse_mode(raw)?,
        None => ViewMode::Monthly,
    };
    let anchor = match args.get(2) {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("invalid anchor date: {raw}"))?,
        None => chrono::Local::now().date_naive(),
    };

    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let lessons: Vec<LessonEvent> =
        serde_json::from_str(&raw).context("lessons file is not a JSON array of lesson events")?;
    info!(count = lessons.len(), "loaded lessons from {path}");

    // Surface unreadable timestamps up front; the engine will skip them.
    for lesson in &lessons {
        if let Err(e) = parse_wall_clock(&lesson.start_time) {
            warn!(lesson_id = %lesson.id, error = %e, "lesson will not appear in the grid");
        }
    }

    let state = ViewState::with_mode(anchor, mode);
    let view = TimetableService::new().build_view_for(&state, &lessons);

    print_view(&view);
    Ok(())
}

fn parse_mode(raw: &str) -> Result<ViewMode> {
    match raw.to_ascii_lowercase().as_str() {
        "daily" | "day" => Ok(ViewMode::Daily),
        "weekly" | "week" => Ok(ViewMode::Weekly),
        "monthly" | "month" => Ok(ViewMode::Monthly),
        _ => bail!("unknown view mode: {raw} (expected daily, weekly, or monthly)"),
    }
}

fn print_view(view: &TimetableView) {
    println!(
        "{} {} — {} view (fetch {} .. {})",
        month_name(view.anchor.month()),
        view.anchor.year(),
        view.mode.label(),
        view.range.start,
        view.range.end
    );
    println!();

    match view.mode {
        ViewMode::Daily | ViewMode::Weekly => print_day_list(view),
        ViewMode::Monthly => print_month_grid(view),
    }
}

fn print_day_list(view: &TimetableView) {
    for cell in &view.cells {
        let Some(date) = cell.date else { continue };
        let weekday = date.weekday().num_days_from_sunday();
        println!("{} {} {}", weekday_name(weekday), date.day(), month_name(date.month()));
        if cell.lessons.is_empty() {
            println!("    (no events)");
        }
        for lesson in &cell.lessons {
            let time = parse_wall_clock(&lesson.start_time)
                .map(|w| format!("{:02}:{:02}", w.hour, w.minute))
                .unwrap_or_else(|_| "??:??".to_string());
            println!(
                "    {} {} {} @ {}",
                time, lesson.module_code, lesson.lesson_type, lesson.location
            );
        }
    }
}

fn print_month_grid(view: &TimetableView) {
    for day in 0..7 {
        print!("{:>9}", &weekday_name(day)[..3]);
    }
    println!();

    for (i, cell) in view.cells.iter().enumerate() {
        match cell.date {
            Some(date) => print!("{:>6} {:>2}", format!("[{}]", cell.lessons.len()), date.day()),
            None => print!("{:>9}", ""),
        }
        if i % 7 == 6 {
            println!();
        }
    }
    if view.cells.len() % 7 != 0 {
        println!();
    }
}
