//! Calendar grid layout.
//!
//! Produces the ordered cells a renderer lays out for the current view:
//! one cell for daily, seven for weekly, and a full month for monthly
//! with leading padding cells so day 1 lands under its weekday column.
//! Trailing filler is left to the renderer.

use chrono::{Datelike, Duration, NaiveDate};
use shared::{GridCell, ViewMode};
use tracing::debug;

use crate::range::{month_end, month_start, week_start};

/// Build the (lesson-less) cell sequence for the given view.
pub fn build_grid(mode: ViewMode, anchor: NaiveDate) -> Vec<GridCell> {
    match mode {
        ViewMode::Daily => vec![GridCell::day(anchor)],
        ViewMode::Weekly => build_week(anchor),
        ViewMode::Monthly => build_month(anchor),
    }
}

fn build_week(anchor: NaiveDate) -> Vec<GridCell> {
    let start = week_start(anchor);
    (0..7)
        .map(|offset| GridCell::day(start + Duration::days(offset)))
        .collect()
}

fn build_month(anchor: NaiveDate) -> Vec<GridCell> {
    let first = month_start(anchor);
    let days_in_month = month_end(anchor).day();

    // 0 = Sunday. A month starting on Sunday gets zero padding cells.
    let first_weekday = first.weekday().num_days_from_sunday();

    debug!(
        month = anchor.month(),
        year = anchor.year(),
        days_in_month,
        first_weekday,
        "building month grid"
    );

    let mut cells = Vec::with_capacity((first_weekday + days_in_month) as usize);
    for _ in 0..first_weekday {
        cells.push(GridCell::padding());
    }
    for day in 1..=days_in_month {
        let date = NaiveDate::from_ymd_opt(anchor.year(), anchor.month(), day)
            .expect("day within month length");
        cells.push(GridCell::day(date));
    }

    cells
}
