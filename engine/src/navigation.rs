//! View-state navigation.
//!
//! `ViewState` is the one mutable value the engine owns: the current
//! view mode and the anchor date in focus. One instance lives per
//! screen and is passed explicitly to whatever needs it; there is no
//! process-wide navigation singleton.

use chrono::{Datelike, Duration, NaiveDate};
use shared::ViewMode;
use tracing::debug;

/// The current `(mode, anchor)` pair of a timetable screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    mode: ViewMode,
    anchor: NaiveDate,
}

impl ViewState {
    /// Create a view state focused on the externally supplied "today",
    /// starting in the default daily mode.
    pub fn new(today: NaiveDate) -> Self {
        Self::with_mode(today, ViewMode::default())
    }

    /// Create a view state with an explicit initial mode.
    pub fn with_mode(today: NaiveDate, mode: ViewMode) -> Self {
        Self {
            mode,
            anchor: today,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Switch the presentation mode. The anchor stays put; the next
    /// render recomputes range and grid around the same date.
    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    /// Jump the focus to an arbitrary date ("today" buttons, date
    /// pickers). The mode is unchanged.
    pub fn set_anchor(&mut self, date: NaiveDate) {
        self.anchor = date;
    }

    /// Move forward by exactly one unit of the current mode.
    pub fn advance(&mut self) {
        self.shift(1);
    }

    /// Move backward by exactly one unit of the current mode.
    pub fn retreat(&mut self) {
        self.shift(-1);
    }

    fn shift(&mut self, direction: i32) {
        let next = match self.mode {
            ViewMode::Daily => self.anchor + Duration::days(direction.into()),
            ViewMode::Weekly => self.anchor + Duration::days((direction * 7).into()),
            ViewMode::Monthly => shift_month_preserving_day(self.anchor, direction),
        };
        debug!(mode = ?self.mode, from = %self.anchor, to = %next, "navigating");
        self.anchor = next;
    }
}

/// Shift by whole calendar months, keeping the day-of-month when the
/// target month has it and clamping to the month's last day otherwise.
/// Retreating from 31 March lands on 28/29 February, never in April.
fn shift_month_preserving_day(current: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = current.year() * 12 + (current.month() as i32 - 1) + delta_months;
    let year = total_months.div_euclid(12);
    let month = (total_months.rem_euclid(12) + 1) as u32;

    let last_day = last_day_of_month(year, month);
    let day = current.day().min(last_day);
    NaiveDate::from_ymd_opt(year, month, day).expect("clamped day is valid")
}

fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next =
        NaiveDate::from_ymd_opt(next_year, next_month, 1).expect("valid next month");
    first_of_next.pred_opt().expect("previous day exists").day()
}
