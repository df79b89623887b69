use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single scheduled lesson as delivered by the attendance service.
///
/// The engine treats every field except the timestamps as opaque. The
/// timestamps carry institution-local wall-clock time with an embedded
/// offset that must be ignored when deciding which calendar day a lesson
/// belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonEvent {
    pub id: String,
    /// Short module identifier, e.g. "CS2103"
    pub module_code: String,
    /// Full module title for display
    pub module_name: String,
    /// Lesson category, e.g. "Lecture", "Tutorial", "Lab"
    pub lesson_type: String,
    /// Start timestamp: `YYYY-MM-DDTHH:MM[:SS][offset]`
    pub start_time: String,
    /// End timestamp, same format; `start_time <= end_time`
    pub end_time: String,
    /// Room or venue, may be empty
    pub location: String,
}

/// Which calendar presentation the timetable is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    Daily,
    Weekly,
    Monthly,
}

impl ViewMode {
    /// Human-readable label for headers and toggles.
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Daily => "Day",
            ViewMode::Weekly => "Week",
            ViewMode::Monthly => "Month",
        }
    }
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::Daily
    }
}

/// Inclusive date-time window the caller should fetch lessons for.
///
/// `start` is the first covered instant (00:00:00.000 of the first grid
/// day) and `end` the last (23:59:59.999 of the last grid day), so the
/// window can be handed to an inclusive range query as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FetchRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// A single cell of the rendered calendar grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    /// Calendar date of the cell; `None` only for the leading padding
    /// cells of a monthly grid.
    pub date: Option<NaiveDate>,
    /// False only for padding cells.
    pub is_current_period: bool,
    /// Lessons whose wall-clock calendar date equals `date`, in the
    /// order they arrived from the data source.
    pub lessons: Vec<LessonEvent>,
}

impl GridCell {
    /// A real day cell with no lessons bound yet.
    pub fn day(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            is_current_period: true,
            lessons: Vec::new(),
        }
    }

    /// A leading padding cell for monthly grid alignment.
    pub fn padding() -> Self {
        Self {
            date: None,
            is_current_period: false,
            lessons: Vec::new(),
        }
    }
}

/// Everything one render pass needs: the cells for the renderer and the
/// fetch window for the caller's next data request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableView {
    pub mode: ViewMode,
    pub anchor: NaiveDate,
    pub range: FetchRange,
    pub cells: Vec<GridCell>,
}

/// Get the human-readable name for a month number (1-12).
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Invalid Month",
    }
}

/// Get the weekday name for a Sunday-first index (0 = Sunday).
pub fn weekday_name(day: u32) -> &'static str {
    match day {
        0 => "Sunday",
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        4 => "Thursday",
        5 => "Friday",
        6 => "Saturday",
        _ => "Invalid",
    }
}
