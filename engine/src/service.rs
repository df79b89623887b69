//! Timetable view orchestration.
//!
//! Composes the range calculator, grid builder, and lesson binder into
//! one render pass. Every call recomputes the view from scratch from
//! the current `(mode, anchor, lessons)` inputs, so rapid repeated
//! navigation is safe: only the most recent state determines the next
//! fetch window and grid, and stale in-flight fetch results can simply
//! be dropped by the caller.

use chrono::NaiveDate;
use shared::{LessonEvent, TimetableView, ViewMode};
use tracing::{debug, info};

use crate::binder::bind_lessons;
use crate::grid::build_grid;
use crate::navigation::ViewState;
use crate::range::fetch_range;

/// Stateless facade over the engine's pure components.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimetableService;

impl TimetableService {
    pub fn new() -> Self {
        Self
    }

    /// Build a complete view for one render pass: the fetch window for
    /// the caller's next data request plus the cells with lessons bound.
    pub fn build_view(
        &self,
        mode: ViewMode,
        anchor: NaiveDate,
        lessons: &[LessonEvent],
    ) -> TimetableView {
        debug!(?mode, %anchor, lessons = lessons.len(), "building timetable view");

        let range = fetch_range(mode, anchor);
        let cells = bind_lessons(build_grid(mode, anchor), lessons);

        let bound: usize = cells.iter().map(|cell| cell.lessons.len()).sum();
        info!(
            ?mode,
            %anchor,
            cells = cells.len(),
            bound,
            "built timetable view"
        );

        TimetableView {
            mode,
            anchor,
            range,
            cells,
        }
    }

    /// Convenience for callers that hold a `ViewState`.
    pub fn build_view_for(&self, state: &ViewState, lessons: &[LessonEvent]) -> TimetableView {
        self.build_view(state.mode(), state.anchor(), lessons)
    }
}
