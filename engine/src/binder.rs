//! Lesson-to-cell binding.
//!
//! Joins the externally fetched lesson list onto grid cells by exact
//! calendar-date equality of the wall-clock fields. Never a time-range
//! overlap and never a timezone-aware comparison: a lesson recorded as
//! `2025-12-31T09:00:00+08:00` belongs to 31 December no matter where
//! the host process runs.

use chrono::NaiveDate;
use shared::{GridCell, LessonEvent};
use tracing::debug;

use crate::date_utils::lesson_date;

/// Populate each cell's `lessons` with the events whose calendar date
/// equals the cell's date, preserving the input list's relative order.
///
/// Padding cells never receive lessons. Lessons with an unreadable
/// start time bind nowhere; the view renders without them. Pure
/// function of its inputs, so rebinding after a refreshed fetch is a
/// clean recomputation with no hidden state.
pub fn bind_lessons(mut cells: Vec<GridCell>, lessons: &[LessonEvent]) -> Vec<GridCell> {
    let dated: Vec<(Option<NaiveDate>, &LessonEvent)> = lessons
        .iter()
        .map(|lesson| {
            let date = lesson_date(&lesson.start_time);
            if date.is_none() {
                debug!(
                    lesson_id = %lesson.id,
                    start_time = %lesson.start_time,
                    "skipping lesson with unreadable start time"
                );
            }
            (date, lesson)
        })
        .collect();

    for cell in &mut cells {
        let Some(cell_date) = cell.date else {
            continue;
        };
        cell.lessons = dated
            .iter()
            .filter(|(date, _)| *date == Some(cell_date))
            .map(|(_, lesson)| (*lesson).clone())
            .collect();
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::build_grid;
    use shared::ViewMode;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn lesson(id: &str, start: &str, end: &str) -> LessonEvent {
        LessonEvent {
            id: id.to_string(),
            module_code: "CS2103".to_string(),
            module_name: "Software Engineering".to_string(),
            lesson_type: "Lecture".to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            location: "LT19".to_string(),
        }
    }

    fn cell_for<'a>(cells: &'a [GridCell], target: NaiveDate) -> &'a GridCell {
        cells
            .iter()
            .find(|c| c.date == Some(target))
            .expect("cell present")
    }

    #[test]
    fn test_binds_by_literal_date_regardless_of_offset() {
        let cells = build_grid(ViewMode::Monthly, date(2025, 12, 15));
        let lessons = vec![lesson(
            "l1",
            "2025-12-31T09:00:00+08:00",
            "2025-12-31T11:00:00+08:00",
        )];

        let bound = bind_lessons(cells, &lessons);

        assert_eq!(cell_for(&bound, date(2025, 12, 31)).lessons.len(), 1);
        assert!(cell_for(&bound, date(2025, 12, 30)).lessons.is_empty());
    }

    #[test]
    fn test_multiple_lessons_on_one_day_keep_input_order() {
        let cells = build_grid(ViewMode::Daily, date(2025, 6, 13));
        let lessons = vec![
            lesson("afternoon", "2025-06-13T14:00:00+08:00", "2025-06-13T16:00:00+08:00"),
            lesson("morning", "2025-06-13T09:00:00+08:00", "2025-06-13T10:00:00+08:00"),
        ];

        let bound = bind_lessons(cells, &lessons);

        let ids: Vec<&str> = bound[0].lessons.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["afternoon", "morning"]);
    }

    #[test]
    fn test_lessons_outside_grid_bind_nowhere() {
        let cells = build_grid(ViewMode::Weekly, date(2025, 6, 11));
        let lessons = vec![lesson(
            "next-month",
            "2025-07-13T09:00:00+08:00",
            "2025-07-13T10:00:00+08:00",
        )];

        let bound = bind_lessons(cells, &lessons);

        assert!(bound.iter().all(|c| c.lessons.is_empty()));
    }

    #[test]
    fn test_malformed_start_time_is_skipped_silently() {
        let cells = build_grid(ViewMode::Daily, date(2025, 6, 13));
        let lessons = vec![
            lesson("bad", "not-a-timestamp", "also-bad"),
            lesson("good", "2025-06-13T09:00:00+08:00", "2025-06-13T10:00:00+08:00"),
        ];

        let bound = bind_lessons(cells, &lessons);

        assert_eq!(bound[0].lessons.len(), 1);
        assert_eq!(bound[0].lessons[0].id, "good");
    }

    #[test]
    fn test_padding_cells_never_receive_lessons() {
        // July 2025 starts on a Tuesday, so the grid has padding cells.
        let cells = build_grid(ViewMode::Monthly, date(2025, 7, 1));
        let lessons = vec![lesson(
            "l1",
            "2025-07-01T09:00:00+08:00",
            "2025-07-01T10:00:00+08:00",
        )];

        let bound = bind_lessons(cells, &lessons);

        assert!(bound
            .iter()
            .filter(|c| c.date.is_none())
            .all(|c| c.lessons.is_empty()));
        assert_eq!(cell_for(&bound, date(2025, 7, 1)).lessons.len(), 1);
    }

    #[test]
    fn test_binding_is_idempotent() {
        let lessons = vec![
            lesson("l1", "2025-06-09T09:00:00+08:00", "2025-06-09T10:00:00+08:00"),
            lesson("l2", "2025-06-11T14:00:00+08:00", "2025-06-11T16:00:00+08:00"),
        ];

        let first = bind_lessons(build_grid(ViewMode::Weekly, date(2025, 6, 11)), &lessons);
        let second = bind_lessons(build_grid(ViewMode::Weekly, date(2025, 6, 11)), &lessons);

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_lesson_list_is_a_valid_outcome() {
        let bound = bind_lessons(build_grid(ViewMode::Monthly, date(2025, 6, 1)), &[]);

        assert_eq!(bound.len(), 30);
        assert!(bound.iter().all(|c| c.lessons.is_empty()));
    }
}
