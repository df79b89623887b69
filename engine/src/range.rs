//! Fetch-window calculation.
//!
//! Given a view mode and an anchor date, derives the inclusive
//! `[start, end]` window the caller should request from the attendance
//! service. The window always covers exactly the days the grid builder
//! will lay out for the same `(mode, anchor)` pair.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use shared::{FetchRange, ViewMode};

/// Compute the inclusive fetch window for the given view.
pub fn fetch_range(mode: ViewMode, anchor: NaiveDate) -> FetchRange {
    let (first, last) = match mode {
        ViewMode::Daily => (anchor, anchor),
        ViewMode::Weekly => {
            let start = week_start(anchor);
            (start, start + Duration::days(6))
        }
        ViewMode::Monthly => (month_start(anchor), month_end(anchor)),
    };

    FetchRange {
        start: day_start(first),
        end: day_end(last),
    }
}

/// The Sunday on or before the given date. Weeks are anchor-relative
/// and Sunday-first, not ISO-numbered.
pub(crate) fn week_start(anchor: NaiveDate) -> NaiveDate {
    let offset = anchor.weekday().num_days_from_sunday();
    anchor - Duration::days(offset as i64)
}

/// Day 1 of the anchor's month.
pub(crate) fn month_start(anchor: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(anchor.year(), anchor.month(), 1)
        .expect("day 1 exists in every month")
}

/// The last day of the anchor's month: the day before the first of the
/// following month, so 28/29/30/31-day months and leap years fall out of
/// the arithmetic without a lookup table.
pub(crate) fn month_end(anchor: NaiveDate) -> NaiveDate {
    let (next_year, next_month) = if anchor.month() == 12 {
        (anchor.year() + 1, 1)
    } else {
        (anchor.year(), anchor.month() + 1)
    };
    let first_of_next =
        NaiveDate::from_ymd_opt(next_year, next_month, 1).expect("valid next month");
    first_of_next.pred_opt().expect("previous day exists")
}

fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(0, 0, 0, 0).expect("midnight is always valid")
}

fn day_end(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .expect("end of day is always valid")
}
