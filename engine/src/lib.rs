//! Calendar/timetable view-state engine.
//!
//! This crate contains all business logic for turning a flat list of
//! lesson events into daily, weekly, and monthly calendar presentations:
//! wall-clock timestamp parsing, fetch-window calculation, grid layout,
//! lesson-to-cell binding, and period navigation. The UI should only
//! handle presentation concerns; everything here is a pure computation
//! over in-memory values with no network or rendering dependencies.

pub mod binder;
pub mod date_utils;
pub mod grid;
pub mod navigation;
pub mod range;
pub mod service;

pub use date_utils::{LessonTimeError, WallClock};
pub use navigation::ViewState;
pub use service::TimetableService;
