//! Wall-clock timestamp parsing.
//!
//! Lesson timestamps arrive as `YYYY-MM-DDTHH:MM[:SS][offset]` recorded
//! in institution-local wall-clock time. Routing them through a
//! timezone-aware constructor would shift the hour (and potentially the
//! date) by the host/UTC offset and corrupt which day a lesson appears
//! under, so this module extracts the literal numeric fields instead.
//! It is the single choke point every other component uses to read a
//! timestamp's calendar date.

use chrono::NaiveDate;
use thiserror::Error;

/// Why a lesson timestamp could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LessonTimeError {
    #[error("timestamp is empty")]
    Empty,
    #[error("missing 'T' separator in timestamp: {0}")]
    MissingTimeSeparator(String),
    #[error("malformed date part: {0}")]
    MalformedDate(String),
    #[error("malformed time part: {0}")]
    MalformedTime(String),
    #[error("no such calendar date: {year:04}-{month:02}-{day:02}")]
    ImpossibleDate { year: i32, month: u32, day: u32 },
}

/// A lesson timestamp read as literal local fields: the calendar date
/// plus hour and minute, with the embedded offset discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClock {
    pub date: NaiveDate,
    pub hour: u32,
    pub minute: u32,
}

/// Parse a lesson timestamp into its literal wall-clock fields.
///
/// Accepts `YYYY-MM-DDTHH:MM`, optional seconds (with or without a
/// fractional part), and an optional trailing offset (`Z`, `+08:00`,
/// `-04:00`), which is ignored.
pub fn parse_wall_clock(timestamp: &str) -> Result<WallClock, LessonTimeError> {
    let trimmed = timestamp.trim();
    if trimmed.is_empty() {
        return Err(LessonTimeError::Empty);
    }

    let (date_part, time_part) = trimmed
        .split_once('T')
        .ok_or_else(|| LessonTimeError::MissingTimeSeparator(trimmed.to_string()))?;

    let date = parse_date_fields(date_part)?;
    let (hour, minute) = parse_time_fields(time_part)?;

    Ok(WallClock { date, hour, minute })
}

/// Extract just the calendar date of a lesson timestamp.
///
/// Malformed input degrades to `None`; callers treat that as "cannot
/// place this lesson" rather than an error.
pub fn lesson_date(timestamp: &str) -> Option<NaiveDate> {
    parse_wall_clock(timestamp).ok().map(|wall| wall.date)
}

fn parse_date_fields(date_part: &str) -> Result<NaiveDate, LessonTimeError> {
    let malformed = || LessonTimeError::MalformedDate(date_part.to_string());

    let parts: Vec<&str> = date_part.split('-').collect();
    if parts.len() != 3 {
        return Err(malformed());
    }

    let year = parts[0].parse::<i32>().map_err(|_| malformed())?;
    let month = parts[1].parse::<u32>().map_err(|_| malformed())?;
    let day = parts[2].parse::<u32>().map_err(|_| malformed())?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(LessonTimeError::ImpossibleDate { year, month, day })
}

fn parse_time_fields(time_part: &str) -> Result<(u32, u32), LessonTimeError> {
    let malformed = || LessonTimeError::MalformedTime(time_part.to_string());

    // Drop the offset suffix; the clock fields never contain these
    // characters, so the first occurrence marks where the offset starts.
    let clock = match time_part.find(['+', '-', 'Z', 'z']) {
        Some(idx) => &time_part[..idx],
        None => time_part,
    };

    let mut fields = clock.split(':');
    let hour = fields
        .next()
        .and_then(|h| h.parse::<u32>().ok())
        .ok_or_else(malformed)?;
    let minute = fields
        .next()
        .and_then(|m| m.parse::<u32>().ok())
        .ok_or_else(malformed)?;

    if hour > 23 || minute > 59 {
        return Err(malformed());
    }

    Ok((hour, minute))
}
