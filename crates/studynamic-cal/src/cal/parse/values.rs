//! Value parsers for backend wall-clock formats.
//!
//! The backend is a .NET service: times-of-day arrive as `TimeSpan` strings
//! (`HH:MM:SS`), the UI produces `HH:MM`, and datetimes are local ISO-8601
//! without an offset. All conversions between the wire's Sunday-based
//! weekday integers and `chrono::Weekday` happen here and nowhere else.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use super::error::{ParseError, ParseResult};

/// Parses a wall-clock time-of-day (`HH:MM` or `HH:MM:SS`).
///
/// Hours may be one or two digits; the backend pads, the UI does not.
///
/// ## Errors
/// Returns an error if the string has the wrong shape or a component is
/// out of range.
pub fn parse_wall_time(s: &str) -> ParseResult<NaiveTime> {
    let invalid = || ParseError::InvalidTime(s.to_string());

    let mut parts = s.split(':');
    let hour = parts
        .next()
        .and_then(|p| p.parse::<u32>().ok())
        .ok_or_else(invalid)?;
    let minute = parts
        .next()
        .and_then(|p| p.parse::<u32>().ok())
        .ok_or_else(invalid)?;
    let second = parts
        .next()
        .map_or(Some(0), |p| p.parse::<u32>().ok())
        .ok_or_else(invalid)?;
    if parts.next().is_some() {
        return Err(invalid());
    }

    NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(invalid)
}

/// Parses a calendar date, tolerating a trailing time portion.
///
/// The backend serializes task due dates as full datetimes
/// (`2026-03-02T00:00:00`); only the date part is meaningful.
///
/// ## Errors
/// Returns an error if the date part is not valid ISO `YYYY-MM-DD`.
pub fn parse_local_date(s: &str) -> ParseResult<NaiveDate> {
    let date_part = s.split('T').next().unwrap_or(s);
    date_part
        .parse::<NaiveDate>()
        .map_err(|_| ParseError::InvalidDate(s.to_string()))
}

/// Parses a local ISO-8601 datetime (`YYYY-MM-DDTHH:MM:SS`).
///
/// Fractional seconds are accepted and discarded; a trailing `Z` is
/// stripped since the backend emits wall-clock local values either way.
///
/// ## Errors
/// Returns an error if the string is not a valid local datetime.
pub fn parse_local_datetime(s: &str) -> ParseResult<NaiveDateTime> {
    let trimmed = s.strip_suffix('Z').unwrap_or(s);

    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M"))
        .map_err(|_| ParseError::InvalidDateTime(s.to_string()))
}

/// Converts the wire's weekday encoding (0 = Sunday .. 6 = Saturday) to
/// `chrono::Weekday`.
///
/// ## Errors
/// Returns an error for values outside 0..=6; out-of-range weekdays are
/// never clamped.
pub const fn weekday_from_wire(value: i64) -> ParseResult<Weekday> {
    match value {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        _ => Err(ParseError::WeekdayOutOfRange(value)),
    }
}

/// Converts a `chrono::Weekday` back to the wire's Sunday-based encoding.
#[must_use]
pub fn weekday_to_wire(weekday: Weekday) -> i64 {
    i64::from(weekday.num_days_from_sunday())
}
