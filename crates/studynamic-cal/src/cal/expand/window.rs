//! Bounded date windows for expansion.

use chrono::{Days, NaiveDate};

/// The inclusive date range over which recurring rules are expanded.
///
/// Call sites size their own windows (dashboard, full calendar, group
/// page); lookback and lookahead are parameters, not constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl CalendarWindow {
    /// ## Summary
    /// Builds a window from explicit inclusive bounds.
    ///
    /// An inverted window (`end` before `start`) is representable and
    /// simply expands to nothing; misconfiguration degrades to an empty
    /// calendar rather than an error.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// ## Summary
    /// Builds a window around an anchor date: `lookback_days` before it
    /// through `lookahead_days` after it, inclusive.
    ///
    /// Out-of-range arithmetic saturates at the calendar's bounds.
    #[must_use]
    pub fn around(anchor: NaiveDate, lookback_days: u16, lookahead_days: u16) -> Self {
        let start = anchor
            .checked_sub_days(Days::new(u64::from(lookback_days)))
            .unwrap_or(NaiveDate::MIN);
        let end = anchor
            .checked_add_days(Days::new(u64::from(lookahead_days)))
            .unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }

    #[must_use]
    pub const fn start(self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub const fn end(self) -> NaiveDate {
        self.end
    }

    /// True when the window contains no dates at all.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.end < self.start
    }
}
