//! Weekly class-slot definitions: the recurrence rules the expander
//! materializes into concrete occurrences.

use chrono::{NaiveTime, Weekday};
use studynamic_core::error::{CoreError, CoreResult};

/// Which calendar weeks a schedule rule applies to.
///
/// Week parity is month-relative: the week-of-month number of an occurrence
/// date decides inclusion (see `cal::expand`). Week 0 (days before the
/// month's first occurrence of the rule's weekday) counts as even.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeekType {
    /// Every week.
    All,
    /// Even-numbered weeks of the month only.
    Even,
    /// Odd-numbered weeks of the month only.
    Odd,
}

impl WeekType {
    /// ## Summary
    /// Converts the backend's integer encoding (0 = all, 1 = even, 2 = odd).
    #[must_use]
    pub const fn from_wire(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::All),
            1 => Some(Self::Even),
            2 => Some(Self::Odd),
            _ => None,
        }
    }

    /// ## Summary
    /// Returns the backend's integer encoding for this week type.
    #[must_use]
    pub const fn as_wire(self) -> i64 {
        match self {
            Self::All => 0,
            Self::Even => 1,
            Self::Odd => 2,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Even => "even",
            Self::Odd => "odd",
        }
    }
}

impl std::fmt::Display for WeekType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One weekly class slot of a subject.
///
/// Validated on construction; a rule that exists always expands cleanly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRule {
    pub id: i64,
    pub subject_id: i64,
    /// Display name copied onto generated occurrences.
    pub subject_title: String,
    pub day_of_week: Weekday,
    pub start_time: NaiveTime,
    pub duration_minutes: u32,
    pub week_type: WeekType,
}

impl ScheduleRule {
    /// ## Summary
    /// Builds a schedule rule, enforcing the domain invariants.
    ///
    /// ## Errors
    /// Returns an error if `duration_minutes` is zero.
    pub fn new(
        id: i64,
        subject_id: i64,
        subject_title: impl Into<String>,
        day_of_week: Weekday,
        start_time: NaiveTime,
        duration_minutes: u32,
        week_type: WeekType,
    ) -> CoreResult<Self> {
        if duration_minutes == 0 {
            return Err(CoreError::InvariantViolation(
                "schedule duration must be positive",
            ));
        }

        Ok(Self {
            id,
            subject_id,
            subject_title: subject_title.into(),
            day_of_week,
            start_time,
            duration_minutes,
            week_type,
        })
    }
}
