//! Concrete occurrences materialized from schedule rules.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// One dated occurrence of a weekly class slot.
///
/// Instances are ephemeral: derived synchronously from the rule set on
/// every recompute, never persisted, never mutated. The id is a
/// deterministic composite so re-derivation is idempotent and UI diffing
/// stays stable across recomputes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventInstance {
    /// `subject-{subjectId}-schedule-{scheduleId}-{occurrenceDate}`.
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub subject_id: i64,
    pub schedule_id: i64,
}

impl EventInstance {
    /// Instances always represent recurring entries; the tag lets feed
    /// consumers distinguish them from tasks and one-off events.
    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        true
    }
}

/// ## Summary
/// Formats the deterministic occurrence id for a rule and date.
///
/// The date renders as ISO `YYYY-MM-DD`, so ids sort chronologically
/// within one rule.
#[must_use]
pub fn occurrence_id(subject_id: i64, schedule_id: i64, date: NaiveDate) -> String {
    format!("subject-{subject_id}-schedule-{schedule_id}-{date}")
}
