//! Dashboard summary figures derived from the assembled feed.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

use super::assemble::CalendarItem;
use crate::cal::model::{Event, Task};

/// The side-panel counters next to the calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Tasks not yet completed.
    pub pending_tasks: usize,
    /// One-off events on the calendar.
    pub upcoming_events: usize,
    /// Distinct days in the anchor's month with at least one item.
    pub busy_days: usize,
}

impl Summary {
    /// ## Summary
    /// Computes the dashboard counters for the month containing `anchor`.
    #[must_use]
    pub fn compute(tasks: &[Task], events: &[Event], items: &[CalendarItem], anchor: NaiveDate) -> Self {
        let pending_tasks = tasks.iter().filter(|task| task.is_open()).count();

        let busy: BTreeSet<NaiveDate> = items
            .iter()
            .map(CalendarItem::date)
            .filter(|date| date.year() == anchor.year() && date.month() == anchor.month())
            .collect();

        Self {
            pending_tasks,
            upcoming_events: events.len(),
            busy_days: busy.len(),
        }
    }
}
