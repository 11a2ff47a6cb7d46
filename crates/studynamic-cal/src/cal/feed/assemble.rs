//! Uniform display items and the chronological merge.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use studynamic_core::types::ItemKind;

use crate::cal::model::{Event, EventInstance, Task};

/// The uniform shape calendar views consume.
///
/// Serializes with local ISO-8601 timestamps and a kind tag, which is what
/// the rendering shell maps onto its widget's `start`/`end`/`extendedProps`
/// fields; widget-specific names stay in the shell, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarItem {
    /// Unique across kinds: backend ids are namespaced by kind, occurrence
    /// ids are already composite.
    pub id: String,
    pub title: String,
    pub kind: ItemKind,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
}

impl CalendarItem {
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: format!("task-{}", task.id),
            title: task.title.clone(),
            kind: ItemKind::Task,
            start: task.due_date.and_time(NaiveTime::MIN),
            end: None,
        }
    }

    #[must_use]
    pub fn from_event(event: &Event) -> Self {
        Self {
            id: format!("event-{}", event.id),
            title: event.title.clone(),
            kind: ItemKind::Event,
            start: event.start,
            end: event.end,
        }
    }

    #[must_use]
    pub fn from_instance(instance: &EventInstance) -> Self {
        Self {
            id: instance.id.clone(),
            title: instance.title.clone(),
            kind: ItemKind::ClassSession,
            start: instance.start,
            end: Some(instance.end),
        }
    }

    /// The calendar date an item is displayed under.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.start.date()
    }
}

/// ## Summary
/// Merges tasks, events, and class occurrences into one chronological
/// stream, sorted by start then id so equal-time items keep a stable order
/// across recomputes.
#[must_use]
pub fn assemble(tasks: &[Task], events: &[Event], instances: &[EventInstance]) -> Vec<CalendarItem> {
    let mut items: Vec<CalendarItem> = tasks
        .iter()
        .map(CalendarItem::from_task)
        .chain(events.iter().map(CalendarItem::from_event))
        .chain(instances.iter().map(CalendarItem::from_instance))
        .collect();

    items.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id)));

    tracing::debug!(
        task_count = tasks.len(),
        event_count = events.len(),
        session_count = instances.len(),
        "Assembled calendar feed"
    );

    items
}

/// ## Summary
/// Returns the items displayed under one calendar day, in feed order.
#[must_use]
pub fn items_on(items: &[CalendarItem], day: NaiveDate) -> Vec<&CalendarItem> {
    items.iter().filter(|item| item.date() == day).collect()
}

/// ## Summary
/// Returns up to `limit` items starting on or after the anchor, in feed
/// order. Feeds the dashboard's upcoming-items card.
#[must_use]
pub fn upcoming(items: &[CalendarItem], anchor: NaiveDateTime, limit: usize) -> Vec<&CalendarItem> {
    items
        .iter()
        .filter(|item| item.start >= anchor)
        .take(limit)
        .collect()
}
