//! Weekly rule expansion and month-relative week parity.

use chrono::{Datelike, Days, NaiveDate, TimeDelta};

use super::window::CalendarWindow;
use crate::cal::model::{EventInstance, ScheduleRule, WeekType, occurrence_id};

/// ## Summary
/// Expands a set of schedule rules into concrete occurrences over a window.
///
/// Occurrences are chronological within each rule; across rules they follow
/// the input rule order. Callers that need one chronological stream sort at
/// assembly time (`cal::feed`).
#[must_use]
pub fn expand(rules: &[ScheduleRule], window: CalendarWindow) -> Vec<EventInstance> {
    if window.is_empty() {
        return Vec::new();
    }

    let mut instances = Vec::new();
    for rule in rules {
        instances.extend(expand_rule(rule, window));
    }

    tracing::debug!(
        rule_count = rules.len(),
        instance_count = instances.len(),
        window_start = %window.start(),
        window_end = %window.end(),
        "Expanded schedule rules"
    );

    instances
}

/// ## Summary
/// Expands one schedule rule into its dated occurrences within the window.
///
/// Walks the window week by week from the first date on or after
/// `window.start()` that falls on the rule's weekday, keeping the dates
/// whose month-relative week number matches the rule's week parity.
///
/// End timestamps use real date arithmetic: a slot that crosses midnight
/// ends on the next calendar date.
#[must_use]
pub fn expand_rule(rule: &ScheduleRule, window: CalendarWindow) -> Vec<EventInstance> {
    if window.is_empty() {
        return Vec::new();
    }

    let duration = TimeDelta::minutes(i64::from(rule.duration_minutes));
    let mut occurrences = Vec::new();
    let mut date = first_on_or_after(window.start(), rule.day_of_week);

    while date <= window.end() {
        if applies(rule.week_type, week_of_month(date)) {
            let start = date.and_time(rule.start_time);
            if let Some(end) = start.checked_add_signed(duration) {
                occurrences.push(EventInstance {
                    id: occurrence_id(rule.subject_id, rule.id, date),
                    title: rule.subject_title.clone(),
                    start,
                    end,
                    subject_id: rule.subject_id,
                    schedule_id: rule.id,
                });
            }
        }

        match date.checked_add_days(Days::new(7)) {
            Some(next) => date = next,
            None => break,
        }
    }

    tracing::trace!(
        schedule_id = rule.id,
        subject_id = rule.subject_id,
        week_type = %rule.week_type,
        occurrence_count = occurrences.len(),
        "Expanded schedule rule"
    );

    occurrences
}

/// Returns whether a week number matches the rule's parity class.
const fn applies(week_type: WeekType, week_number: i64) -> bool {
    match week_type {
        WeekType::All => true,
        WeekType::Even => week_number % 2 == 0,
        WeekType::Odd => week_number % 2 != 0,
    }
}

/// First date on or after `start` that falls on `weekday`.
fn first_on_or_after(start: NaiveDate, weekday: chrono::Weekday) -> NaiveDate {
    let offset = (i64::from(weekday.num_days_from_sunday())
        - i64::from(start.weekday().num_days_from_sunday()))
    .rem_euclid(7);

    start
        .checked_add_days(Days::new(offset.unsigned_abs()))
        .unwrap_or(NaiveDate::MAX)
}

/// Month-relative week number of a date:
/// `ceil((day_of_month - weekday_index) / 7)` with Sunday-based weekday
/// indices, so the parity grouping matches what the client UI displays.
/// Days before the month's first occurrence of their weekday land in
/// week 0, which counts as even.
fn week_of_month(date: NaiveDate) -> i64 {
    let day = i64::from(date.day());
    let weekday_index = i64::from(date.weekday().num_days_from_sunday());
    (day - weekday_index + 6).div_euclid(7)
}
