//! One-call fetch of everything the calendar views need.

use chrono::NaiveTime;

use studynamic_cal::cal::model::{Event, ScheduleRule, Subject, Task};
use studynamic_cal::cal::parse::parse_wall_time;
use studynamic_core::config::CalendarConfig;

use crate::client::ApiClient;
use crate::endpoints::events::{EventScope, normalize_events};
use crate::endpoints::schedules::normalize_schedules;
use crate::endpoints::tasks::normalize_tasks;
use crate::error::ApiResult;

/// ## Summary
/// Resolves the configured fallback class start time.
///
/// The configuration value is a `HH:MM` string; if it is itself
/// unparseable the canonical 08:00 default applies.
#[must_use]
pub fn default_start_time(config: &CalendarConfig) -> NaiveTime {
    parse_wall_time(&config.default_start_time).unwrap_or_else(|err| {
        tracing::warn!(
            configured = %config.default_start_time,
            error = %err,
            "Configured default start time is invalid, using 08:00"
        );
        NaiveTime::from_hms_opt(8, 0, 0).unwrap_or(NaiveTime::MIN)
    })
}

/// Everything a calendar page renders, already normalized.
#[derive(Debug, Clone)]
pub struct CalendarData {
    pub subjects: Vec<Subject>,
    pub rules: Vec<ScheduleRule>,
    pub tasks: Vec<Task>,
    pub events: Vec<Event>,
}

/// ## Summary
/// Fetches subjects, schedules, tasks, and events concurrently and
/// normalizes them into domain types.
///
/// The four requests run in parallel; the first failure fails the fetch
/// (per-record data-quality problems are handled by normalization, not
/// here).
///
/// ## Errors
/// Returns the first transport, status, or decode error among the
/// requests.
pub async fn fetch_calendar_data(
    client: &ApiClient,
    user_id: i64,
    default_start: NaiveTime,
) -> ApiResult<CalendarData> {
    let (subject_dtos, schedule_dtos, task_dtos, event_dtos) = futures::try_join!(
        client.subjects(),
        client.schedules(),
        client.tasks_for_user(user_id),
        client.events(EventScope::User(user_id)),
    )?;

    let subjects: Vec<Subject> = subject_dtos
        .into_iter()
        .map(crate::endpoints::subjects::SubjectDto::into_subject)
        .collect();
    let rules = normalize_schedules(&schedule_dtos, &subjects, default_start);
    let tasks = normalize_tasks(&task_dtos);
    let events = normalize_events(&event_dtos);

    tracing::debug!(
        subject_count = subjects.len(),
        rule_count = rules.len(),
        task_count = tasks.len(),
        event_count = events.len(),
        "Fetched calendar data"
    );

    Ok(CalendarData {
        subjects,
        rules,
        tasks,
        events,
    })
}
