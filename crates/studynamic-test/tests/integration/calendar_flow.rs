//! End-to-end flow: backend JSON -> normalized domain -> expansion ->
//! assembled feed -> summary counters.

use chrono::{NaiveDate, NaiveTime, Weekday};

use studynamic_test::api::endpoints::events::{EventDto, normalize_events};
use studynamic_test::api::endpoints::schedules::{ScheduleDto, normalize_schedules};
use studynamic_test::api::endpoints::subjects::SubjectDto;
use studynamic_test::api::endpoints::tasks::{TaskDto, normalize_tasks};
use studynamic_test::cal::cal::expand::{CalendarWindow, expand};
use studynamic_test::cal::cal::feed::{Summary, assemble, items_on};
use studynamic_test::cal::cal::model::Subject;
use studynamic_test::component::types::ItemKind;

use super::helpers;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn default_start() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 0, 0).expect("valid time")
}

fn subjects() -> Vec<Subject> {
    let dtos: Vec<SubjectDto> =
        serde_json::from_value(helpers::subjects_payload()).expect("subjects decode");
    dtos.into_iter().map(SubjectDto::into_subject).collect()
}

#[test_log::test]
fn normalization_drops_only_broken_records() {
    let dtos: Vec<ScheduleDto> =
        serde_json::from_value(helpers::schedules_payload()).expect("schedules decode");

    let rules = normalize_schedules(&dtos, &subjects(), default_start());

    // Record 19 carries dayOfWeek 8 and must be dropped; the rest survive.
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].id, 17);
    assert_eq!(rules[0].subject_title, "Algebra");
    assert_eq!(rules[1].id, 18);
    assert_eq!(rules[1].day_of_week, Weekday::Wed);
}

#[test_log::test]
fn march_expansion_matches_week_parity() {
    let dtos: Vec<ScheduleDto> =
        serde_json::from_value(helpers::schedules_payload()).expect("schedules decode");
    let rules = normalize_schedules(&dtos, &subjects(), default_start());
    let window = CalendarWindow::new(date(2026, 3, 1), date(2026, 3, 31));

    let instances = expand(&rules, window);

    // Five Mondays for the weekly rule, two odd-week Wednesdays (Mar 4, 18)
    // for the biweekly one.
    assert_eq!(instances.len(), 7);

    let mondays: Vec<&_> = instances.iter().filter(|i| i.schedule_id == 17).collect();
    assert_eq!(mondays.len(), 5);
    assert_eq!(mondays[0].start, date(2026, 3, 2).and_time(NaiveTime::from_hms_opt(9, 0, 0).expect("valid")));
    assert_eq!(mondays[0].end, date(2026, 3, 2).and_time(NaiveTime::from_hms_opt(10, 30, 0).expect("valid")));

    let wednesdays: Vec<NaiveDate> = instances
        .iter()
        .filter(|i| i.schedule_id == 18)
        .map(|i| i.start.date())
        .collect();
    assert_eq!(wednesdays, vec![date(2026, 3, 4), date(2026, 3, 18)]);
}

#[test_log::test]
fn assembled_feed_is_chronological_and_complete() {
    let schedule_dtos: Vec<ScheduleDto> =
        serde_json::from_value(helpers::schedules_payload()).expect("schedules decode");
    let task_dtos: Vec<TaskDto> =
        serde_json::from_value(helpers::tasks_payload()).expect("tasks decode");
    let event_dtos: Vec<EventDto> =
        serde_json::from_value(helpers::events_payload()).expect("events decode");

    let rules = normalize_schedules(&schedule_dtos, &subjects(), default_start());
    let tasks = normalize_tasks(&task_dtos);
    let events = normalize_events(&event_dtos);
    let window = CalendarWindow::new(date(2026, 3, 1), date(2026, 3, 31));
    let instances = expand(&rules, window);

    let items = assemble(&tasks, &events, &instances);
    assert_eq!(items.len(), tasks.len() + events.len() + instances.len());
    assert!(items.windows(2).all(|pair| pair[0].start <= pair[1].start));

    // March 4th shows the completed task (midnight) before the afternoon class.
    let fourth = items_on(&items, date(2026, 3, 4));
    assert_eq!(fourth.len(), 2);
    assert_eq!(fourth[0].id, "task-32");
    assert_eq!(fourth[0].kind, ItemKind::Task);
    assert_eq!(fourth[1].id, "subject-5-schedule-18-2026-03-04");
    assert_eq!(fourth[1].kind, ItemKind::ClassSession);
}

#[test_log::test]
fn summary_counts_match_fixture() {
    let schedule_dtos: Vec<ScheduleDto> =
        serde_json::from_value(helpers::schedules_payload()).expect("schedules decode");
    let task_dtos: Vec<TaskDto> =
        serde_json::from_value(helpers::tasks_payload()).expect("tasks decode");
    let event_dtos: Vec<EventDto> =
        serde_json::from_value(helpers::events_payload()).expect("events decode");

    let rules = normalize_schedules(&schedule_dtos, &subjects(), default_start());
    let tasks = normalize_tasks(&task_dtos);
    let events = normalize_events(&event_dtos);
    let window = CalendarWindow::new(date(2026, 3, 1), date(2026, 3, 31));
    let items = assemble(&tasks, &events, &expand(&rules, window));

    let summary = Summary::compute(&tasks, &events, &items, date(2026, 3, 15));

    assert_eq!(summary.pending_tasks, 1);
    assert_eq!(summary.upcoming_events, 2);
    // Busy days in March: class Mondays (2, 9, 16, 23, 30), odd Wednesdays
    // (4, 18), task deadlines (4, 10), events (5, 9) -> nine distinct days.
    assert_eq!(summary.busy_days, 9);
}

#[test_log::test]
fn rederivation_is_idempotent_end_to_end() {
    let schedule_dtos: Vec<ScheduleDto> =
        serde_json::from_value(helpers::schedules_payload()).expect("schedules decode");
    let rules = normalize_schedules(&schedule_dtos, &subjects(), default_start());
    let window = CalendarWindow::around(date(2026, 3, 15), 30, 60);

    let first = expand(&rules, window);
    let second = expand(&rules, window);
    assert_eq!(first, second);
}
