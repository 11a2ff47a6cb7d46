//! Subject schedule endpoints and rule normalization.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use studynamic_cal::cal::model::{ScheduleRule, Subject, WeekType};
use studynamic_cal::cal::parse::{parse_wall_time, weekday_from_wire, weekday_to_wire};
use studynamic_core::constants::SCHEDULES_ROUTE;

use super::one_or_many;
use crate::client::ApiClient;
use crate::error::ApiResult;

/// A time-of-day as the .NET backend serializes it: either a `TimeSpan`
/// string (`HH:MM:SS`) or a component object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeSpanDto {
    Text(String),
    Parts {
        #[serde(default)]
        hours: u32,
        #[serde(default)]
        minutes: u32,
        #[serde(default)]
        seconds: u32,
    },
}

impl TimeSpanDto {
    /// ## Summary
    /// Resolves either wire form to a wall-clock time, if valid.
    #[must_use]
    pub fn to_time(&self) -> Option<NaiveTime> {
        match self {
            Self::Text(text) => parse_wall_time(text).ok(),
            Self::Parts {
                hours,
                minutes,
                seconds,
            } => NaiveTime::from_hms_opt(*hours, *minutes, *seconds),
        }
    }
}

/// A schedule record as the backend returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDto {
    pub id: i64,
    pub subject_id: i64,
    pub day_of_week: i64,
    #[serde(default)]
    pub start_time: Option<TimeSpanDto>,
    #[serde(default)]
    pub duration_minutes: Option<i64>,
    #[serde(default)]
    pub week_type: Option<i64>,
}

/// The shape the backend expects on create/update. Times go out as
/// `HH:MM:SS` strings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleWriteDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub subject_id: i64,
    pub day_of_week: i64,
    pub start_time: String,
    pub duration_minutes: i64,
    pub week_type: i64,
}

impl ScheduleWriteDto {
    #[must_use]
    pub fn from_rule(rule: &ScheduleRule) -> Self {
        Self {
            id: (rule.id != 0).then_some(rule.id),
            subject_id: rule.subject_id,
            day_of_week: weekday_to_wire(rule.day_of_week),
            start_time: rule.start_time.format("%H:%M:%S").to_string(),
            duration_minutes: i64::from(rule.duration_minutes),
            week_type: rule.week_type.as_wire(),
        }
    }
}

/// ## Summary
/// Normalizes fetched schedule records into validated rules.
///
/// Skip-and-continue: a record with an out-of-range weekday, an unknown
/// week type, or a non-positive duration is dropped with a warning. A
/// missing or unparseable start time falls back to `default_start`
/// (configured, canonically 08:00) rather than dropping the record, since
/// the slot is still worth showing. A batch is never failed by one row.
#[must_use]
pub fn normalize_schedules(
    dtos: &[ScheduleDto],
    subjects: &[Subject],
    default_start: NaiveTime,
) -> Vec<ScheduleRule> {
    dtos.iter()
        .filter_map(|dto| normalize_schedule(dto, subjects, default_start))
        .collect()
}

fn normalize_schedule(
    dto: &ScheduleDto,
    subjects: &[Subject],
    default_start: NaiveTime,
) -> Option<ScheduleRule> {
    let Ok(day_of_week) = weekday_from_wire(dto.day_of_week) else {
        tracing::warn!(
            schedule_id = dto.id,
            day_of_week = dto.day_of_week,
            "Skipping schedule with out-of-range weekday"
        );
        return None;
    };

    // Absent week type means every week; an unknown value is a bad record.
    let Some(week_type) = WeekType::from_wire(dto.week_type.unwrap_or(0)) else {
        tracing::warn!(
            schedule_id = dto.id,
            week_type = dto.week_type,
            "Skipping schedule with unknown week type"
        );
        return None;
    };

    let duration = dto.duration_minutes.unwrap_or(0);
    let Ok(duration_minutes) = u32::try_from(duration) else {
        tracing::warn!(
            schedule_id = dto.id,
            duration_minutes = duration,
            "Skipping schedule with negative duration"
        );
        return None;
    };
    if duration_minutes == 0 {
        tracing::warn!(
            schedule_id = dto.id,
            "Skipping schedule with missing or zero duration"
        );
        return None;
    }

    let start_time = dto
        .start_time
        .as_ref()
        .and_then(TimeSpanDto::to_time)
        .unwrap_or_else(|| {
            tracing::warn!(
                schedule_id = dto.id,
                default_start = %default_start,
                "Schedule start time missing or unparseable, using default"
            );
            default_start
        });

    let subject_title = subjects
        .iter()
        .find(|subject| subject.id == dto.subject_id)
        .map_or_else(
            || format!("Subject {}", dto.subject_id),
            |subject| subject.title.clone(),
        );

    ScheduleRule::new(
        dto.id,
        dto.subject_id,
        subject_title,
        day_of_week,
        start_time,
        duration_minutes,
        week_type,
    )
    .ok()
}

impl ApiClient {
    /// ## Summary
    /// Fetches all schedule records for the authenticated user.
    ///
    /// ## Errors
    /// Returns an error on transport failure, a non-success status, or an
    /// undecodable body.
    pub async fn schedules(&self) -> ApiResult<Vec<ScheduleDto>> {
        one_or_many(self.get_value(SCHEDULES_ROUTE).await?)
    }

    /// ## Summary
    /// Fetches the schedule records of one subject.
    ///
    /// ## Errors
    /// Returns an error on transport failure, a non-success status, or an
    /// undecodable body.
    pub async fn schedules_for_subject(&self, subject_id: i64) -> ApiResult<Vec<ScheduleDto>> {
        one_or_many(
            self.get_value(&format!("{SCHEDULES_ROUTE}/subject/{subject_id}"))
                .await?,
        )
    }

    /// ## Summary
    /// Creates a schedule record.
    ///
    /// ## Errors
    /// Returns an error on transport failure, a non-success status, or an
    /// undecodable body.
    pub async fn add_schedule(&self, schedule: &ScheduleWriteDto) -> ApiResult<ScheduleDto> {
        self.post_json(SCHEDULES_ROUTE, schedule).await
    }

    /// ## Summary
    /// Updates a schedule record. The backend may answer 204 No Content;
    /// callers then keep the value they sent.
    ///
    /// ## Errors
    /// Returns an error on transport failure, a non-success status, or an
    /// undecodable body.
    pub async fn update_schedule(
        &self,
        schedule_id: i64,
        schedule: &ScheduleWriteDto,
    ) -> ApiResult<Option<ScheduleDto>> {
        self.put_json(&format!("{SCHEDULES_ROUTE}/{schedule_id}"), schedule)
            .await
    }

    /// ## Summary
    /// Deletes a schedule record.
    ///
    /// ## Errors
    /// Returns an error on transport failure or a non-success status.
    pub async fn delete_schedule(&self, schedule_id: i64) -> ApiResult<()> {
        self.delete(&format!("{SCHEDULES_ROUTE}/{schedule_id}")).await
    }
}
