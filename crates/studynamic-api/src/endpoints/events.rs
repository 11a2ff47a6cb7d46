//! One-off event endpoints and normalization.

use serde::{Deserialize, Serialize};
use studynamic_cal::cal::model::Event;
use studynamic_cal::cal::parse::parse_local_datetime;
use studynamic_core::constants::EVENTS_ROUTE;

use super::one_or_many;
use crate::client::ApiClient;
use crate::error::ApiResult;

/// Whose events to list: a user's own or a study group's shared ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventScope {
    User(i64),
    Group(i64),
}

/// An event as the backend returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub start_date_time: Option<String>,
    #[serde(default)]
    pub end_date_time: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub notification: Option<String>,
    #[serde(default)]
    pub group_id: Option<i64>,
    #[serde(default)]
    pub group_name: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
}

/// The shape the backend expects on create/update. Exactly one of
/// `user_id`/`group_id` is set.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventWriteDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    pub group_id: Option<i64>,
    pub title: String,
    pub start_date_time: Option<String>,
    pub end_date_time: Option<String>,
    pub description: Option<String>,
    pub notification: Option<String>,
}

impl EventWriteDto {
    #[must_use]
    pub fn from_event(event: &Event, scope: EventScope) -> Self {
        let (user_id, group_id) = match scope {
            EventScope::User(id) => (Some(id), None),
            EventScope::Group(id) => (None, Some(id)),
        };

        Self {
            id: (event.id != 0).then_some(event.id),
            user_id,
            group_id,
            title: event.title.clone(),
            start_date_time: Some(event.start.format("%Y-%m-%dT%H:%M:%S").to_string()),
            end_date_time: event
                .end
                .map(|end| end.format("%Y-%m-%dT%H:%M:%S").to_string()),
            description: (!event.description.is_empty()).then(|| event.description.clone()),
            notification: None,
        }
    }
}

/// ## Summary
/// Normalizes fetched event records.
///
/// An event without a parseable start cannot be placed on the calendar and
/// is skipped with a warning; a bad end degrades to an open-ended event.
#[must_use]
pub fn normalize_events(dtos: &[EventDto]) -> Vec<Event> {
    dtos.iter().filter_map(normalize_event).collect()
}

fn normalize_event(dto: &EventDto) -> Option<Event> {
    let Some(raw_start) = dto.start_date_time.as_deref() else {
        tracing::warn!(event_id = dto.id, "Skipping event without a start");
        return None;
    };
    let Ok(start) = parse_local_datetime(raw_start) else {
        tracing::warn!(
            event_id = dto.id,
            start = %raw_start,
            "Skipping event with unparseable start"
        );
        return None;
    };

    let end = dto
        .end_date_time
        .as_deref()
        .and_then(|raw| parse_local_datetime(raw).ok());

    Some(Event {
        id: dto.id,
        title: dto.title.clone(),
        start,
        end,
        description: dto.description.clone().unwrap_or_default(),
        group_id: dto.group_id,
        group_name: dto.group_name.clone(),
    })
}

impl ApiClient {
    /// ## Summary
    /// Fetches events for a user or a group.
    ///
    /// ## Errors
    /// Returns an error on transport failure, a non-success status, or an
    /// undecodable body.
    pub async fn events(&self, scope: EventScope) -> ApiResult<Vec<EventDto>> {
        let route = match scope {
            EventScope::User(user_id) => format!("{EVENTS_ROUTE}/user/{user_id}"),
            EventScope::Group(group_id) => format!("{EVENTS_ROUTE}/group/{group_id}"),
        };
        one_or_many(self.get_value(&route).await?)
    }

    /// ## Summary
    /// Creates an event.
    ///
    /// ## Errors
    /// Returns an error on transport failure, a non-success status, or an
    /// undecodable body.
    pub async fn add_event(&self, event: &EventWriteDto) -> ApiResult<EventDto> {
        self.post_json(EVENTS_ROUTE, event).await
    }

    /// ## Summary
    /// Updates an event.
    ///
    /// ## Errors
    /// Returns an error on transport failure, a non-success status, or an
    /// undecodable body.
    pub async fn update_event(
        &self,
        event_id: i64,
        event: &EventWriteDto,
    ) -> ApiResult<Option<EventDto>> {
        self.put_json(&format!("{EVENTS_ROUTE}/{event_id}"), event).await
    }

    /// ## Summary
    /// Deletes an event.
    ///
    /// ## Errors
    /// Returns an error on transport failure or a non-success status.
    pub async fn delete_event(&self, event_id: i64) -> ApiResult<()> {
        self.delete(&format!("{EVENTS_ROUTE}/{event_id}")).await
    }
}
