//! Task endpoints and normalization.

use serde::{Deserialize, Serialize};
use studynamic_cal::cal::model::{Task, TaskPriority, TaskStatus};
use studynamic_cal::cal::parse::parse_local_date;
use studynamic_core::constants::TASKS_ROUTE;

use super::one_or_many;
use crate::client::ApiClient;
use crate::error::ApiResult;

/// A task as the backend returns it: status and priority arrive as display
/// names, marks as plain numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub id: i64,
    pub title: String,
    pub due_date: String,
    #[serde(default)]
    pub status_name: Option<String>,
    #[serde(default)]
    pub priority_name: Option<String>,
    #[serde(default)]
    pub subject_title: Option<String>,
    #[serde(default)]
    pub mark: i32,
    #[serde(default)]
    pub sobre_mark: i32,
    #[serde(default)]
    pub notification: Option<String>,
}

/// Whether a task belongs to a user or to a study group; exactly one owner
/// id goes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOwner {
    User(i64),
    Group(i64),
}

/// The shape the backend expects on create/update.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskWriteDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
    pub subject_id: i64,
    pub title: String,
    /// Date-only deadlines are padded to midnight on the wire.
    pub due_date: String,
    pub priority_id: i64,
    pub status_id: i64,
    pub mark: i32,
    pub sobre_mark: i32,
    pub notification: Option<String>,
}

impl TaskWriteDto {
    #[must_use]
    pub fn from_task(task: &Task, owner: TaskOwner, subject_id: i64) -> Self {
        let (user_id, group_id) = match owner {
            TaskOwner::User(id) => (Some(id), None),
            TaskOwner::Group(id) => (None, Some(id)),
        };

        Self {
            id: (task.id != 0).then_some(task.id),
            user_id,
            group_id,
            subject_id,
            title: task.title.clone(),
            due_date: format!("{}T00:00:00", task.due_date),
            priority_id: task.priority.wire_id(),
            status_id: task.status.wire_id(),
            mark: task.mark_obtained,
            sobre_mark: task.mark_max,
            notification: task
                .notification_date
                .map(|date| format!("{date}T00:00:00")),
        }
    }
}

/// ## Summary
/// Normalizes fetched task records.
///
/// A task with an unparseable due date cannot be placed on the calendar
/// and is skipped with a warning. Unknown status or priority names fall
/// back to `Pending`/`Low`, matching the backend's own defaulting.
#[must_use]
pub fn normalize_tasks(dtos: &[TaskDto]) -> Vec<Task> {
    dtos.iter().filter_map(normalize_task).collect()
}

fn normalize_task(dto: &TaskDto) -> Option<Task> {
    let Ok(due_date) = parse_local_date(&dto.due_date) else {
        tracing::warn!(
            task_id = dto.id,
            due_date = %dto.due_date,
            "Skipping task with unparseable due date"
        );
        return None;
    };

    let status = dto
        .status_name
        .as_deref()
        .and_then(TaskStatus::from_wire_name)
        .unwrap_or_else(|| {
            tracing::warn!(
                task_id = dto.id,
                status = ?dto.status_name,
                "Unknown task status, defaulting to pending"
            );
            TaskStatus::Pending
        });

    let priority = dto
        .priority_name
        .as_deref()
        .and_then(TaskPriority::from_wire_name)
        .unwrap_or_else(|| {
            tracing::warn!(
                task_id = dto.id,
                priority = ?dto.priority_name,
                "Unknown task priority, defaulting to low"
            );
            TaskPriority::Low
        });

    let notification_date = dto
        .notification
        .as_deref()
        .and_then(|raw| parse_local_date(raw).ok());

    Some(Task {
        id: dto.id,
        title: dto.title.clone(),
        due_date,
        status,
        priority,
        subject_title: dto.subject_title.clone(),
        mark_obtained: dto.mark,
        mark_max: dto.sobre_mark,
        notification_date,
    })
}

impl ApiClient {
    /// ## Summary
    /// Fetches the tasks of one user.
    ///
    /// ## Errors
    /// Returns an error on transport failure, a non-success status, or an
    /// undecodable body.
    pub async fn tasks_for_user(&self, user_id: i64) -> ApiResult<Vec<TaskDto>> {
        one_or_many(self.get_value(&format!("{TASKS_ROUTE}/user/{user_id}")).await?)
    }

    /// ## Summary
    /// Creates a task for a user or group.
    ///
    /// ## Errors
    /// Returns an error on transport failure, a non-success status, or an
    /// undecodable body.
    pub async fn add_task(&self, task: &TaskWriteDto) -> ApiResult<TaskDto> {
        self.post_json(TASKS_ROUTE, task).await
    }

    /// ## Summary
    /// Updates a task.
    ///
    /// ## Errors
    /// Returns an error on transport failure, a non-success status, or an
    /// undecodable body.
    pub async fn update_task(&self, task_id: i64, task: &TaskWriteDto) -> ApiResult<Option<TaskDto>> {
        self.put_json(&format!("{TASKS_ROUTE}/{task_id}"), task).await
    }

    /// ## Summary
    /// Deletes a task.
    ///
    /// ## Errors
    /// Returns an error on transport failure or a non-success status.
    pub async fn delete_task(&self, task_id: i64) -> ApiResult<()> {
        self.delete(&format!("{TASKS_ROUTE}/{task_id}")).await
    }
}
