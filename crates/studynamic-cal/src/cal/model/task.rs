//! Graded tasks with a due date, status, and priority.

use chrono::NaiveDate;

/// Task workflow status.
///
/// The backend encodes statuses as integer ids and reports the display name
/// in the DTO; both encodings are fixed by the API contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// ## Summary
    /// Parses the backend's display name ("Pendiente", "En curso", "Finalizada").
    #[must_use]
    pub fn from_wire_name(name: &str) -> Option<Self> {
        match name {
            "Pendiente" => Some(Self::Pending),
            "En curso" => Some(Self::InProgress),
            "Finalizada" => Some(Self::Completed),
            _ => None,
        }
    }

    /// ## Summary
    /// Returns the backend's integer id for this status.
    #[must_use]
    pub const fn wire_id(self) -> i64 {
        match self {
            Self::Pending => 1,
            Self::InProgress => 2,
            Self::Completed => 3,
        }
    }

    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::InProgress => "En curso",
            Self::Completed => "Finalizada",
        }
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

impl TaskPriority {
    /// ## Summary
    /// Parses the backend's display name ("Alta", "Media", "Baja").
    #[must_use]
    pub fn from_wire_name(name: &str) -> Option<Self> {
        match name {
            "Alta" => Some(Self::High),
            "Media" => Some(Self::Medium),
            "Baja" => Some(Self::Low),
            _ => None,
        }
    }

    /// ## Summary
    /// Returns the backend's integer id for this priority.
    #[must_use]
    pub const fn wire_id(self) -> i64 {
        match self {
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::High => "Alta",
            Self::Medium => "Media",
            Self::Low => "Baja",
        }
    }
}

/// A graded task owned by a user or a study group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    /// Due dates are date-only on the wire; the time portion is discarded.
    pub due_date: NaiveDate,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub subject_title: Option<String>,
    pub mark_obtained: i32,
    pub mark_max: i32,
    pub notification_date: Option<NaiveDate>,
}

impl Task {
    /// Open tasks count toward the dashboard's pending total.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status != TaskStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_names_round_trip() {
        for status in [
            TaskStatus::Pending,
            TaskStatus::InProgress,
            TaskStatus::Completed,
        ] {
            assert_eq!(TaskStatus::from_wire_name(status.wire_name()), Some(status));
        }
    }

    #[test]
    fn priority_wire_names_round_trip() {
        for priority in [TaskPriority::High, TaskPriority::Medium, TaskPriority::Low] {
            assert_eq!(
                TaskPriority::from_wire_name(priority.wire_name()),
                Some(priority)
            );
        }
    }

    #[test]
    fn unknown_wire_name_is_none() {
        assert_eq!(TaskStatus::from_wire_name("Archivada"), None);
        assert_eq!(TaskPriority::from_wire_name("Urgente"), None);
    }

    #[test]
    fn completed_task_is_not_open() {
        let task = Task {
            id: 1,
            title: "Essay".to_string(),
            due_date: NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date"),
            status: TaskStatus::Completed,
            priority: TaskPriority::Medium,
            subject_title: None,
            mark_obtained: 8,
            mark_max: 10,
            notification_date: None,
        };
        assert!(!task.is_open());
    }
}
