//! One-off calendar events, personal or group-owned.

use chrono::NaiveDateTime;

/// A dated event entered directly by a user or shared through a group.
///
/// Unlike class sessions these are not derived from a recurrence rule;
/// each row on the wire is one occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub description: String,
    /// Present when the event belongs to a study group rather than a user.
    pub group_id: Option<i64>,
    pub group_name: Option<String>,
}
