//! Test helpers: realistic backend payloads as `serde_json` fixtures.

use serde_json::{Value, json};

/// Subjects payload: two courses.
pub fn subjects_payload() -> Value {
    json!([
        {"id": 4, "title": "Algebra"},
        {"id": 5, "title": "Literature"}
    ])
}

/// Schedules payload: a weekly slot, a biweekly (odd) slot, and one broken
/// record that normalization must drop.
pub fn schedules_payload() -> Value {
    json!([
        {
            "id": 17,
            "subjectId": 4,
            "dayOfWeek": 1,
            "startTime": "09:00:00",
            "durationMinutes": 90,
            "weekType": 0
        },
        {
            "id": 18,
            "subjectId": 5,
            "dayOfWeek": 3,
            "startTime": {"hours": 16, "minutes": 30},
            "durationMinutes": 60,
            "weekType": 2
        },
        {
            "id": 19,
            "subjectId": 4,
            "dayOfWeek": 8,
            "startTime": "10:00:00",
            "durationMinutes": 60,
            "weekType": 0
        }
    ])
}

/// Tasks payload: one open, one completed.
pub fn tasks_payload() -> Value {
    json!([
        {
            "id": 31,
            "title": "Essay draft",
            "dueDate": "2026-03-10T00:00:00",
            "statusName": "Pendiente",
            "priorityName": "Alta",
            "subjectTitle": "Literature",
            "mark": 0,
            "sobreMark": 10
        },
        {
            "id": 32,
            "title": "Problem set 3",
            "dueDate": "2026-03-04T00:00:00",
            "statusName": "Finalizada",
            "priorityName": "Media",
            "subjectTitle": "Algebra",
            "mark": 9,
            "sobreMark": 10
        }
    ])
}

/// Events payload: one personal, one group-shared.
pub fn events_payload() -> Value {
    json!([
        {
            "id": 51,
            "title": "Tutoring",
            "startDateTime": "2026-03-05T17:00:00",
            "endDateTime": "2026-03-05T18:00:00",
            "userId": 1
        },
        {
            "id": 52,
            "title": "Group review",
            "startDateTime": "2026-03-09T19:30:00",
            "groupId": 8,
            "groupName": "Physics group"
        }
    ])
}
