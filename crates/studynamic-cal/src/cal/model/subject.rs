/// A course/subject a student is enrolled in. Schedule rules reference
/// subjects by id; the title is denormalized onto rules by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub id: i64,
    pub title: String,
}
