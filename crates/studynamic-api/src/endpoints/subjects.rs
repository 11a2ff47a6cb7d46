//! Subject endpoints.

use serde::{Deserialize, Serialize};
use studynamic_cal::cal::model::Subject;
use studynamic_core::constants::SUBJECTS_ROUTE;

use super::one_or_many;
use crate::client::ApiClient;
use crate::error::ApiResult;

/// A subject on the wire; the shape matches the domain type directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectDto {
    pub id: i64,
    pub title: String,
}

impl SubjectDto {
    #[must_use]
    pub fn into_subject(self) -> Subject {
        Subject {
            id: self.id,
            title: self.title,
        }
    }
}

impl ApiClient {
    /// ## Summary
    /// Fetches all subjects of the authenticated user.
    ///
    /// ## Errors
    /// Returns an error on transport failure, a non-success status, or an
    /// undecodable body.
    pub async fn subjects(&self) -> ApiResult<Vec<SubjectDto>> {
        one_or_many(self.get_value(SUBJECTS_ROUTE).await?)
    }

    /// ## Summary
    /// Creates a subject.
    ///
    /// ## Errors
    /// Returns an error on transport failure, a non-success status, or an
    /// undecodable body.
    pub async fn add_subject(&self, subject: &SubjectDto) -> ApiResult<SubjectDto> {
        self.post_json(SUBJECTS_ROUTE, subject).await
    }

    /// ## Summary
    /// Updates a subject.
    ///
    /// ## Errors
    /// Returns an error on transport failure, a non-success status, or an
    /// undecodable body.
    pub async fn update_subject(
        &self,
        subject_id: i64,
        subject: &SubjectDto,
    ) -> ApiResult<Option<SubjectDto>> {
        self.put_json(&format!("{SUBJECTS_ROUTE}/{subject_id}"), subject)
            .await
    }

    /// ## Summary
    /// Deletes a subject.
    ///
    /// ## Errors
    /// Returns an error on transport failure or a non-success status.
    pub async fn delete_subject(&self, subject_id: i64) -> ApiResult<()> {
        self.delete(&format!("{SUBJECTS_ROUTE}/{subject_id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn subject_dto_round_trip() {
        let dto: SubjectDto =
            serde_json::from_value(json!({"id": 4, "title": "Algebra"})).expect("decodes");
        let subject = dto.into_subject();
        assert_eq!(subject.id, 4);
        assert_eq!(subject.title, "Algebra");
    }
}
