//! Per-resource endpoints: wire DTOs, CRUD calls, and normalization into
//! the domain types.

pub mod events;
pub mod schedules;
pub mod subjects;
pub mod tasks;

use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};

/// The backend sometimes answers a list route with a bare object when a
/// single record matches. Accept both shapes.
pub(crate) fn one_or_many<T: DeserializeOwned>(value: serde_json::Value) -> ApiResult<Vec<T>> {
    if value.is_array() {
        serde_json::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
    } else {
        serde_json::from_value::<T>(value)
            .map(|record| vec![record])
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn one_or_many_accepts_array() {
        let values: Vec<i64> = one_or_many(json!([1, 2, 3])).expect("decodes");
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn one_or_many_wraps_single_record() {
        let values: Vec<i64> = one_or_many(json!(7)).expect("decodes");
        assert_eq!(values, vec![7]);
    }

    #[test]
    fn one_or_many_rejects_mismatched_shape() {
        let result: ApiResult<Vec<i64>> = one_or_many(json!("seven"));
        assert!(result.is_err());
    }
}
