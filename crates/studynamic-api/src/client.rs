//! HTTP client wrapper: base URL, bearer auth, JSON plumbing.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use studynamic_core::config::ApiConfig;

use crate::error::{ApiError, ApiResult};

/// Client for the Studynamic backend.
///
/// Auth storage is the shell's concern; the token arrives here already
/// resolved. An empty token is rejected up front so every endpoint can
/// assume an `Authorization` header exists.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    /// ## Summary
    /// Builds a client from the API configuration and a bearer token.
    ///
    /// ## Errors
    /// Returns `Unauthenticated` for an empty token, or a transport error
    /// if the underlying HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig, token: impl Into<String>) -> ApiResult<Self> {
        let token = token.into();
        if token.is_empty() {
            return Err(ApiError::Unauthenticated);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            token,
        })
    }

    pub(crate) fn url(&self, route: &str) -> String {
        format!("{}{route}", self.base_url)
    }

    pub(crate) async fn get_value(&self, route: &str) -> ApiResult<serde_json::Value> {
        let response = self
            .http
            .get(self.url(route))
            .bearer_auth(&self.token)
            .send()
            .await?;
        Self::decode(Self::check(response).await?).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        route: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self
            .http
            .post(self.url(route))
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;
        Self::decode(Self::check(response).await?).await
    }

    /// PUT returning `None` when the backend answers 204 No Content, so
    /// callers can echo the value they sent.
    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        route: &str,
        body: &B,
    ) -> ApiResult<Option<T>> {
        let response = self
            .http
            .put(self.url(route))
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;
        let response = Self::check(response).await?;

        if response.status() == reqwest::StatusCode::NO_CONTENT {
            return Ok(None);
        }
        Ok(Some(Self::decode(response).await?))
    }

    pub(crate) async fn delete(&self, route: &str) -> ApiResult<()> {
        let response = self
            .http
            .delete(self.url(route))
            .bearer_auth(&self.token)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn check(response: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), message = %message, "Backend request failed");
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ApiConfig {
        ApiConfig {
            base_url: "http://localhost:5000/api/".to_string(),
            timeout_seconds: 5,
        }
    }

    #[test]
    fn empty_token_is_rejected() {
        let result = ApiClient::new(&config(), "");
        assert!(matches!(result, Err(ApiError::Unauthenticated)));
    }

    #[test]
    fn url_joins_base_and_route() {
        let client = ApiClient::new(&config(), "token").expect("client builds");
        assert_eq!(
            client.url("/subjectschedules"),
            "http://localhost:5000/api/subjectschedules"
        );
    }
}
