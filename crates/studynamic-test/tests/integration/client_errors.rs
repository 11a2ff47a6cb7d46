//! Client failure modes that don't need a live backend.

use studynamic_test::api::{ApiClient, ApiError};
use studynamic_test::component::config::ApiConfig;

fn unreachable_config() -> ApiConfig {
    // TEST-NET-1 (RFC 5737) is guaranteed unroutable.
    ApiConfig {
        base_url: "http://192.0.2.1:9/api".to_string(),
        timeout_seconds: 1,
    }
}

#[test_log::test]
fn missing_token_fails_before_any_request() {
    let result = ApiClient::new(&unreachable_config(), "");
    assert!(matches!(result, Err(ApiError::Unauthenticated)));
}

#[test_log::test(tokio::test)]
async fn transport_failures_surface_as_http_errors() {
    let client = ApiClient::new(&unreachable_config(), "token").expect("client builds");

    let result = client.subjects().await;
    assert!(matches!(result, Err(ApiError::Http(_))));
}
