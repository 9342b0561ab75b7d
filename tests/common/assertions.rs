//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert response redirects back to the index page
pub fn assert_redirect_to_index(response: &TestResponse) {
    assert_status(response, StatusCode::SEE_OTHER);
    let location = response
        .headers
        .get("location")
        .and_then(|v| v.to_str().ok());
    assert_eq!(location, Some("/"), "Expected redirect to /");
}
