//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status,
        expected,
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

/// Assert a successful analysis and return its JSON body
pub fn assert_valid_analysis(response: &TestResponse) -> serde_json::Value {
    assert_ok(response);
    let json: serde_json::Value = response.json();

    assert_eq!(json["success"], true, "Full response: {json}");
    let undertone = json["undertone"].as_str().expect("undertone should be a string");
    assert!(
        ["warm", "cool", "neutral"].contains(&undertone),
        "Unexpected undertone {undertone}"
    );

    let colors = json["colors"].as_array().expect("colors should be an array");
    assert_eq!(colors.len(), 6, "Expected six colors");
    for color in colors {
        let hex = color["hex"].as_str().expect("hex should be a string");
        assert!(
            hex.len() == 7
                && hex.starts_with('#')
                && hex[1..].chars().all(|c| c.is_ascii_hexdigit()),
            "Malformed hex {hex}"
        );
        assert!(color["name"].as_str().is_some_and(|n| !n.is_empty()));
    }

    let outfits = json["outfits"].as_array().expect("outfits should be an array");
    assert_eq!(outfits.len(), 3, "Expected three outfits");

    json
}

/// Assert an error response with the given status and kind, returning its message
pub fn assert_error(response: &TestResponse, status: StatusCode, kind: &str) -> String {
    assert_status(response, status);
    let json: serde_json::Value = response.json();
    assert_eq!(json["success"], false, "Full response: {json}");
    assert_eq!(json["error"], kind, "Full response: {json}");
    json["message"]
        .as_str()
        .expect("message should be a string")
        .to_string()
}
