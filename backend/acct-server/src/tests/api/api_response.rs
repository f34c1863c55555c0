use crate::ApiResponse;

use axum::http::StatusCode;
use serde_json::json;

#[test]
fn test_envelope_is_camel_case_with_success_flag() {
    let response = ApiResponse::new(StatusCode::CREATED, json!({"id": 1}), "created");

    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["statusCode"], 201);
    assert_eq!(value["data"]["id"], 1);
    assert_eq!(value["message"], "created");
    assert_eq!(value["success"], true);
}
