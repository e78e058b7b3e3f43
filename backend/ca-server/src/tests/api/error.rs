use crate::ApiError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_validation_error_returns_400_with_flat_body() {
    let (status, json) = body_json(ApiError::validation("No prompt provided")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "No prompt provided");
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json.get("limitExceeded").is_none());
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let error = ApiError::BadRequest {
        message: "Failed to parse the request body as JSON".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_rate_limited_returns_429_with_limit_flag() {
    let error = ApiError::RateLimited {
        message: "API rate limit reached. Using simplified career plan instead.".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["code"], "RATE_LIMITED");
    assert_eq!(json["limitExceeded"], true);
}

#[tokio::test]
async fn test_upstream_error_hides_cause() {
    let cause = "HTTP request error: connection refused to 10.0.0.1";
    let (status, json) = body_json(ApiError::upstream(&cause, "Failed to generate text")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Failed to generate text");
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(!json.to_string().contains("10.0.0.1"));
}

#[test]
fn test_display_includes_location() {
    let error = ApiError::internal("boom");
    let message = error.to_string();

    assert!(message.starts_with("Internal error: boom"));
}
