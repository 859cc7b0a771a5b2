//! Tests for the password-reset call against a mock authentication service.

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use server::authsvc::AuthService;
use shared_types::AppErrorKind;

use crate::common::{captured_body, spawn_auth_service};

#[tokio::test]
async fn success_passes_service_message_through() {
    let router = Router::new().route(
        "/api/auth/reset-password",
        post(|| async {
            Json(json!({ "success": true, "message": "Password updated. Please sign in." }))
        }),
    );
    let base = spawn_auth_service(router).await;

    let message = AuthService::new(base)
        .reset_password("user@example.com", "brand-new-pass", "123456")
        .await
        .expect("reset should succeed");

    assert_eq!(message, "Password updated. Please sign in.");
}

#[tokio::test]
async fn success_without_message_uses_default() {
    let router = Router::new().route(
        "/api/auth/reset-password",
        post(|| async { Json(json!({ "success": true })) }),
    );
    let base = spawn_auth_service(router).await;

    let message = AuthService::new(base)
        .reset_password("user@example.com", "brand-new-pass", "123456")
        .await
        .expect("reset should succeed");

    assert_eq!(message, "Password reset successfully.");
}

#[tokio::test]
async fn declined_reset_surfaces_service_message() {
    let router = Router::new().route(
        "/api/auth/reset-password",
        post(|| async {
            Json(json!({ "success": false, "message": "Invalid verification code" }))
        }),
    );
    let base = spawn_auth_service(router).await;

    let err = AuthService::new(base)
        .reset_password("user@example.com", "brand-new-pass", "000000")
        .await
        .expect_err("reset should fail");

    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(err.message, "Invalid verification code");
}

#[tokio::test]
async fn declined_reset_without_message_uses_default() {
    let router = Router::new().route(
        "/api/auth/reset-password",
        post(|| async { Json(json!({ "success": false })) }),
    );
    let base = spawn_auth_service(router).await;

    let err = AuthService::new(base)
        .reset_password("user@example.com", "brand-new-pass", "000000")
        .await
        .expect_err("reset should fail");

    assert_eq!(err.message, "Password reset failed");
}

#[tokio::test]
async fn rate_limited_status_maps_to_rate_limited_kind() {
    let router = Router::new().route(
        "/api/auth/reset-password",
        post(|| async {
            (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({ "success": false, "message": "Too many attempts" })),
            )
        }),
    );
    let base = spawn_auth_service(router).await;

    let err = AuthService::new(base)
        .reset_password("user@example.com", "brand-new-pass", "123456")
        .await
        .expect_err("reset should fail");

    assert_eq!(err.kind, AppErrorKind::RateLimited);
    assert_eq!(err.message, "Too many attempts");
}

#[tokio::test]
async fn server_error_status_maps_to_internal_kind() {
    let router = Router::new().route(
        "/api/auth/reset-password",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = spawn_auth_service(router).await;

    let err = AuthService::new(base)
        .reset_password("user@example.com", "brand-new-pass", "123456")
        .await
        .expect_err("reset should fail");

    assert_eq!(err.kind, AppErrorKind::InternalError);
}

#[tokio::test]
async fn unreachable_service_maps_to_internal_kind() {
    // Nothing listens on this port
    let err = AuthService::new("http://127.0.0.1:9")
        .reset_password("user@example.com", "brand-new-pass", "123456")
        .await
        .expect_err("reset should fail");

    assert_eq!(err.kind, AppErrorKind::InternalError);
    assert!(
        err.message.contains("Auth service request failed"),
        "unexpected message: {}",
        err.message
    );
}

#[tokio::test]
async fn request_body_uses_camel_case_wire_format() {
    let captured = captured_body();
    let slot = captured.clone();

    let router = Router::new().route(
        "/api/auth/reset-password",
        post(move |Json(body): Json<Value>| {
            let slot = slot.clone();
            async move {
                *slot.lock().unwrap() = Some(body);
                Json(json!({ "success": true }))
            }
        }),
    );
    let base = spawn_auth_service(router).await;

    AuthService::new(base)
        .reset_password("user@example.com", "brand-new-pass", "654321")
        .await
        .expect("reset should succeed");

    let body = captured.lock().unwrap().clone().expect("body captured");
    assert_eq!(body["email"], "user@example.com");
    assert_eq!(body["newPassword"], "brand-new-pass");
    assert_eq!(body["otpCode"], "654321");
}
