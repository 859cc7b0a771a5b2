//! Tests for the sign-in call against a mock authentication service.

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use server::authsvc::AuthService;
use shared_types::AppErrorKind;

use crate::common::{captured_body, spawn_auth_service};

#[tokio::test]
async fn login_returns_user_payload() {
    let router = Router::new().route(
        "/api/auth/login",
        post(|| async {
            Json(json!({
                "success": true,
                "user": { "id": 7, "email": "user@example.com", "display_name": "User" }
            }))
        }),
    );
    let base = spawn_auth_service(router).await;

    let user = AuthService::new(base)
        .login("user@example.com", "hunter22hunter22")
        .await
        .expect("login should succeed");

    assert_eq!(user.id, 7);
    assert_eq!(user.email, "user@example.com");
    assert_eq!(user.display_name, "User");
}

#[tokio::test]
async fn declined_login_maps_to_unauthorized() {
    let router = Router::new().route(
        "/api/auth/login",
        post(|| async { Json(json!({ "success": false, "message": "Invalid email or password" })) }),
    );
    let base = spawn_auth_service(router).await;

    let err = AuthService::new(base)
        .login("user@example.com", "wrong")
        .await
        .expect_err("login should fail");

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid email or password");
}

#[tokio::test]
async fn unauthorized_status_maps_to_unauthorized_kind() {
    let router = Router::new().route(
        "/api/auth/login",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "success": false, "message": "Account locked" })),
            )
        }),
    );
    let base = spawn_auth_service(router).await;

    let err = AuthService::new(base)
        .login("user@example.com", "whatever")
        .await
        .expect_err("login should fail");

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Account locked");
}

#[tokio::test]
async fn success_without_user_payload_is_an_internal_error() {
    let router = Router::new().route(
        "/api/auth/login",
        post(|| async { Json(json!({ "success": true })) }),
    );
    let base = spawn_auth_service(router).await;

    let err = AuthService::new(base)
        .login("user@example.com", "hunter22hunter22")
        .await
        .expect_err("login should fail");

    assert_eq!(err.kind, AppErrorKind::InternalError);
}

#[tokio::test]
async fn login_body_carries_credentials() {
    let captured = captured_body();
    let slot = captured.clone();

    let router = Router::new().route(
        "/api/auth/login",
        post(move |Json(body): Json<Value>| {
            let slot = slot.clone();
            async move {
                *slot.lock().unwrap() = Some(body);
                Json(json!({
                    "success": true,
                    "user": { "id": 1, "email": "user@example.com", "display_name": "" }
                }))
            }
        }),
    );
    let base = spawn_auth_service(router).await;

    AuthService::new(base)
        .login("user@example.com", "s3cret-pass")
        .await
        .expect("login should succeed");

    let body = captured.lock().unwrap().clone().expect("body captured");
    assert_eq!(body["email"], "user@example.com");
    assert_eq!(body["password"], "s3cret-pass");
}
