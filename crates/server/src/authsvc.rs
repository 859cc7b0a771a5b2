//! Client for the upstream authentication service.
//!
//! The portal owns no credentials, sessions, or verification logic — every
//! auth operation is a single HTTP call to this service. Endpoints respond
//! `200 {"success": bool, "message"?: string, "user"?: {...}}`; non-2xx
//! statuses are mapped onto `AppError` kinds.

use serde::{Deserialize, Serialize};
use shared_types::{AppError, AuthUser};

// --- Environment helpers ---

fn auth_api_url() -> String {
    std::env::var("AUTH_API_URL").unwrap_or_else(|_| "http://localhost:9090".to_string())
}

// --- Wire types (camelCase, matching the service's JS-facing API) ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetPasswordBody<'a> {
    email: &'a str,
    new_password: &'a str,
    otp_code: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthOutcome {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    user: Option<AuthUser>,
}

/// Handle to the authentication service.
#[derive(Debug, Clone)]
pub struct AuthService {
    base_url: String,
    http: reqwest::Client,
}

impl AuthService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Build a client from the `AUTH_API_URL` environment variable
    /// (default `http://localhost:9090`).
    pub fn from_env() -> Self {
        Self::new(auth_api_url())
    }

    /// Sign a user in. Returns the authenticated user on success.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthUser, AppError> {
        let outcome = self
            .post_json("/api/auth/login", &LoginBody { email, password })
            .await?;

        if !outcome.success {
            return Err(AppError::unauthorized(
                outcome
                    .message
                    .unwrap_or_else(|| "Invalid email or password".to_string()),
            ));
        }

        let user = outcome
            .user
            .ok_or_else(|| AppError::internal("Auth service returned no user payload"))?;

        tracing::info!(email = email, "Login succeeded");
        Ok(user)
    }

    /// Reset a user's password with an authenticator code. Returns the
    /// service-provided confirmation message.
    #[tracing::instrument(skip(self, new_password))]
    pub async fn reset_password(
        &self,
        email: &str,
        new_password: &str,
        otp_code: &str,
    ) -> Result<String, AppError> {
        let outcome = self
            .post_json(
                "/api/auth/reset-password",
                &ResetPasswordBody {
                    email,
                    new_password,
                    otp_code,
                },
            )
            .await?;

        if !outcome.success {
            return Err(AppError::bad_request(
                outcome
                    .message
                    .unwrap_or_else(|| "Password reset failed".to_string()),
            ));
        }

        tracing::info!(email = email, "Password reset succeeded");
        Ok(outcome
            .message
            .unwrap_or_else(|| "Password reset successfully.".to_string()))
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<AuthOutcome, AppError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::internal(format!("Auth service request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, path = path, "Auth service error response");
            // Prefer the message embedded in a structured error body
            let message = AppError::from_server_error(&body)
                .map(|e| e.message)
                .unwrap_or_else(|| {
                    serde_json::from_str::<AuthOutcome>(&body)
                        .ok()
                        .and_then(|o| o.message)
                        .unwrap_or_else(|| format!("Auth service error ({status})"))
                });
            return Err(AppError::from_status(status.as_u16(), message));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::internal(format!("Invalid auth service response: {e}")))
    }
}
