use dioxus::prelude::*;
use shared_types::{AuthUser, MessageResponse};

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use shared_types::{AppError, LoginRequest, ResetPasswordRequest};

/// Sign a user in against the authentication service.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String) -> Result<AuthUser, ServerFnError> {
    let req = LoginRequest { email, password };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let user = crate::authsvc::AuthService::from_env()
        .login(&req.email, &req.password)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    Ok(user)
}

/// Reset a user's password using a 6-digit authenticator code.
///
/// Validation only checks the request shape — whether the code is correct
/// for this account is the authentication service's call.
#[cfg_attr(feature = "server", tracing::instrument(skip(new_password)))]
#[server]
pub async fn reset_password(
    email: String,
    new_password: String,
    otp_code: String,
) -> Result<MessageResponse, ServerFnError> {
    let req = ResetPasswordRequest {
        email,
        new_password,
        otp_code,
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    if !req.otp_code.chars().all(|c| c.is_ascii_digit()) {
        let mut fields = std::collections::HashMap::new();
        fields.insert(
            "otp_code".to_string(),
            "Verification code must be 6 digits".to_string(),
        );
        return Err(AppError::validation("Validation failed", fields).into_server_fn_error());
    }

    let message = crate::authsvc::AuthService::from_env()
        .reset_password(&req.email, &req.new_password, &req.otp_code)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    Ok(MessageResponse { message })
}
