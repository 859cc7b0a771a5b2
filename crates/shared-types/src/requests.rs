use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

/// Request DTO for signing in with email and password.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// Request DTO for resetting a password with an authenticator code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct ResetPasswordRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub new_password: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(equal = 6, message = "Verification code must be 6 digits"))
    )]
    pub otp_code: String,
}

/// Generic message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
