//! Request DTO validation rules, as enforced by the server functions
//! before any upstream call is made.

use pretty_assertions::assert_eq;
use shared_types::{AppError, LoginRequest, ResetPasswordRequest};
use validator::Validate;

fn reset_request(email: &str, password: &str, otp: &str) -> ResetPasswordRequest {
    ResetPasswordRequest {
        email: email.to_string(),
        new_password: password.to_string(),
        otp_code: otp.to_string(),
    }
}

#[test]
fn well_formed_reset_request_passes() {
    let req = reset_request("user@example.com", "long-enough-pw", "123456");
    assert!(req.validate().is_ok());
}

#[test]
fn reset_request_rejects_bad_email() {
    let req = reset_request("not-an-email", "long-enough-pw", "123456");
    let err: AppError = req.validate().unwrap_err().into();
    assert_eq!(
        err.field_errors.get("email").unwrap(),
        "Enter a valid email address"
    );
}

#[test]
fn reset_request_rejects_short_password() {
    let req = reset_request("user@example.com", "short", "123456");
    let err: AppError = req.validate().unwrap_err().into();
    assert_eq!(
        err.field_errors.get("new_password").unwrap(),
        "Password must be at least 8 characters"
    );
}

#[test]
fn reset_request_rejects_incomplete_otp() {
    for otp in ["", "123", "12345", "1234567"] {
        let req = reset_request("user@example.com", "long-enough-pw", otp);
        let err: AppError = req.validate().unwrap_err().into();
        assert_eq!(
            err.field_errors.get("otp_code").unwrap(),
            "Verification code must be 6 digits",
            "otp {otp:?} should be rejected"
        );
    }
}

#[test]
fn login_request_requires_email_and_password() {
    let bad_email = LoginRequest {
        email: "nope".to_string(),
        password: "pw".to_string(),
    };
    assert!(bad_email.validate().is_err());

    let empty_password = LoginRequest {
        email: "user@example.com".to_string(),
        password: String::new(),
    };
    assert!(empty_password.validate().is_err());

    let ok = LoginRequest {
        email: "user@example.com".to_string(),
        password: "pw".to_string(),
    };
    assert!(ok.validate().is_ok());
}
