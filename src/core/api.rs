//! Wire types for the authentication backend
//!
//! Every endpoint is a JSON POST under `/api/auth`. Failed requests carry a
//! `{ "message": ... }` body which is surfaced to the user verbatim.

use serde::{Deserialize, Serialize};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const SIGNUP_PATH: &str = "/api/auth/signup";
pub const VERIFY_OTP_PATH: &str = "/api/auth/verify-otp";
pub const RESEND_OTP_PATH: &str = "/api/auth/resend-otp";
pub const FORGOT_PASSWORD_PATH: &str = "/api/auth/forgot-password";
pub const RESET_PASSWORD_PATH: &str = "/api/auth/reset-password";

/// Header carrying the anti-forgery token
pub const CSRF_HEADER: &str = "X-CSRF-Token";

/// Shown when a failure carries no server message
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginResponse {
    pub mfa_enabled: bool,
    pub csrf_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupResponse {
    pub csrf_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VerifyOtpRequest {
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResetPasswordRequest {
    pub password: String,
}

/// Error body returned by the backend on non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Backend refused the request and said why
    #[error("{0}")]
    Rejected(String),

    /// Non-2xx status without a usable message
    #[error("Request failed with status {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text to show inline, falling back to `fallback` when the backend gave
    /// no message of its own
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Build the error for a non-2xx response from its status and raw body
pub fn error_from_response(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { message }) if !message.trim().is_empty() => ApiError::Rejected(message),
        _ => ApiError::Status(status),
    }
}

/// Decode a 2xx response body. An empty body decodes as the type's default.
pub fn decode_success<T>(body: &str) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de> + Default,
{
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_from_response_uses_message() {
        let err = error_from_response(401, r#"{"message":"Invalid code"}"#);
        assert_eq!(err, ApiError::Rejected("Invalid code".into()));
        assert_eq!(err.user_message(GENERIC_FAILURE), "Invalid code");
    }

    #[test]
    fn test_error_from_response_without_message() {
        assert_eq!(error_from_response(500, "<html>"), ApiError::Status(500));
        assert_eq!(
            error_from_response(400, r#"{"message":"  "}"#),
            ApiError::Status(400)
        );
    }

    #[test]
    fn test_user_message_falls_back() {
        let err = ApiError::Network("offline".into());
        assert_eq!(err.user_message(GENERIC_FAILURE), GENERIC_FAILURE);
        assert_eq!(
            ApiError::Decode("eof".into()).user_message("Try again"),
            "Try again"
        );
    }

    #[test]
    fn test_login_response_decoding() {
        let resp: LoginResponse =
            decode_success(r#"{"mfaEnabled":true,"csrfToken":"tok"}"#).unwrap();
        assert!(resp.mfa_enabled);
        assert_eq!(resp.csrf_token.as_deref(), Some("tok"));

        let resp: LoginResponse = decode_success("").unwrap();
        assert_eq!(resp, LoginResponse::default());

        let resp: LoginResponse = decode_success("{}").unwrap();
        assert!(!resp.mfa_enabled);
    }

    #[test]
    fn test_decode_failure() {
        let err = decode_success::<SignupResponse>("not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_request_bodies_serialize() {
        let body = serde_json::to_value(SignupRequest {
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            password: "Engines1!".into(),
        })
        .unwrap();
        assert_eq!(body["fullName"], "Ada Lovelace");

        let body = serde_json::to_string(&VerifyOtpRequest {
            otp: "123456".into(),
        })
        .unwrap();
        assert_eq!(body, r#"{"otp":"123456"}"#);
    }
}
