//! Error body shared by every endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::ErrorCode;

/// Shown for any failure the user cannot correct.
pub const GENERIC_FAILURE_MESSAGE: &str = "Could not complete the request. Please try again later.";

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal() -> Self {
        Self::new(ErrorCode::InternalError, GENERIC_FAILURE_MESSAGE)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Pairs the body with a status code.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_creates_correctly() {
        let error = ErrorResponse::bad_request("Invalid input");
        assert_eq!(error.code, "BAD_REQUEST");
        assert_eq!(error.message, "Invalid input");
    }

    #[test]
    fn internal_hides_details() {
        let error = ErrorResponse::internal();
        assert_eq!(error.code, "INTERNAL_ERROR");
        assert_eq!(error.message, GENERIC_FAILURE_MESSAGE);
        assert!(error.details.is_none());
    }

    #[test]
    fn details_are_omitted_when_absent() {
        let json = serde_json::to_value(ErrorResponse::bad_request("x")).unwrap();
        assert!(json.get("details").is_none());

        let json = serde_json::to_value(
            ErrorResponse::bad_request("x").with_details(serde_json::json!({"field": "date_time"})),
        )
        .unwrap();
        assert_eq!(json["details"]["field"], "date_time");
    }
}
