//! Error body shared by every endpoint, and the DomainError to status mapping.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// JSON error body: `{code, message, details?}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Copies code, message and details from a domain error.
    pub fn from_domain(error: &DomainError) -> Self {
        let details = if error.details.is_empty() {
            None
        } else {
            serde_json::to_value(&error.details).ok()
        };
        Self {
            code: error.code().to_string(),
            message: error.message().to_string(),
            details,
        }
    }
}

/// HTTP status for a domain error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::CourseNotFound => StatusCode::NOT_FOUND,
        ErrorCode::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Turns a domain error into a response. Server errors are logged and
/// their message is not exposed.
pub fn domain_error_response(error: DomainError) -> Response {
    let status = status_for(error.code());
    let body = if status.is_server_error() {
        tracing::error!(code = %error.code(), message = %error.message(), "Request failed");
        ErrorResponse::internal("An unexpected error occurred")
    } else {
        ErrorResponse::from_domain(&error)
    };
    (status, Json(body)).into_response()
}

/// Malformed JSON bodies are reported as 400 in the common error shape.
pub fn json_rejection_response(rejection: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(rejection.body_text())),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400_with_details() {
        let error = DomainError::validation("score_weight", "must not be negative");
        let body = ErrorResponse::from_domain(&error);

        assert_eq!(status_for(error.code()), StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "VALIDATION_FAILED");
        assert_eq!(
            body.details.unwrap()["field"],
            serde_json::Value::String("score_weight".to_string())
        );
    }

    #[test]
    fn missing_course_maps_to_404() {
        assert_eq!(status_for(ErrorCode::CourseNotFound), StatusCode::NOT_FOUND);
    }

    #[test]
    fn database_error_is_hidden_behind_500() {
        let response =
            domain_error_response(DomainError::database("Failed to fetch", "connection refused"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
