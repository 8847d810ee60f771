//! Uniform response envelope.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

/// Every response body, success or failure, has this shape.
///
/// `status` mirrors the HTTP status code.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    #[schema(example = 200)]
    pub status: u16,
    pub description: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn new(status: StatusCode, description: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status: status.as_u16(),
            description: description.into(),
            data,
        }
    }

    pub fn ok(description: impl Into<String>, data: T) -> Self {
        Self::new(StatusCode::OK, description, Some(data))
    }

    pub fn created(description: impl Into<String>, data: T) -> Self {
        Self::new(StatusCode::CREATED, description, Some(data))
    }
}

impl ApiResponse<()> {
    /// 200 with `data: null`
    pub fn empty(description: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, description, None)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Machine-readable part of an error envelope.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorData {
    #[schema(example = "NOT_FOUND")]
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorData {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

pub type ErrorResponse = ApiResponse<ErrorData>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_serialization() {
        let body = serde_json::to_value(ApiResponse::created("Book created", "payload")).unwrap();
        assert_eq!(
            body,
            json!({"status": 201, "description": "Book created", "data": "payload"})
        );
    }

    #[test]
    fn test_empty_envelope_has_null_data() {
        let body = serde_json::to_value(ApiResponse::empty("Deleted")).unwrap();
        assert_eq!(body["data"], serde_json::Value::Null);
        assert_eq!(body["status"], 200);
    }

    #[test]
    fn test_into_response_mirrors_status() {
        let response = ApiResponse::created("Created", 1).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[test]
    fn test_error_data_omits_missing_details() {
        let body = serde_json::to_value(ErrorData::new("UNAUTHORIZED")).unwrap();
        assert_eq!(body, json!({"code": "UNAUTHORIZED"}));
    }
}
