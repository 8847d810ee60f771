//! Error handler for converting AppError to HTTP responses.
//!
//! Errors are rendered into the same `{status, description, data}` envelope
//! as successes, with `data = {code, details}`. Internal causes are logged
//! but never sent to the client.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::api::dto::{ErrorData, ErrorResponse};
use crate::error::AppError;

/// Largest framework error body read back by the global handler
const MAX_REWRITE_BODY: usize = 64 * 1024;

impl AppError {
    /// HTTP status and machine-readable error data for this error.
    pub fn status_and_data(&self) -> (StatusCode, ErrorData) {
        match self {
            AppError::NotFound {
                entity,
                field,
                value,
            } => (
                StatusCode::NOT_FOUND,
                ErrorData::new("NOT_FOUND").with_details(json!({
                    "entity": entity,
                    "field": field,
                    "value": value,
                })),
            ),
            AppError::Duplicate {
                entity,
                field,
                value,
            } => (
                StatusCode::CONFLICT,
                ErrorData::new("DUPLICATE_ENTRY").with_details(json!({
                    "entity": entity,
                    "field": field,
                    "value": value,
                })),
            ),
            AppError::Validation { field, reason } => (
                StatusCode::BAD_REQUEST,
                ErrorData::new("VALIDATION_ERROR")
                    .with_details(json!([{ "field": field, "message": reason }])),
            ),
            AppError::ValidationErrors { errors } => (
                StatusCode::BAD_REQUEST,
                ErrorData::new("VALIDATION_ERROR").with_details(json!(errors)),
            ),
            AppError::BadRequest { .. } => {
                (StatusCode::BAD_REQUEST, ErrorData::new("BAD_REQUEST"))
            }
            AppError::Unauthorized { .. } => {
                (StatusCode::UNAUTHORIZED, ErrorData::new("UNAUTHORIZED"))
            }
            AppError::Database { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorData::new("DATABASE_ERROR"),
            ),
            AppError::ConnectionPool { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorData::new("SERVICE_UNAVAILABLE"),
            ),
            AppError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorData::new("INTERNAL_ERROR"),
            ),
        }
    }

    /// Client-facing description; server-side causes are replaced by a generic message.
    fn public_description(&self) -> String {
        match self {
            AppError::Database { .. } => "Database operation failed".to_string(),
            AppError::ConnectionPool { .. } => "Database connection unavailable".to_string(),
            AppError::Internal { .. } => "An internal error occurred".to_string(),
            AppError::BadRequest { message } | AppError::Unauthorized { message } => {
                message.clone()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, data) = self.status_and_data();

        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        ErrorResponse::new(status, self.public_description(), Some(data)).into_response()
    }
}

fn code_for_status(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Error")
        .to_ascii_uppercase()
        .replace([' ', '-'], "_")
}

/// Rewrites error responses produced outside handlers (unknown routes,
/// extractor rejections, timeouts, body limits) into the envelope.
///
/// Responses that are already JSON pass through untouched.
pub async fn global_error_handler(
    request: axum::extract::Request,
    next: axum::middleware::Next,
) -> Response {
    let response = next.run(request).await;
    let status = response.status();

    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"));
    if is_json {
        return response;
    }

    let (_parts, body) = response.into_parts();
    let body_bytes = axum::body::to_bytes(body, MAX_REWRITE_BODY)
        .await
        .unwrap_or_default();
    let original_message = String::from_utf8_lossy(&body_bytes).trim().to_string();

    let description = if original_message.is_empty() {
        status.canonical_reason().unwrap_or("Error").to_string()
    } else {
        original_message
    };

    ErrorResponse::new(
        status,
        description,
        Some(ErrorData::new(code_for_status(status))),
    )
    .into_response()
}
