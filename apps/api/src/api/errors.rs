use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::errors::RosterError;

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 409 Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Translates a lifecycle error into a response
    ///
    /// Validation, conflict and not-found errors carry their own message.
    /// Storage failures are logged and answered with `fallback`, so backend
    /// details never reach the client.
    pub fn from_roster(error: RosterError, fallback: &str) -> Self {
        match error {
            RosterError::Validation(message) => Self::bad_request(message),
            RosterError::Conflict(message) => Self::conflict(message),
            RosterError::NotFound(message) => Self::not_found(message),
            RosterError::Storage(source) => {
                tracing::error!(error = %source, "{}", fallback);
                Self::internal_server_error(fallback)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::StorageError;

    #[test]
    fn taxonomy_maps_to_statuses() {
        let cases = [
            (RosterError::validation("empty"), StatusCode::BAD_REQUEST),
            (RosterError::conflict("taken"), StatusCode::CONFLICT),
            (RosterError::not_found("gone"), StatusCode::NOT_FOUND),
        ];

        for (error, status) in cases {
            let message = error.to_string();
            let api_error = ApiError::from_roster(error, "fallback");
            assert_eq!(api_error.status, status);
            assert_eq!(api_error.message, message);
        }
    }

    #[test]
    fn storage_error_uses_fallback_message() {
        let error = RosterError::Storage(StorageError::Backend("password=secret".to_string()));

        let api_error = ApiError::from_roster(error, "Unable to create group");

        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.message, "Unable to create group");
    }

    #[test]
    fn into_response_keeps_status() {
        let response = ApiError::conflict("taken").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
