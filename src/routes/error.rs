use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::authentication::{AccessError, AuthError};
use crate::database::QueryError;

/// Every failure an endpoint can report, rendered as
/// `{"error": ..., "message": ...}` with the matching status code.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Not logged in")]
    Unauthorized,
    #[error("Invalid credentials")]
    InvalidCredentials(#[source] anyhow::Error),
    #[error("{0}")]
    Forbidden(String),
    #[error("Route not found")]
    NotFound(String),
    #[error("Invalid request")]
    BadRequest(String),
    #[error("Registration failed")]
    DuplicateKey(#[source] QueryError),
    #[error("Service unavailable")]
    ServiceUnavailable(#[source] QueryError),
    #[error("{0}")]
    SessionError(&'static str, #[source] anyhow::Error),
    #[error("{0}")]
    UnexpectedError(&'static str, #[source] anyhow::Error),
}

#[derive(serde::Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl ApiError {
    /// Maps a query failure, using `context` as the client-facing message
    /// when the failure is unexpected.
    pub fn query(context: &'static str) -> impl FnOnce(QueryError) -> Self {
        move |error| match error {
            QueryError::DuplicateKey(_) => ApiError::DuplicateKey(error),
            QueryError::ServiceUnavailable(_) => {
                ApiError::ServiceUnavailable(error)
            }
            QueryError::Database(_) => {
                ApiError::UnexpectedError(context, error.into())
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized | ApiError::InvalidCredentials(_) => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::DuplicateKey(_) => StatusCode::CONFLICT,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::SessionError(..) | ApiError::UnexpectedError(..) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn message(&self) -> Option<String> {
        match self {
            ApiError::NotFound(path) => {
                Some(format!("The route {} does not exist", path))
            }
            ApiError::BadRequest(message) => Some(message.clone()),
            ApiError::DuplicateKey(_) => {
                Some("Username or email is already taken".to_string())
            }
            ApiError::ServiceUnavailable(_) => {
                Some("The database is not accepting connections".to_string())
            }
            ApiError::UnexpectedError(..) => Some(self.to_string()),
            _ => None,
        }
    }
}

impl From<AccessError> for ApiError {
    fn from(error: AccessError) -> Self {
        match error {
            AccessError::Unauthorized => ApiError::Unauthorized,
            AccessError::Forbidden { .. } => {
                ApiError::Forbidden(error.to_string())
            }
            AccessError::SessionError(e) => {
                ApiError::SessionError("Failed to read session", e)
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::InvalidCredentials(e) => ApiError::InvalidCredentials(e),
            AuthError::Query(e) => ApiError::query("Login failed")(e),
            AuthError::UnexpectedError(e) => {
                ApiError::UnexpectedError("Login failed", e)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{} Reason {:?}", self, self);
        } else {
            tracing::info!("{} Reason {:?}", self, self);
        }
        let body = match &self {
            ApiError::UnexpectedError(..) => ErrorResponse {
                error: "Internal server error".to_string(),
                message: self.message(),
            },
            _ => ErrorResponse {
                error: self.to_string(),
                message: self.message(),
            },
        };
        (status, Json(body)).into_response()
    }
}
