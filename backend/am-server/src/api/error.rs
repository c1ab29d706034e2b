//! REST API error types
//!
//! Every error renders as `{ "message": ... }`. Internal errors render as
//! `{ "message": "Server error", "error": ... }` with a short description;
//! the full error, with its location, is only logged.

use am_auth::AuthError;
use am_core::CoreError;
use am_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const MISSING_CREDENTIALS_MESSAGE: &str = "Email and password are required";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Your Email or Password is incorrect";
pub const REGISTRATION_PENDING_MESSAGE: &str = "Your registration request is pending or rejected";
pub const NO_TOKEN_MESSAGE: &str = "No token provided";
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid token";
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Missing or rejected token (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Authenticated but not allowed (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500). `message` is returned as the `error` field.
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>, field: &str) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } | Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        let body = match self {
            ApiError::Internal { message, .. } => ApiErrorResponse {
                message: SERVER_ERROR_MESSAGE.to_string(),
                error: Some(message),
            },
            ApiError::BadRequest { message, .. }
            | ApiError::Validation { message, .. }
            | ApiError::Unauthorized { message, .. }
            | ApiError::Forbidden { message, .. }
            | ApiError::NotFound { message, .. } => ApiErrorResponse {
                message,
                error: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Convert login and token errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            AuthError::MissingCredentials { .. } => ApiError::BadRequest {
                message: MISSING_CREDENTIALS_MESSAGE.to_string(),
                location,
            },
            AuthError::InvalidCredentials { .. } => ApiError::BadRequest {
                message: INVALID_CREDENTIALS_MESSAGE.to_string(),
                location,
            },
            AuthError::RegistrationPending { .. } => ApiError::Forbidden {
                message: REGISTRATION_PENDING_MESSAGE.to_string(),
                location,
            },
            AuthError::MissingHeader { .. } => ApiError::Unauthorized {
                message: NO_TOKEN_MESSAGE.to_string(),
                location,
            },
            ref rejected if rejected.is_token_rejection() => {
                log::debug!("Token rejected ({}): {}", rejected.error_code(), rejected);
                ApiError::Unauthorized {
                    message: INVALID_TOKEN_MESSAGE.to_string(),
                    location,
                }
            }
            other => {
                log::error!("Authentication failure ({}): {}", other.error_code(), other);
                ApiError::Internal {
                    message: internal_auth_description(&other).to_string(),
                    location,
                }
            }
        }
    }
}

/// Location-free description of an internal login failure.
fn internal_auth_description(e: &AuthError) -> &'static str {
    match e {
        AuthError::Store { .. } => "Identity lookup failed",
        AuthError::PasswordHash { .. } => "Stored credentials are invalid",
        AuthError::JwtEncode { .. } => "Token could not be issued",
        _ => "Authentication failed",
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert domain errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            CoreError::InvalidRole { value, .. } => ApiError::Validation {
                message: format!("Invalid role: {value}"),
                field: Some("role".to_string()),
                location,
            },
            other => {
                log::error!("Domain error: {}", other);
                ApiError::Internal {
                    message: "Stored data is invalid".to_string(),
                    location,
                }
            }
        }
    }
}

/// Malformed or missing JSON bodies
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: e.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
