//! Errors returned by the API client.

use thiserror::Error;

use super::category::ErrorCategory;
use crate::traits::HttpError;

/// Error type for every [`crate::api::ApiClient`] operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("{operation}: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: HttpError,
    },

    /// `POST /auth/login` answered with a non-2xx status
    #[error("login rejected with status {status}")]
    LoginRejected { status: u16 },

    /// Any other endpoint answered 401; the session cookie is missing or expired
    #[error("{operation}: session is not authenticated")]
    Unauthorized { operation: &'static str },

    /// Non-2xx status other than 401
    #[error("{operation} failed ({status}): {message}")]
    Status {
        operation: &'static str,
        status: u16,
        message: String,
    },

    /// A record the service referred to could not be resolved
    #[error("{operation}: no record for id {id}")]
    NotFound { operation: &'static str, id: String },

    /// Request body could not be encoded
    #[error("{operation}: could not encode request: {source}")]
    Encode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Response body did not match the expected shape
    #[error("{operation}: could not decode response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiError::Transport { .. } => ErrorCategory::Network,
            ApiError::LoginRejected { .. } | ApiError::Unauthorized { .. } => ErrorCategory::Auth,
            ApiError::Status { .. } | ApiError::NotFound { .. } => ErrorCategory::Server,
            ApiError::Encode { .. } | ApiError::Decode { .. } => ErrorCategory::Client,
        }
    }

    /// True when the session cookie is no longer accepted and the user has
    /// to log in again.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Transport { .. } => "E_API_TRANSPORT",
            ApiError::LoginRejected { .. } => "E_API_LOGIN",
            ApiError::Unauthorized { .. } => "E_API_UNAUTHORIZED",
            ApiError::Status { .. } => "E_API_STATUS",
            ApiError::NotFound { .. } => "E_API_NOT_FOUND",
            ApiError::Encode { .. } => "E_API_ENCODE",
            ApiError::Decode { .. } => "E_API_DECODE",
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport { source, .. } => match source {
                HttpError::Timeout(_) => "The service took too long to respond.".to_string(),
                _ => "Unable to reach the dog service. Check your connection.".to_string(),
            },
            ApiError::LoginRejected { .. } => "Login failed. Please try again.".to_string(),
            ApiError::Unauthorized { .. } => "Your session has expired. Please log in again.".to_string(),
            ApiError::Status { status, .. } => match *status {
                400 => "The service rejected the request.".to_string(),
                404 => "The requested resource was not found.".to_string(),
                429 => "Too many requests. Please wait a moment.".to_string(),
                500..=599 => "The dog service is having trouble. Please try again later.".to_string(),
                other => format!("The service returned an error (HTTP {}).", other),
            },
            ApiError::NotFound { .. } => "The service returned an unknown dog.".to_string(),
            ApiError::Encode { .. } | ApiError::Decode { .. } => {
                "Received an unexpected response from the service.".to_string()
            }
        }
    }
}
