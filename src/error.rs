//! Error type for outbound API operations.
//!
//! Webhook verification has its own disjoint error types in
//! [`crate::webhook`]; nothing here is ever returned from that path.

use serde::{Deserialize, Serialize};

/// Error from an outbound Rocket Pay API call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for categorization.
    pub code: ApiErrorCode,

    /// Human-readable message.
    pub message: String,

    /// HTTP status of the failed response, when one was received.
    pub status: Option<u16>,

    /// Per-field validation errors reported by the API.
    pub field_errors: Vec<FieldError>,

    /// Whether the operation can reasonably be retried by the host.
    ///
    /// Advisory only: the client itself never retries.
    pub retryable: bool,
}

/// One field-level validation error from the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending request property.
    pub property: String,

    /// What was wrong with it.
    pub error: String,
}

impl ApiError {
    /// Create a new error with the given code.
    pub fn new(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            status: None,
            field_errors: Vec::new(),
            retryable: code.is_retryable(),
        }
    }

    /// Transport-level failure: the request never produced a response.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::NetworkError, message)
    }

    /// The API rejected the key.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::Unauthorized, message)
    }

    /// A response arrived but could not be decoded.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::DecodeError, message)
    }

    /// The API reported a failure for the request.
    pub fn api(status: u16, message: impl Into<String>, field_errors: Vec<FieldError>) -> Self {
        let code = match status {
            400 => ApiErrorCode::InvalidRequest,
            401 | 403 => ApiErrorCode::Unauthorized,
            404 => ApiErrorCode::NotFound,
            _ => ApiErrorCode::ProviderError,
        };

        let mut err = Self::new(code, message);
        err.status = Some(status);
        err.field_errors = field_errors;
        err
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::decode(err.to_string())
        } else {
            ApiError::network(err.to_string())
        }
    }
}

/// Categories of API errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorCode {
    /// Network connectivity issue.
    NetworkError,

    /// API key missing, invalid, or revoked.
    Unauthorized,

    /// Request was rejected as invalid.
    InvalidRequest,

    /// Resource not found.
    NotFound,

    /// Response body could not be decoded.
    DecodeError,

    /// The API reported a server-side failure.
    ProviderError,
}

impl ApiErrorCode {
    /// Check if this error category is typically retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApiErrorCode::NetworkError | ApiErrorCode::ProviderError
        )
    }
}

impl std::fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ApiErrorCode::NetworkError => "network_error",
            ApiErrorCode::Unauthorized => "unauthorized",
            ApiErrorCode::InvalidRequest => "invalid_request",
            ApiErrorCode::NotFound => "not_found",
            ApiErrorCode::DecodeError => "decode_error",
            ApiErrorCode::ProviderError => "provider_error",
        };
        write!(f, "{}", s)
    }
}
