/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 3/11/25
******************************************************************************/
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One entry of a FastAPI style validation error list (`{"detail": [...]}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Location of the offending field, e.g. `["body", "id_curso"]`
    #[serde(default)]
    pub loc: Vec<Value>,
    /// Human readable message
    pub msg: String,
    /// Machine readable error type
    #[serde(rename = "type", default)]
    pub error_type: String,
}

/// Structured failure for a non-success HTTP status
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// HTTP status code returned by the backend
    pub status: StatusCode,
    /// Message taken from the error body, or synthesized from the status
    pub message: String,
    /// Parsed error body, an empty object when the body was not JSON
    pub details: Value,
}

impl ApiError {
    /// Returns true when the backend rejected the credentials (401)
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status == StatusCode::UNAUTHORIZED
    }

    /// Decodes the validation error list carried under `detail`, if any
    #[must_use]
    pub fn validation_errors(&self) -> Vec<ValidationError> {
        match self.details.get("detail") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.status.as_u16())
    }
}

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Transport level failure (connection refused, DNS, TLS...)
    Network(reqwest::Error),
    /// Non-success HTTP status with the parsed error body
    Api(ApiError),
    /// Response body was not valid JSON despite a success status
    Json(serde_json::Error),
    /// Binary download failed with the given status
    Download(StatusCode),
    /// The backend answered 204 where a payload was expected
    NoContent,
    /// Local I/O failure (file backed session store)
    Io(std::io::Error),
    /// Caller supplied an invalid argument
    InvalidInput(String),
    /// Payload had an unexpected shape
    Deserialization(String),
}

impl AppError {
    /// Returns the structured API failure, if this error carries one
    #[must_use]
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            AppError::Api(e) => Some(e),
            _ => None,
        }
    }

    /// HTTP status attached to the error, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Api(e) => Some(e.status),
            AppError::Download(status) => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Returns true for failures caused by a 401 response
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Api(e) => write!(f, "api error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Download(status) => {
                write!(f, "download failed with status {}", status.as_u16())
            }
            AppError::NoContent => write!(f, "no content"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        AppError::Api(e)
    }
}
