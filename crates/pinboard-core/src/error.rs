//! Client Errors
//!
//! Failures of HTTP calls and of configuration parsing.

use serde_json::Value;

/// Common result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// API-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response
    Network(String),
    /// Non-2xx response; `error` is the body's `error` field when it had one
    Status { status: u16, error: Option<String> },
    /// Response body did not match the expected shape
    Decode(String),
    /// Request body could not be serialized
    Encode(String),
}

impl ApiError {
    /// Build a `Status` error from a failed response body
    pub fn from_response(status: u16, body: &str) -> Self {
        let error = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string));
        ApiError::Status { status, error }
    }

    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { error: Some(msg), .. } => Some(msg),
            _ => None,
        }
    }

    /// Message shown to the user: the server's own words, or the fallback
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status { status, error: Some(msg) } => write!(f, "HTTP {}: {}", status, msg),
            ApiError::Status { status, error: None } => write!(f, "HTTP {}", status),
            ApiError::Decode(msg) => write!(f, "Parse error: {}", msg),
            ApiError::Encode(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Invalid configuration value
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidValue { key: &'static str, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value for {}: {:?}", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
