//! Error types for oktaswa

use thiserror::Error;

/// Result type alias for oktaswa operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid parameters: {0}")]
    Validation(String),
}

/// Okta API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Any response whose status is not 200
    #[error("Fail: Status: {msg}, Message: {body}")]
    Remote { status: u16, msg: String, body: String },

    /// The fetched application could not be read as a descriptor
    #[error("Okta returned a malformed application descriptor: {0}")]
    MalformedDescriptor(String),

    #[error("Network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network(format!("Failed to connect to Okta: {}", err))
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("API key not configured. Pass --api-key or set OKTA_API_KEY.")]
    MissingApiKey,

    #[error("Organization not configured. Pass --org or set OKTA_ORG.")]
    MissingOrganization,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
