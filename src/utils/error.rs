use thiserror::Error;

/// Failures reported by the object-storage backend. The adapter never
/// interprets these; they reach the caller exactly as the backend produced them.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Storage request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Storage API error ({status}): {message}")]
    Api {
        status: u16,
        error: String,
        message: String,
    },

    #[error("Invalid storage endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Invalid object key '{key}': {reason}")]
    InvalidObjectKey { key: String, reason: String },
}

impl BackendError {
    /// HTTP status reported by the storage API, if the failure came from it.
    pub fn status(&self) -> Option<u16> {
        match self {
            BackendError::Api { status, .. } => Some(*status),
            BackendError::Transport(e) => e.status().map(|s| s.as_u16()),
            BackendError::InvalidEndpoint { .. } | BackendError::InvalidObjectKey { .. } => None,
        }
    }
}

pub type BackendResult<T> = std::result::Result<T, BackendError>;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("No file content provided")]
    ContentMissing,

    #[error("Invalid file URL - cannot extract file path: {url}")]
    InvalidUrl { url: String },

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("Failed to read file stream: {0}")]
    StreamError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, UploadError>;
