//! Typed error definitions for media_manager.
//! Storage providers report failures through `DiskError`; the service turns
//! them into `Outcome` flags or fallback values and never surfaces them to callers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiskError {
    #[error("Path not found: {0}")]
    NotFound(String),

    #[error("Path already exists: {0}")]
    AlreadyExists(String),

    #[error("{op} '{path}' failed: {message}")]
    Io {
        op: &'static str,
        path: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Operation not supported by disk '{disk}': {op}")]
    Unsupported { disk: String, op: &'static str },

    #[error("Timestamp out of range: {0}")]
    InvalidTimestamp(i64),
}

impl DiskError {
    /// Short stable identifier for structured logs.
    pub fn code(&self) -> &'static str {
        match self {
            DiskError::NotFound(_) => "not_found",
            DiskError::AlreadyExists(_) => "already_exists",
            DiskError::Io { .. } => "io",
            DiskError::Unsupported { .. } => "unsupported",
            DiskError::InvalidTimestamp(_) => "invalid_timestamp",
        }
    }
}

pub type DiskResult<T> = std::result::Result<T, DiskError>;
