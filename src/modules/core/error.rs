//! Error types for zcomp

use thiserror::Error;

/// Main error type for zcomp operations
#[derive(Error, Debug)]
pub enum ZcompError {
    /// Introspection dump could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Command tree failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// The introspection producer broke its contract (unknown parameter kind, bad arity)
    #[error("Contract violation: {0}")]
    Contract(String),

    /// No completion backend registered under this name
    #[error("Unknown completion backend: {0}")]
    UnknownBackend(String),

    /// Dynamic completion was requested without a type name
    #[error("No type to complete: pass --type or set COMP_TYPE")]
    MissingCompType,

    /// File system error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ZcompError {
    /// Process exit code (sysexits.h values)
    pub fn exit_code(&self) -> i32 {
        match self {
            ZcompError::UnknownBackend(_) | ZcompError::MissingCompType => 64,
            ZcompError::Config(_) | ZcompError::Validation(_) | ZcompError::Json(_) => 65,
            ZcompError::Contract(_) => 70,
            ZcompError::Io(_) => 74,
        }
    }
}

/// Result type alias using ZcompError
pub type Result<T> = std::result::Result<T, ZcompError>;
