//! Error handling for IFS Studio
//!
//! The fractal core has no failure paths: every cap (vertex count, clone
//! count, level floor) is a silent no-op. Errors only arise on the outer
//! surfaces: parsing typed commands, loading configuration and writing
//! output.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for IFS Studio operations
pub type Result<T> = std::result::Result<T, IfsError>;

/// Main error type for IFS Studio operations
#[derive(Error, Debug)]
pub enum IfsError {
    // Command Errors
    #[error("Unknown command: '{input}'")]
    UnknownCommand { input: String },

    #[error("Invalid argument for '{command}': {reason}")]
    InvalidArgument { command: String, reason: String },

    // Configuration Errors
    #[error("Failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {reason}")]
    ConfigParse { reason: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IfsError {
    /// Shorthand for an argument error on a named command
    pub fn invalid_argument(command: &str, reason: impl Into<String>) -> Self {
        IfsError::InvalidArgument {
            command: command.to_string(),
            reason: reason.into(),
        }
    }

    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            IfsError::UnknownCommand { .. } => "UNKNOWN_COMMAND",
            IfsError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            IfsError::ConfigRead { .. } => "CONFIG_READ",
            IfsError::ConfigParse { .. } => "CONFIG_PARSE",
            IfsError::Io(_) => "IO_ERROR",
            IfsError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if an interactive session can continue after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            IfsError::UnknownCommand { .. } | IfsError::InvalidArgument { .. }
        )
    }
}
