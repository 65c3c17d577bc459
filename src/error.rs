//! Error types for cfgdefaults
//!
//! Library code returns `DefaultsResult`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cfgdefaults operations
pub type DefaultsResult<T> = Result<T, DefaultsError>;

/// Main error type for cfgdefaults operations
#[derive(Error, Debug)]
pub enum DefaultsError {
    /// A scalar field could not be read from its instance
    #[error("cannot read field '{field}' of {type_name}")]
    Access { type_name: String, field: String },

    /// A type has no usable zero-argument constructor
    #[error("cannot instantiate {type_name}: {reason}")]
    Instantiation { type_name: String, reason: String },

    /// The requested configuration type is not registered
    #[error("configuration type not found: {name}")]
    TypeNotFound { name: String },

    /// Composite nesting went past the configured limit
    #[error("composite nesting exceeds max depth {limit}")]
    DepthExceeded { limit: usize },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
