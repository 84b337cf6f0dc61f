//! Error types for core module
//!
//! Configuration loading and saving are the only fallible operations in the
//! crate; the rules engine itself reports no-ops instead of errors.

use thiserror::Error;

/// Errors that can occur while reading or writing engine configuration
#[derive(Error, Debug)]
pub enum CoreError {
    /// Config file I/O error
    #[error("Config I/O error: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Config serialization/deserialization error
    #[error("Config serialization error: {0}")]
    ConfigSerialization(#[from] serde_json::Error),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
