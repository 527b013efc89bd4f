//! Error types for format operations

use thiserror::Error;

/// Errors that can occur while selecting or driving a format
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Format does not accept the requested operation or option
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// Input could not be unpacked into summary text
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}
