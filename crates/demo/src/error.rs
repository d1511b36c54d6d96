//! Demo error types.

use domain::DomainError;
use thiserror::Error;

/// Errors that abort the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    /// A domain operation that should have succeeded failed.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the JSON report failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
