//! Common error types for the Green Datacenter Selector

use thiserror::Error;

/// Common result type for GDS operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across GDS components
#[derive(Error, Debug)]
pub enum Error {
    /// Upstream request failed (transport error or non-success HTTP status)
    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    /// Upstream response did not have the expected shape
    #[error("Parse failed: {0}")]
    ParseFailed(String),

    /// Requested region (or other resource) not in the registry
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
