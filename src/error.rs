//! Error types for harness operations.
//!
//! This module defines [`SmokeError`], the error type used for failures of
//! the harness itself, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Vendor call failures are never errors: probes record them as failing
//!   outcomes and carry on
//! - Use `SmokeError` for problems the harness must report to the user
//!   (a library that cannot be opened, an unknown probe name)
//! - Use `anyhow::Error` (via `SmokeError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for harness operations.
#[derive(Debug, Error)]
pub enum SmokeError {
    /// None of the candidate file names for a library could be loaded.
    #[error("{library} library not found (tried: {tried})")]
    LibraryNotFound { library: String, tried: String },

    /// A library was loaded but does not export an expected entry point.
    #[error("Symbol '{symbol}' not found in {library}: {message}")]
    SymbolNotFound {
        library: String,
        symbol: String,
        message: String,
    },

    /// A probe name given on the command line does not exist.
    #[error("Unknown probe '{name}' (available: {available})")]
    UnknownProbe { name: String, available: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for harness operations.
pub type Result<T> = std::result::Result<T, SmokeError>;
