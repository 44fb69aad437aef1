//! Error types for the clinic-core library.
//!
//! This module provides custom error types using `thiserror` for better error
//! handling and more specific error messages throughout the application.

use thiserror::Error;

/// Errors that can occur in the clinic-core library.
#[derive(Error, Debug)]
pub enum ClinicError {
    /// An entity referenced by identifier does not exist
    #[error("{0} not found")]
    NotFound(String),

    /// Caller-supplied values failed boundary validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The underlying key-value store is unreadable or unwritable
    #[error("Storage error: {0}")]
    Store(#[from] sled::Error),

    /// A stored collection exists but could not be deserialized.
    ///
    /// Absence of a collection is not an error (it reads as empty); a
    /// present-but-malformed value is.
    #[error("Corrupt collection '{collection}': {source}")]
    CorruptCollection {
        /// Name of the collection that failed to decode
        collection: String,
        /// The underlying decode failure
        #[source]
        source: serde_json::Error,
    },

    /// Serialization of an in-memory collection failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// File I/O errors
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Result with ClinicError
pub type Result<T> = std::result::Result<T, ClinicError>;
