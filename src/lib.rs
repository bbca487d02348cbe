//! # Cinelog
//!
//! A persistent movie watchlist for the command line.
//!
//! Cinelog keeps an ordered list of movie records in an on-disk key-value
//! store and lets you add, edit, filter, and delete them from a small CLI.
//!
//! ## Architecture
//!
//! - A storage layer: a [`storage::KeyValueBackend`] trait with filesystem
//!   and in-memory engines, wrapped by the typed [`storage::Store`] facade
//! - A record manager ([`services::WatchlistService`]) that owns the
//!   in-memory collection, validates input, and persists the whole list
//!   under a single key after every mutation
//! - A CLI binary that renders results and is the only error boundary
//!
//! ## Example
//!
//! ```rust,ignore
//! use cinelog::{Store, WatchlistService};
//!
//! let store = Store::open(".cinelog", "cinelog");
//! let mut watchlist = WatchlistService::open(store)?;
//! watchlist.add("Inception", "2010")?;
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use thiserror::Error as ThisError;

// Module declarations
pub mod cli;
pub mod config;
pub mod models;
pub mod observability;
pub mod services;
pub mod storage;

// Re-exports for convenience
pub use config::CinelogConfig;
pub use models::{Movie, WatchFilter};
pub use services::WatchlistService;
pub use storage::{FilesystemBackend, KeyValueBackend, MemoryBackend, Store};

/// Error type for cinelog operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `MissingFields` | Name or year is empty on add/update |
/// | `InvalidName` | Name contains anything besides letters and spaces |
/// | `InvalidYear` | Year is not exactly four digits |
/// | `IndexOutOfRange` | A record index does not address the collection |
/// | `StorageRead` | The store file cannot be read or decoded |
/// | `StorageWrite` | The store file cannot be serialized or written |
/// | `OperationFailed` | Ambient failures (config parsing, logging init, terminal I/O) |
#[derive(Debug, ThisError)]
pub enum Error {
    /// A required input field was empty.
    ///
    /// Raised when the name or the year is missing on add/update. Checked
    /// before either pattern so an empty form never reports a pattern error.
    #[error("movie name and release year are required")]
    MissingFields,

    /// The movie name failed validation.
    ///
    /// Names may contain only letters and whitespace.
    #[error("movie name should contain only letters: {0:?}")]
    InvalidName(String),

    /// The release year failed validation.
    ///
    /// Years must be exactly four digits.
    #[error("release year should be a 4-digit number: {0:?}")]
    InvalidYear(String),

    /// A record index did not address the collection.
    ///
    /// Raised by every index-taking watchlist operation before any mutation.
    #[error("no movie at index {index} (the list has {len} entries)")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Collection length at the time of the call.
        len: usize,
    },

    /// A storage read failed.
    ///
    /// Raised when:
    /// - The store file exists but cannot be read
    /// - The store file or a stored value cannot be decoded
    #[error("storage read '{operation}' failed: {cause}")]
    StorageRead {
        /// The read step that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },

    /// A storage write failed.
    ///
    /// Raised when:
    /// - The store directory cannot be created
    /// - A value cannot be serialized
    /// - The store file cannot be written
    #[error("storage write '{operation}' failed: {cause}")]
    StorageWrite {
        /// The write step that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },

    /// An ambient operation failed.
    ///
    /// Raised when:
    /// - The configuration file cannot be read or parsed
    /// - Logging initialization fails
    /// - Terminal I/O fails during an interactive prompt
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for cinelog operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MissingFields;
        assert_eq!(err.to_string(), "movie name and release year are required");

        let err = Error::InvalidName("Blade Runner 2049".to_string());
        assert_eq!(
            err.to_string(),
            "movie name should contain only letters: \"Blade Runner 2049\""
        );

        let err = Error::InvalidYear("99".to_string());
        assert_eq!(
            err.to_string(),
            "release year should be a 4-digit number: \"99\""
        );

        let err = Error::IndexOutOfRange { index: 3, len: 2 };
        assert_eq!(err.to_string(), "no movie at index 3 (the list has 2 entries)");

        let err = Error::StorageWrite {
            operation: "write_store_file".to_string(),
            cause: "disk full".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "storage write 'write_store_file' failed: disk full"
        );
    }
}
