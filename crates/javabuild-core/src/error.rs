//! Error types for javabuild-core

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for javabuild-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in javabuild-core
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Diagnostic sink write failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A resource action tag or name that is neither include nor exclude
    #[error("Invalid resource action: {0}")]
    InvalidAction(String),
}

/// Reason a value offered to a [`ResourceSpec`](crate::ResourceSpec) mutator
/// was rejected.
///
/// Rejection never changes the resource set. Callers that only care about
/// the final serialized output may ignore it.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ResourceError {
    /// The origin path does not exist
    #[error("origin directory does not exist: {}", path.display())]
    OriginNotFound {
        /// Offered origin path
        path: PathBuf,
    },

    /// The origin path exists but is not a directory
    #[error("origin is not a directory: {}", path.display())]
    OriginNotDirectory {
        /// Offered origin path
        path: PathBuf,
    },

    /// The origin directory has no entries
    #[error("origin directory is empty: {}", path.display())]
    OriginEmpty {
        /// Offered origin path
        path: PathBuf,
    },

    /// The origin directory could not be inspected
    #[error("origin directory cannot be read: {}: {source}", path.display())]
    OriginUnreadable {
        /// Offered origin path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A literal file entry was offered before any origin was accepted
    #[error("no origin directory set, cannot check resource file '{entry}'")]
    OriginUnset {
        /// Offered entry
        entry: String,
    },

    /// A literal file entry is not a regular file under the origin
    #[error("resource file '{entry}' not found under {}", origin.display())]
    FileNotFound {
        /// Offered entry
        entry: String,
        /// Origin directory the entry was resolved against
        origin: PathBuf,
    },
}
