//! Error types for javabuild-cli

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for javabuild-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in javabuild-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from javabuild-core
    #[error("Core error: {0}")]
    Core(#[from] javabuild_core::Error),

    /// Configuration file could not be understood
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong with the configuration
        message: String,
    },

    /// I/O error tied to a specific path
    #[error("I/O error at {}: {source}", path.display())]
    IoWithPath {
        /// Path being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// I/O error on standard output or error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A resource set rendered to nothing because its origin was rejected
    #[error("No valid resource directory at {}", origin.display())]
    AbsentResource {
        /// Origin directory that was offered
        origin: PathBuf,
    },
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates an I/O error annotated with the path that caused it.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::IoWithPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
