//! Error types for kit-fs

use std::path::PathBuf;

/// Result type for kit-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in kit-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wrap an `std::io::Error`, splitting out the not-found case so
    /// callers can match on it without digging into the source error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path: path.into() }
        } else {
            Self::Io {
                path: path.into(),
                source,
            }
        }
    }

    /// The path the failed operation was addressed to.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::NotFound { path } => path,
            Self::Io { path, .. } => path,
        }
    }
}
