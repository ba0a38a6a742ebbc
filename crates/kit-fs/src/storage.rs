//! The [`Storage`] trait and its filesystem-backed implementation.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Read access to host project files.
///
/// The extension system only ever checks whether a file exists and reads
/// whole files as UTF-8, so the trait stays that small. Directories passed
/// to [`read_to_string`](Storage::read_to_string) surface as I/O errors,
/// matching what `std::fs` does.
pub trait Storage {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Read the file at `path` as UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String>;
}

/// Storage backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsStorage;

impl OsStorage {
    /// Create an OS-backed storage handle.
    pub fn new() -> Self {
        Self
    }
}

impl Storage for OsStorage {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| Error::io(path, e))
    }
}
