//! Error types for the extension system.

use std::path::PathBuf;

/// Result type for extension system operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while discovering extensions or resolving the
/// paths they declare.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Storage-level failure reading a project file.
    #[error("storage error: {0}")]
    Storage(#[from] kit_fs::Error),

    /// The host `package.json` could not be parsed.
    #[error("failed to parse host manifest at {path}: {message}")]
    HostManifestParse { path: PathBuf, message: String },

    /// An extension's manifest file exists but could not be parsed.
    #[error("failed to parse extension manifest for '{extension}': {message}")]
    ManifestParse { extension: String, message: String },

    /// An extension declared a path containing a backslash.
    ///
    /// The message is part of the kit's user-facing contract; prototype
    /// authors see it verbatim when an extension misdeclares a path.
    #[error("Can't use backslashes in extension paths - \"{extension}\" used \"{path}\".")]
    BackslashInPath { extension: String, path: String },

    /// An extension declared a path that does not start with a forward
    /// slash. Also a verbatim user-facing message.
    #[error("All extension paths must start with a forward slash - \"{extension}\" used \"{path}\".")]
    MissingLeadingSlash { extension: String, path: String },
}
