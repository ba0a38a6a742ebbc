//! Well-known locations inside a host project.

use std::path::{Path, PathBuf};

use crate::{HOST_MANIFEST_FILENAME, MANIFEST_FILENAME, MODULES_DIRNAME};

/// Derives every filesystem location the extension system cares about from
/// the host project root.
///
/// Keeping the derivations in one place means the reader and the path
/// resolver can never disagree about where a package or its manifest lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Create a layout rooted at the host project directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The host project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the host `package.json`.
    pub fn host_manifest(&self) -> PathBuf {
        self.root.join(HOST_MANIFEST_FILENAME)
    }

    /// Directory where dependency packages are installed.
    pub fn modules_dir(&self) -> PathBuf {
        self.root.join(MODULES_DIRNAME)
    }

    /// Installed package directory for `name`.
    pub fn package_dir(&self, name: &str) -> PathBuf {
        self.modules_dir().join(name)
    }

    /// Expected manifest path for the extension `name`.
    pub fn extension_manifest(&self, name: &str) -> PathBuf {
        self.package_dir(name).join(MANIFEST_FILENAME)
    }
}
