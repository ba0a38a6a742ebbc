//! Registry snapshot of installed extensions.

use std::collections::{BTreeMap, BTreeSet};

use crate::manifest::ExtensionManifest;

/// Snapshot of every installed extension's parsed manifest.
///
/// Built in one piece by [`ManifestReader::read`](crate::ManifestReader::read)
/// and swapped in by [`Extensions::refresh`](crate::Extensions::refresh);
/// queries between refreshes always see the same snapshot. Installed
/// packages without a manifest file are tracked by name so diagnostics can
/// tell "not an extension" apart from "not installed".
#[derive(Debug, Clone, Default)]
pub struct ExtensionRegistry {
    extensions: BTreeMap<String, ExtensionManifest>,
    non_extensions: BTreeSet<String>,
}

impl ExtensionRegistry {
    /// Create an empty registry, the state before the first refresh.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(
        extensions: BTreeMap<String, ExtensionManifest>,
        non_extensions: BTreeSet<String>,
    ) -> Self {
        Self {
            extensions,
            non_extensions,
        }
    }

    /// Look up an extension's manifest by package name.
    pub fn get(&self, name: &str) -> Option<&ExtensionManifest> {
        self.extensions.get(name)
    }

    /// Whether `name` is an installed extension.
    pub fn contains(&self, name: &str) -> bool {
        self.extensions.contains_key(name)
    }

    /// Installed extension names in lexicographic order.
    pub fn names(&self) -> Vec<String> {
        self.extensions.keys().cloned().collect()
    }

    /// Installed packages that ship no extension manifest, in lexicographic
    /// order.
    pub fn non_extensions(&self) -> Vec<String> {
        self.non_extensions.iter().cloned().collect()
    }

    /// Number of installed extensions.
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Whether no extensions are installed.
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}
