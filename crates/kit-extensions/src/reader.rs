//! Discovery of installed extensions from the host manifest.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;

use kit_fs::Storage;

use crate::RECOGNIZED_KEYS;
use crate::error::{Error, Result};
use crate::layout::ProjectLayout;
use crate::manifest::ExtensionManifest;
use crate::registry::ExtensionRegistry;

/// The slice of the host `package.json` the extension system reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    /// Installed dependency names mapped to version constraints. The
    /// constraints are never interpreted here.
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    /// Parse the host manifest from its JSON source.
    pub fn from_json(path: &Path, json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::HostManifestParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Scans the host's declared dependencies for extension manifests.
///
/// Discovery is driven by the dependency list, never by walking
/// `node_modules`: a package that is not declared is invisible, and a
/// declared package that is not installed is silently skipped.
pub struct ManifestReader<'a, S> {
    layout: &'a ProjectLayout,
    storage: &'a S,
}

impl<'a, S: Storage> ManifestReader<'a, S> {
    /// Create a reader over one project.
    pub fn new(layout: &'a ProjectLayout, storage: &'a S) -> Self {
        Self { layout, storage }
    }

    /// Build a fresh registry snapshot.
    ///
    /// Dependencies without a manifest file are recorded as plain packages.
    /// A manifest that exists but fails to parse aborts the whole scan with
    /// an error naming the extension; the caller keeps whatever snapshot it
    /// had before.
    pub fn read(&self) -> Result<ExtensionRegistry> {
        let host_path = self.layout.host_manifest();
        let host_json = self.storage.read_to_string(&host_path)?;
        let host = PackageManifest::from_json(&host_path, &host_json)?;

        let mut extensions = BTreeMap::new();
        let mut non_extensions = BTreeSet::new();

        for name in host.dependencies.keys() {
            let manifest_path = self.layout.extension_manifest(name);
            if !self.storage.exists(&manifest_path) {
                tracing::debug!("Package '{}' ships no extension manifest", name);
                non_extensions.insert(name.clone());
                continue;
            }

            let json = self.storage.read_to_string(&manifest_path)?;
            let manifest = ExtensionManifest::from_json(name.clone(), &json)?;
            for key in manifest.keys() {
                if !RECOGNIZED_KEYS.contains(&key) {
                    tracing::debug!("Extension '{}' declares unrecognized key '{}'", name, key);
                }
            }
            extensions.insert(name.clone(), manifest);
        }

        tracing::info!(
            "Found {} extensions among {} dependencies",
            extensions.len(),
            host.dependencies.len()
        );

        Ok(ExtensionRegistry::from_parts(extensions, non_extensions))
    }
}
