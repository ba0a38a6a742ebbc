//! The extension system façade.

use std::path::PathBuf;

use kit_fs::Storage;

use crate::config::BaseExtensions;
use crate::error::Result;
use crate::layout::ProjectLayout;
use crate::ordering::resolution_order;
use crate::reader::ManifestReader;
use crate::registry::ExtensionRegistry;
use crate::resolve::{self, ResolvedPath};

/// Public URL aggregates consumed by the kit's page scaffolding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Script URLs, in resolution order.
    pub scripts: Vec<String>,
    /// Stylesheet URLs, in resolution order.
    pub stylesheets: Vec<String>,
}

/// Discovery, ordering, and path resolution over one host project.
///
/// Holds the current registry snapshot. Queries never touch storage; call
/// [`refresh`](Self::refresh) after packages are installed or removed. The
/// base-extensions preference is re-read from `base` on every query.
#[derive(Debug)]
pub struct Extensions<S, B> {
    layout: ProjectLayout,
    storage: S,
    base: B,
    registry: ExtensionRegistry,
}

impl<S: Storage, B: BaseExtensions> Extensions<S, B> {
    /// Create an extension system for the project at `root`.
    ///
    /// The registry starts empty; nothing is read until the first
    /// [`refresh`](Self::refresh).
    pub fn new(root: impl Into<PathBuf>, storage: S, base: B) -> Self {
        Self {
            layout: ProjectLayout::new(root),
            storage,
            base,
            registry: ExtensionRegistry::new(),
        }
    }

    /// Rescan the host's dependencies and swap in a fresh snapshot.
    ///
    /// On error the previous snapshot stays in service.
    pub fn refresh(&mut self) -> Result<()> {
        self.registry = ManifestReader::new(&self.layout, &self.storage).read()?;
        Ok(())
    }

    /// The current registry snapshot.
    pub fn registry(&self) -> &ExtensionRegistry {
        &self.registry
    }

    /// Project layout the system resolves against.
    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Storage the project is read from.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Mutable access to storage, for hosts that assemble virtual projects
    /// and refresh in place.
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Installed extension names in the order their contributions are
    /// aggregated: base-extensions preference first, the rest alphabetical.
    pub fn resolution_order(&self) -> Vec<String> {
        let preference = self.base.base_extensions();
        resolution_order(&self.registry, preference.as_deref())
    }

    /// On-disk locations every extension contributes under `key`.
    pub fn file_system_paths(&self, key: &str) -> Result<Vec<PathBuf>> {
        Ok(self
            .resolved(key)?
            .into_iter()
            .map(|entry| entry.file_system_path)
            .collect())
    }

    /// Public URLs every extension contributes under `key`.
    pub fn public_urls(&self, key: &str) -> Result<Vec<String>> {
        Ok(self
            .resolved(key)?
            .into_iter()
            .map(|entry| entry.public_url)
            .collect())
    }

    /// Paired URL and on-disk location for every contribution under `key`.
    pub fn public_url_and_file_system_paths(&self, key: &str) -> Result<Vec<ResolvedPath>> {
        self.resolved(key)
    }

    /// Template search paths for the host's view engine.
    ///
    /// Later extensions override earlier ones in template lookup, so the
    /// aggregated `nunjucksPaths` sequence is reversed before `extra_paths`
    /// (the host's own view directories) are appended untouched.
    pub fn app_views(&self, extra_paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut views = self.file_system_paths("nunjucksPaths")?;
        views.reverse();
        views.extend(extra_paths.iter().cloned());
        Ok(views)
    }

    /// Script and stylesheet URL aggregates for page scaffolding.
    pub fn app_config(&self) -> Result<AppConfig> {
        Ok(AppConfig {
            scripts: self.public_urls("scripts")?,
            stylesheets: self.public_urls("stylesheets")?,
        })
    }

    /// Walk the resolution order once, resolving every declaration under
    /// `key`. One invalid declaration fails the whole walk.
    fn resolved(&self, key: &str) -> Result<Vec<ResolvedPath>> {
        let mut entries = Vec::new();
        for name in self.resolution_order() {
            if let Some(manifest) = self.registry.get(&name) {
                for declared in manifest.list(key) {
                    entries.push(resolve::resolve(&self.layout, &name, key, declared)?);
                }
            }
        }
        Ok(entries)
    }
}
