//! Extension manifest parsing for `govuk-prototype-kit.config.json` files.
//!
//! A manifest is a single JSON object mapping contribution keys to paths
//! inside the extension's package, each path written with a leading forward
//! slash. The canonical filename is
//! [`MANIFEST_FILENAME`](crate::MANIFEST_FILENAME).
//!
//! # Example JSON
//!
//! ```json
//! {
//!   "assets": "/assets",
//!   "scripts": ["/all.js", "/init.js"],
//!   "stylesheets": ["/all.css"],
//!   "nunjucksPaths": ["/", "/components"]
//! }
//! ```
//!
//! A value may be a single string or a list of strings; both parse to a
//! list so nothing downstream branches on shape. Keys are free-form: the
//! kit queries the well-known ones
//! ([`RECOGNIZED_KEYS`](crate::RECOGNIZED_KEYS)) and anything else stays
//! available for host-specific lookups. Declared paths are kept exactly as
//! written; validation happens at query time in [`resolve`](crate::resolve).

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{Error, Result};

/// One manifest value, before normalization.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PathList {
    One(String),
    Many(Vec<String>),
}

impl From<PathList> for Vec<String> {
    fn from(value: PathList) -> Self {
        match value {
            PathList::One(path) => vec![path],
            PathList::Many(paths) => paths,
        }
    }
}

/// Parsed manifest of a single installed extension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionManifest {
    name: String,
    lists: BTreeMap<String, Vec<String>>,
}

impl ExtensionManifest {
    /// Parse a manifest from its JSON source.
    ///
    /// `name` is the owning package name. The manifest body never repeats
    /// it; it features in errors and in downstream path resolution.
    pub fn from_json(name: impl Into<String>, json: &str) -> Result<Self> {
        let name = name.into();
        let raw: BTreeMap<String, PathList> =
            serde_json::from_str(json).map_err(|e| Error::ManifestParse {
                extension: name.clone(),
                message: e.to_string(),
            })?;

        let lists = raw
            .into_iter()
            .map(|(key, value)| (key, value.into()))
            .collect();

        Ok(Self { name, lists })
    }

    /// The owning package name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared paths for `key`, empty when the manifest does not mention
    /// it.
    pub fn list(&self, key: &str) -> &[String] {
        self.lists.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Keys this manifest declares, in lexicographic order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.lists.keys().map(String::as_str)
    }

    /// Whether the manifest declares nothing at all.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}
