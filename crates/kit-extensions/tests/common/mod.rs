//! Shared fixture helpers for kit-extensions integration tests.
//!
//! Each test assembles an in-memory project under [`ROOT`], installs
//! extensions by writing their manifests, and queries through a fully
//! refreshed [`Extensions`] instance.

use std::path::PathBuf;

use kit_extensions::{Extensions, HOST_MANIFEST_FILENAME, MANIFEST_FILENAME, MODULES_DIRNAME};
use kit_fs::MemoryStorage;

/// Root of the in-memory host project.
pub const ROOT: &str = "/app";

/// The manifest the bundled frontend ships in these tests.
pub const GOVUK_MANIFEST: &str = r#"{
    "nunjucksPaths": ["/", "/components"],
    "scripts": ["/all.js"],
    "assets": ["/assets"],
    "sass": ["/all.scss"]
}"#;

/// Build a project with the given `(name, manifest_json)` extensions
/// installed.
pub fn project(extensions: &[(&str, &str)]) -> MemoryStorage {
    let mut storage = MemoryStorage::new();
    let names: Vec<&str> = extensions.iter().map(|(name, _)| *name).collect();
    storage.insert(host_manifest_path(), host_manifest(&names));
    for (name, manifest) in extensions {
        storage.insert(extension_manifest_path(name), *manifest);
    }
    storage
}

/// A refreshed extension system over `storage` with a fixed preference
/// (`None` means unconfigured).
pub fn kit(
    storage: MemoryStorage,
    preference: Option<Vec<String>>,
) -> Extensions<MemoryStorage, Option<Vec<String>>> {
    let mut extensions = Extensions::new(ROOT, storage, preference);
    extensions.refresh().unwrap();
    extensions
}

/// `package.json` content declaring `names` as dependencies.
pub fn host_manifest(names: &[&str]) -> String {
    let deps: Vec<String> = names
        .iter()
        .map(|name| format!("\"{name}\": \"1.0.0\""))
        .collect();
    format!("{{\"dependencies\": {{{}}}}}", deps.join(", "))
}

pub fn host_manifest_path() -> PathBuf {
    PathBuf::from(ROOT).join(HOST_MANIFEST_FILENAME)
}

pub fn extension_manifest_path(name: &str) -> PathBuf {
    package_dir(name).join(MANIFEST_FILENAME)
}

/// Installed directory for `name`, as the resolver derives it.
pub fn package_dir(name: &str) -> PathBuf {
    PathBuf::from(ROOT).join(MODULES_DIRNAME).join(name)
}

/// Convenience for building expected preference vectors.
pub fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
