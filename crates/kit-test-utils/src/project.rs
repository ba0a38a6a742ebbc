//! [`TestProject`] builder for extension system test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary prototype kit project with helpers for installing and
/// removing extension packages.
///
/// # Example
///
/// ```rust,no_run
/// use kit_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.install_extension("govuk-frontend", r#"{"assets": ["/assets"]}"#);
/// project.uninstall("govuk-frontend");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create a project with an empty dependency list.
    pub fn new() -> Self {
        let project = Self {
            temp_dir: TempDir::new().unwrap(),
        };
        project.write_host_manifest(&[]);
        project
    }

    /// Root directory of the project.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Install an extension package: adds it to `package.json` and writes
    /// its manifest file under `node_modules/`.
    pub fn install_extension(&self, name: &str, manifest_json: &str) {
        self.add_dependency(name);
        self.write_raw_manifest(name, manifest_json);
    }

    /// Install a package that ships no extension manifest.
    pub fn install_package(&self, name: &str) {
        self.add_dependency(name);
        fs::create_dir_all(self.package_dir(name)).unwrap();
    }

    /// Remove a package: drops its dependency entry and deletes its
    /// installed directory.
    pub fn uninstall(&self, name: &str) {
        let mut dependencies = self.dependencies();
        dependencies.retain(|dep| dep != name);
        self.write_host_manifest(&dependencies);

        let dir = self.package_dir(name);
        if dir.exists() {
            fs::remove_dir_all(dir).unwrap();
        }
    }

    /// Overwrite an installed extension's manifest with raw bytes, valid
    /// JSON or not. Does not touch `package.json`.
    pub fn write_raw_manifest(&self, name: &str, contents: &str) {
        let manifest = self.manifest_path(name);
        fs::create_dir_all(manifest.parent().unwrap()).unwrap();
        fs::write(manifest, contents).unwrap();
    }

    /// Overwrite `package.json` wholesale.
    pub fn write_raw_host_manifest(&self, contents: &str) {
        fs::write(self.host_manifest_path(), contents).unwrap();
    }

    /// Path of the project's `package.json`.
    pub fn host_manifest_path(&self) -> PathBuf {
        self.root().join("package.json")
    }

    /// Installed directory for `name`.
    pub fn package_dir(&self, name: &str) -> PathBuf {
        self.root().join("node_modules").join(name)
    }

    /// Extension manifest path for `name`.
    pub fn manifest_path(&self, name: &str) -> PathBuf {
        self.package_dir(name).join("govuk-prototype-kit.config.json")
    }

    fn dependencies(&self) -> Vec<String> {
        let json = fs::read_to_string(self.host_manifest_path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        value["dependencies"]
            .as_object()
            .map(|deps| deps.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn add_dependency(&self, name: &str) {
        let mut dependencies = self.dependencies();
        if !dependencies.iter().any(|dep| dep == name) {
            dependencies.push(name.to_string());
        }
        self.write_host_manifest(&dependencies);
    }

    fn write_host_manifest(&self, dependencies: &[String]) {
        let mut deps = serde_json::Map::new();
        for name in dependencies {
            deps.insert(name.clone(), serde_json::Value::String("latest".to_string()));
        }
        let manifest = serde_json::json!({
            "name": "test-prototype",
            "dependencies": deps,
        });
        fs::write(
            self.host_manifest_path(),
            serde_json::to_string_pretty(&manifest).unwrap(),
        )
        .unwrap();
    }
}
