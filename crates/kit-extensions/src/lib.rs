//! Extension discovery and path resolution for prototype kit projects.
//!
//! A prototype kit project grows by installing npm packages that ship a
//! `govuk-prototype-kit.config.json` manifest. This crate discovers those
//! packages from the host's `package.json`, keeps their parsed manifests in
//! a registry snapshot, and resolves the paths each extension contributes
//! (assets, scripts, stylesheets, sass, nunjucks search paths) to both
//! on-disk locations and the public URLs the kit serves them under.
//!
//! [`Extensions`] is the entry point:
//!
//! ```no_run
//! use kit_extensions::{Extensions, NoPreference};
//! use kit_fs::OsStorage;
//!
//! # fn main() -> kit_extensions::Result<()> {
//! let mut extensions = Extensions::new("/srv/prototype", OsStorage::new(), NoPreference);
//! extensions.refresh()?;
//! for url in extensions.public_urls("scripts")? {
//!     println!("{url}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod config;
pub mod error;
pub mod layout;
pub mod manifest;
pub mod ordering;
pub mod reader;
pub mod registry;
pub mod resolve;

/// The canonical filename for extension manifest files.
///
/// A dependency of the host project counts as an extension when a file with
/// this name sits at the root of its installed package directory.
pub const MANIFEST_FILENAME: &str = "govuk-prototype-kit.config.json";

/// The host project manifest declaring which packages are installed.
pub const HOST_MANIFEST_FILENAME: &str = "package.json";

/// Directory under the host root where dependency packages are installed.
pub const MODULES_DIRNAME: &str = "node_modules";

/// The extension bundled with every kit project.
///
/// Unless the host configures an explicit base-extensions preference, this
/// one is pinned ahead of all other extensions so its styles and scripts
/// load first and stay overridable.
pub const BUNDLED_EXTENSION: &str = "govuk-frontend";

/// Leading URL segment under which extension files are served.
pub const PUBLIC_URL_PREFIX: &str = "extension-assets";

/// Manifest key whose entries the bundled extension serves from the site
/// root rather than under [`PUBLIC_URL_PREFIX`].
pub const ASSETS_KEY: &str = "assets";

/// Manifest keys with built-in consumers in the kit. Other keys parse and
/// resolve the same way; these are just the ones something queries today.
pub const RECOGNIZED_KEYS: &[&str] = &[
    "assets",
    "nunjucksPaths",
    "sass",
    "scripts",
    "stylesheets",
];

pub use aggregate::{AppConfig, Extensions};
pub use config::{BaseExtensions, NoPreference};
pub use error::{Error, Result};
pub use layout::ProjectLayout;
pub use manifest::ExtensionManifest;
pub use ordering::resolution_order;
pub use reader::{ManifestReader, PackageManifest};
pub use registry::ExtensionRegistry;
pub use resolve::ResolvedPath;
