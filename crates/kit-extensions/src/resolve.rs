//! Validation and resolution of declared extension paths.
//!
//! A declared path like `/assets/images` resolves to two things at once:
//! the on-disk location inside the installed package and the public URL the
//! kit serves it under. Validation and traversal handling live here and
//! nowhere else, so every aggregate view of the same declaration agrees.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::layout::ProjectLayout;
use crate::{ASSETS_KEY, BUNDLED_EXTENSION, PUBLIC_URL_PREFIX};

/// Both faces of one resolved declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// On-disk location, rooted inside the extension's package directory.
    pub file_system_path: PathBuf,
    /// URL path the kit serves the location under.
    pub public_url: String,
}

/// Resolve one declared path for `extension` under `key`.
///
/// Fails when the declaration contains a backslash or does not start with a
/// forward slash. `.`, `..`, and empty segments are dropped outright, so a
/// declaration cannot climb out of its package directory.
pub fn resolve(
    layout: &ProjectLayout,
    extension: &str,
    key: &str,
    declared: &str,
) -> Result<ResolvedPath> {
    validate(extension, declared)?;
    let segments = normalized_segments(declared);

    let mut file_system_path = layout.package_dir(extension);
    for segment in &segments {
        file_system_path.push(segment);
    }

    Ok(ResolvedPath {
        public_url: public_url(extension, key, &segments),
        file_system_path,
    })
}

/// Reject declarations the kit refuses to serve.
///
/// The backslash check runs before the leading-slash check, so `\assets`
/// reports the backslash problem. The messages are user-facing and fixed.
fn validate(extension: &str, declared: &str) -> Result<()> {
    if declared.contains('\\') {
        return Err(Error::BackslashInPath {
            extension: extension.to_string(),
            path: declared.to_string(),
        });
    }
    if !declared.starts_with('/') {
        return Err(Error::MissingLeadingSlash {
            extension: extension.to_string(),
            path: declared.to_string(),
        });
    }
    Ok(())
}

/// Split on `/`, dropping empty, `.`, and `..` segments.
///
/// Dropping (rather than collapsing) `..` keeps the result inside the
/// package directory without any pairwise bookkeeping.
fn normalized_segments(declared: &str) -> Vec<&str> {
    declared
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != "." && *segment != "..")
        .collect()
}

/// Build the public URL for a declaration, percent-encoding each segment.
///
/// Segments are encoded one at a time so the `/` separators stay literal.
/// The bundled extension's `assets` entries are served from the site root
/// instead of under the shared prefix.
fn public_url(extension: &str, key: &str, segments: &[&str]) -> String {
    let mut url = String::new();
    if extension != BUNDLED_EXTENSION || key != ASSETS_KEY {
        url.push('/');
        url.push_str(PUBLIC_URL_PREFIX);
        url.push('/');
        url.push_str(&urlencoding::encode(extension));
    }
    for segment in segments {
        url.push('/');
        url.push_str(&urlencoding::encode(segment));
    }
    if url.is_empty() {
        url.push('/');
    }
    url
}
