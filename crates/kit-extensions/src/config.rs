//! Host-owned ordering preference.
//!
//! The kit's application config may pin a set of "base" extensions that
//! sort ahead of everything else. That config belongs to the host, not to
//! this crate; the extension system re-reads it through [`BaseExtensions`]
//! on every query so a host can change the preference without refreshing
//! the registry.

/// Source of the base-extensions ordering preference.
///
/// `None` means the host configures nothing, which pins the bundled
/// extension first. `Some(vec![])` disables pinning entirely and yields
/// pure alphabetical order.
pub trait BaseExtensions {
    /// The current preference value.
    fn base_extensions(&self) -> Option<Vec<String>>;
}

/// Preference source for hosts with no base-extensions configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPreference;

impl BaseExtensions for NoPreference {
    fn base_extensions(&self) -> Option<Vec<String>> {
        None
    }
}

/// A fixed preference value.
impl BaseExtensions for Option<Vec<String>> {
    fn base_extensions(&self) -> Option<Vec<String>> {
        self.clone()
    }
}
