//! Deterministic extension ordering.
//!
//! Every aggregate follows one global sequence: extensions pinned by the
//! host's base-extensions preference first, in preference order, then every
//! remaining extension alphabetically. With no preference configured the
//! bundled [`BUNDLED_EXTENSION`](crate::BUNDLED_EXTENSION) is pinned
//! implicitly, which is how the bundled frontend's styles load before the
//! extensions that override them.

use crate::BUNDLED_EXTENSION;
use crate::registry::ExtensionRegistry;

/// Compute the order in which installed extensions contribute paths.
///
/// `preference` is the host's base-extensions setting, `None` when
/// unconfigured. Preference entries that are not installed extensions are
/// skipped and duplicates keep their first position, so every installed
/// extension appears exactly once.
pub fn resolution_order(
    registry: &ExtensionRegistry,
    preference: Option<&[String]>,
) -> Vec<String> {
    let implicit_pin;
    let pinned: &[String] = match preference {
        Some(names) => names,
        None => {
            implicit_pin = [BUNDLED_EXTENSION.to_string()];
            &implicit_pin
        }
    };

    let mut order: Vec<String> = Vec::with_capacity(registry.len());
    for name in pinned {
        if registry.contains(name) && !order.contains(name) {
            order.push(name.clone());
        }
    }
    for name in registry.names() {
        if !order.contains(&name) {
            order.push(name);
        }
    }
    order
}
