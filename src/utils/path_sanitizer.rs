// SPDX-License-Identifier: GPL-3.0-only
use std::path::{Component, Path};

/// True when `name` joins onto a directory as exactly one new child.
///
/// Rejects empty names, `.`/`..`, absolute paths and anything containing a
/// separator, so a name taken from package metadata cannot point outside the
/// directory it is joined to.
pub fn is_single_component(name: &str) -> bool {
    if name.is_empty() || name.contains('/') || name.contains('\\') {
        return false;
    }

    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
