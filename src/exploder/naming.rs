// SPDX-License-Identifier: GPL-3.0-only

/// Prefix marking a resource segment as a package archive
const PACKAGE_SEGMENT_PREFIX: &str = "pak";

/// Literal stripped from the package segment to get the folder name
const PACKAGE_FOLDER_PREFIX: &str = "pak-";

/// Second-to-last and last dot-separated segments of a resource name
fn package_segments(resource_name: &str) -> Option<(&str, &str)> {
    let mut parts = resource_name.rsplit('.');
    let last = parts.next()?;
    let package = parts.next()?;
    Some((package, last))
}

/// True for resources such as `Widgets.pak-webcontent.zip`: the second-to-last
/// segment starts with `pak` and the last is `zip`, both case-insensitively.
pub fn is_embedded_package_archive(resource_name: &str) -> bool {
    match package_segments(resource_name) {
        Some((package, extension)) => {
            extension.eq_ignore_ascii_case("zip")
                && package.to_lowercase().starts_with(PACKAGE_SEGMENT_PREFIX)
        }
        None => false,
    }
}

/// Folder an embedded package explodes into: `Widgets.pak-webcontent.zip` -> `webcontent`
pub fn embedded_package_folder_name(resource_name: &str) -> String {
    let segment = package_segments(resource_name)
        .map(|(package, _)| package)
        .unwrap_or(resource_name);
    segment
        .strip_prefix(PACKAGE_FOLDER_PREFIX)
        .unwrap_or(segment)
        .to_string()
}
