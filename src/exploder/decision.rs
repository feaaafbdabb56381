// SPDX-License-Identifier: GPL-3.0-only
use std::path::Path;
use tracing::debug;
use uuid::Uuid;

use crate::config::PackageLayout;
use crate::error::Result;
use crate::filesystem::FileSystem;

/// Stored version reported for a directory without a version marker.
/// Never equal to a real package version.
pub fn unknown_version() -> String {
    Uuid::nil().to_string()
}

/// What was found on disk for a package directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionState {
    /// No destination directory
    Absent,
    /// Directory exists but carries no version marker
    PresentNoVersion,
    PresentSameVersion,
    PresentDifferentVersion,
}

impl ExtractionState {
    pub fn needs_explode(self) -> bool {
        !matches!(self, ExtractionState::PresentSameVersion)
    }
}

/// Everything needed to decide whether one package gets exploded.
///
/// `explode` receives the version it should record once extraction has
/// completed; it owns delete, extract and marker write as one unit.
pub struct ExplodeRequest<'a, V, E, S>
where
    V: FnOnce() -> Result<String>,
    E: FnOnce(&str) -> Result<()>,
    S: FnOnce(&str),
{
    pub directory: &'a Path,
    pub current_version: V,
    pub explode: E,
    pub same_version: S,
}

/// Stored version of an exploded package, or [`unknown_version`] when the
/// directory has no marker
pub fn read_version(fs: &dyn FileSystem, directory: &Path) -> Result<String> {
    let marker = PackageLayout::version_file(directory);
    if fs.file_exists(&marker) {
        return Ok(fs.read_text(&marker)?.trim().to_string());
    }
    Ok(unknown_version())
}

/// Classify `directory` against the package's current version
pub fn extraction_state(
    fs: &dyn FileSystem,
    directory: &Path,
    current_version: &str,
) -> Result<ExtractionState> {
    if !fs.directory_exists(directory) {
        return Ok(ExtractionState::Absent);
    }
    if !fs.file_exists(&PackageLayout::version_file(directory)) {
        return Ok(ExtractionState::PresentNoVersion);
    }
    if read_version(fs, directory)? == current_version {
        Ok(ExtractionState::PresentSameVersion)
    } else {
        Ok(ExtractionState::PresentDifferentVersion)
    }
}

/// Run `request.explode` unless the directory already holds the current version,
/// in which case only `request.same_version` is called.
///
/// Nothing here deletes or extracts; a failed explode leaves a stale or
/// missing marker behind, so the next run retries it.
///
/// `current_version` is asked first, even for an absent directory, because
/// `explode` needs it for the marker. A failing version provider therefore
/// fails the package without touching the directory.
pub fn explode_if_needed<V, E, S>(
    fs: &dyn FileSystem,
    request: ExplodeRequest<'_, V, E, S>,
) -> Result<ExtractionState>
where
    V: FnOnce() -> Result<String>,
    E: FnOnce(&str) -> Result<()>,
    S: FnOnce(&str),
{
    let version = (request.current_version)()?;
    let state = extraction_state(fs, request.directory, &version)?;
    debug!(path = %request.directory.display(), ?state, version = %version, "Package directory state");

    if state.needs_explode() {
        (request.explode)(&version)?;
    } else {
        (request.same_version)(&version);
    }

    Ok(state)
}
