// SPDX-License-Identifier: GPL-3.0-only
use std::io::Read;
use std::path::Path;

use crate::error::Result;

/// Unpacks package archives onto disk.
///
/// Callers always clear `destination` first; extraction never merges into
/// existing content.
pub trait ArchiveExtractor: Send + Sync {
    /// Extract the archive at `archive_path` into `destination`
    fn extract_to(&self, archive_path: &Path, destination: &Path) -> Result<()>;

    /// Extract an already opened archive stream; `label` names it in logs and errors
    fn extract_stream(&self, label: &str, source: &mut dyn Read, destination: &Path) -> Result<()>;

    /// Version string of the archive at `archive_path`
    fn version(&self, archive_path: &Path) -> Result<String>;
}
