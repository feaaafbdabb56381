// SPDX-License-Identifier: GPL-3.0-only
use std::path::{Path, PathBuf};
use tracing::info;

/// Observer for exploder activity.
///
/// Purely informational: nothing a logger does can change what gets
/// extracted, so every method returns `()`.
pub trait ExploderLog: Send + Sync {
    fn zip_exploded(&self, zip: &Path, destination: &Path);

    fn directory_deleted(&self, directory: &Path);

    fn zip_same_version(&self, zip: &Path);

    fn module_same_version(&self, module: &str, version: &str);

    fn zips_found(&self, application_root: &Path, zips: &[PathBuf]);

    fn existing_directories(&self, application_root: &Path, directories: &[PathBuf]);
}

/// Forwards exploder notifications to `tracing`
pub struct TracingExploderLog;

impl TracingExploderLog {
    pub fn new() -> Self {
        Self
    }
}

impl ExploderLog for TracingExploderLog {
    fn zip_exploded(&self, zip: &Path, destination: &Path) {
        info!(zip = %zip.display(), dest = %destination.display(), "Exploding package zip");
    }

    fn directory_deleted(&self, directory: &Path) {
        info!(path = %directory.display(), "Deleted package directory");
    }

    fn zip_same_version(&self, zip: &Path) {
        info!(zip = %zip.display(), "Package zip is the same version as the exploded directory, skipping");
    }

    fn module_same_version(&self, module: &str, version: &str) {
        info!(module = %module, version = %version, "Module has already been exploded onto disk");
    }

    fn zips_found(&self, application_root: &Path, zips: &[PathBuf]) {
        info!(app = %application_root.display(), count = zips.len(), "Package zips found");
        for zip in zips {
            info!(zip = %zip.display(), "  package zip");
        }
    }

    fn existing_directories(&self, application_root: &Path, directories: &[PathBuf]) {
        info!(app = %application_root.display(), count = directories.len(), "Exploded package directories found");
        for directory in directories {
            info!(path = %directory.display(), "  package directory");
        }
    }
}

impl Default for TracingExploderLog {
    fn default() -> Self {
        Self::new()
    }
}
