// SPDX-License-Identifier: GPL-3.0-only
use std::path::{Path, PathBuf};

/// Folder under `bin` that holds package zips and their exploded directories
pub const DEFAULT_PACKAGES_FOLDER: &str = "fubu-packages";

/// Version marker written at the root of every exploded package
pub const VERSION_FILE: &str = "VERSION";

/// Child folder of an exploded module package holding static web content
pub const WEB_CONTENT_FOLDER: &str = "WebContent";

/// Child folder of an exploded module package whose files are exposed as data
pub const DATA_FOLDER: &str = "Data";

/// Pattern used to discover package zips in the packages folder
pub const PACKAGE_ZIP_PATTERN: &str = "*.zip";

/// Directory layout of packages inside an application root:
/// `<root>/bin/<packages_folder>/<package>/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLayout {
    packages_folder: String,
}

impl PackageLayout {
    pub fn new(packages_folder: impl Into<String>) -> Self {
        Self {
            packages_folder: packages_folder.into(),
        }
    }

    pub fn packages_folder(&self) -> &str {
        &self.packages_folder
    }

    pub fn packages_dir(&self, application_root: &Path) -> PathBuf {
        application_root.join("bin").join(&self.packages_folder)
    }

    /// `pak1.zip` explodes into `<packages_dir>/pak1`
    pub fn directory_for_zip(&self, application_root: &Path, zip_file: &Path) -> PathBuf {
        let stem = zip_file.file_stem().unwrap_or(zip_file.as_os_str());
        self.packages_dir(application_root).join(stem)
    }

    pub fn directory_for_module(&self, application_root: &Path, module_name: &str) -> PathBuf {
        self.packages_dir(application_root).join(module_name)
    }

    pub fn version_file(directory: &Path) -> PathBuf {
        directory.join(VERSION_FILE)
    }
}

impl Default for PackageLayout {
    fn default() -> Self {
        Self::new(DEFAULT_PACKAGES_FOLDER)
    }
}
