// SPDX-License-Identifier: GPL-3.0-only
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::config::{DATA_FOLDER, PACKAGE_ZIP_PATTERN, PackageLayout};
use crate::error::{ExploderError, Result};
use crate::exploder::decision::{self, ExplodeRequest, ExtractionState};
use crate::exploder::log::ExploderLog;
use crate::exploder::naming::{embedded_package_folder_name, is_embedded_package_archive};
use crate::extractor::ArchiveExtractor;
use crate::filesystem::FileSystem;
use crate::module::PackageModule;
use crate::package_files::PackageFiles;
use crate::utils::is_single_component;

/// Materializes package zips and module-embedded packages under
/// `<application_root>/bin/<packages_folder>`.
///
/// Holds no state of its own: what has been exploded is read back from the
/// directories and their version markers on every call.
pub struct PackageExploder {
    fs: Arc<dyn FileSystem>,
    extractor: Arc<dyn ArchiveExtractor>,
    log: Arc<dyn ExploderLog>,
    layout: PackageLayout,
}

impl PackageExploder {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        extractor: Arc<dyn ArchiveExtractor>,
        log: Arc<dyn ExploderLog>,
        layout: PackageLayout,
    ) -> Self {
        Self {
            fs,
            extractor,
            log,
            layout,
        }
    }

    pub fn layout(&self) -> &PackageLayout {
        &self.layout
    }

    /// Explode every package zip whose directory is missing or out of date and
    /// return the directories of all package zips, skipped ones included.
    ///
    /// A failing zip does not stop the others; all failures are reported
    /// together as [`ExploderError::Batch`] once every zip has been tried,
    /// still carrying the directory list.
    pub fn explode_all_zips(&self, application_root: &Path) -> Result<Vec<PathBuf>> {
        let zips = self.find_package_zips(application_root)?;
        info!(app = %application_root.display(), count = zips.len(), "Exploding package zips");

        let mut directories = Vec::with_capacity(zips.len());
        let mut failures = Vec::new();

        for zip in zips {
            let directory = self.layout.directory_for_zip(application_root, &zip);
            if let Err(e) = self.explode_zip_if_needed(&zip, &directory) {
                error!(zip = %zip.display(), error = %e, "Failed to explode package zip");
                failures.push((zip, e));
            }
            directories.push(directory);
        }

        if !failures.is_empty() {
            return Err(ExploderError::Batch {
                directories,
                failures,
            });
        }
        Ok(directories)
    }

    fn explode_zip_if_needed(&self, zip: &Path, directory: &Path) -> Result<ExtractionState> {
        decision::explode_if_needed(
            self.fs.as_ref(),
            ExplodeRequest {
                directory,
                current_version: || self.extractor.version(zip),
                explode: |version: &str| self.replace_zip_contents(zip, directory, version),
                same_version: |_: &str| self.log.zip_same_version(zip),
            },
        )
    }

    /// Delete, extract, then record `version`; the marker is written last so
    /// an interrupted run is retried
    fn replace_zip_contents(&self, zip: &Path, directory: &Path, version: &str) -> Result<()> {
        self.fs.delete_directory(directory)?;
        self.log.zip_exploded(zip, directory);
        self.extractor.extract_to(zip, directory)?;
        self.fs
            .write_text(&PackageLayout::version_file(directory), version)
    }

    /// Explode a single zip without consulting its version marker
    pub fn explode(&self, application_root: &Path, zip: &Path) -> Result<PathBuf> {
        let directory = self.layout.directory_for_zip(application_root, zip);
        let version = self.extractor.version(zip)?;
        self.replace_zip_contents(zip, &directory, &version)?;
        Ok(directory)
    }

    /// Explode the packages embedded in `module` into `<packages_dir>/<module name>`
    /// and register the resulting child folders in `files`.
    ///
    /// Folders are registered whenever the version check succeeds, whether
    /// the module was extracted now or on an earlier run.
    pub fn explode_module(
        &self,
        application_root: &Path,
        module: &dyn PackageModule,
        files: &mut PackageFiles,
    ) -> Result<PathBuf> {
        let directory = self
            .layout
            .directory_for_module(application_root, module.name());

        let mut packages = Vec::new();
        for resource in module.resource_names()? {
            if !is_embedded_package_archive(&resource) {
                continue;
            }
            let folder = embedded_package_folder_name(&resource);
            if !is_single_component(&folder) {
                return Err(ExploderError::InvalidFolderName { resource });
            }
            packages.push((resource, folder));
        }

        decision::explode_if_needed(
            self.fs.as_ref(),
            ExplodeRequest {
                directory: &directory,
                current_version: || Ok(module.version().to_string()),
                explode: |version: &str| self.unpack_module(module, &packages, &directory, version),
                same_version: |version: &str| self.log.module_same_version(module.name(), version),
            },
        )?;

        self.register_module_folders(&directory, files)?;
        Ok(directory)
    }

    fn unpack_module(
        &self,
        module: &dyn PackageModule,
        packages: &[(String, String)],
        directory: &Path,
        version: &str,
    ) -> Result<()> {
        self.fs.delete_directory(directory)?;
        self.fs.create_directory(directory)?;

        for (resource, folder) in packages {
            let destination = directory.join(folder);
            let label = format!("Resource {} in module {}", resource, module.name());

            let mut stream = module.open_resource(resource)?;
            self.extractor
                .extract_stream(&label, stream.as_mut(), &destination)?;
        }

        // No marker without packages, so an empty module is looked at again next run
        if packages.is_empty() {
            warn!(module = %module.name(), "Module contains no embedded packages");
            return Ok(());
        }
        self.fs
            .write_text(&PackageLayout::version_file(directory), version)
    }

    fn register_module_folders(&self, directory: &Path, files: &mut PackageFiles) -> Result<()> {
        for child in self.fs.child_directories(directory)? {
            let Some(name) = child.file_name().and_then(|n| n.to_str()).map(str::to_string) else {
                continue;
            };
            let full_path = std::path::absolute(&child).map_err(|e| ExploderError::io(&child, e))?;

            if name.eq_ignore_ascii_case(DATA_FOLDER) {
                for data_file in self.fs.matching_files("*", &full_path)? {
                    if let Some(data_name) = data_file.file_name().and_then(|n| n.to_str()) {
                        files.register_data_file(data_name.to_string(), &data_file);
                    }
                }
            }

            files.register_folder(name, full_path);
        }
        Ok(())
    }

    /// Delete every exploded package directory. Zips are left in place.
    pub fn clean_all(&self, application_root: &Path) -> Result<()> {
        let packages_dir = self.layout.packages_dir(application_root);
        for directory in self.fs.child_directories(&packages_dir)? {
            self.log.directory_deleted(&directory);
            self.fs.delete_directory(&directory)?;
        }
        Ok(())
    }

    /// Version recorded in `directory`, or the all-zero sentinel when there is none
    pub fn read_version(&self, directory: &Path) -> Result<String> {
        decision::read_version(self.fs.as_ref(), directory)
    }

    /// Report package zips and exploded directories without changing anything
    pub fn log_package_state(&self, application_root: &Path) -> Result<()> {
        let existing = self
            .fs
            .child_directories(&self.layout.packages_dir(application_root))?;
        let zips = self.find_package_zips(application_root)?;

        self.log.zips_found(application_root, &zips);
        self.log.existing_directories(application_root, &existing);
        Ok(())
    }

    pub fn find_package_zips(&self, application_root: &Path) -> Result<Vec<PathBuf>> {
        self.fs.matching_files(
            PACKAGE_ZIP_PATTERN,
            &self.layout.packages_dir(application_root),
        )
    }
}
