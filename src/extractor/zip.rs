// SPDX-License-Identifier: GPL-3.0-only
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;
use tracing::{debug, info, warn};
use zip::ZipArchive;
use zip::result::ZipError;

use crate::config::VERSION_FILE;
use crate::error::{ExploderError, Result};
use crate::extractor::traits::ArchiveExtractor;
use crate::utils::calculate_file_md5;

pub struct ZipArchiveExtractor;

impl ZipArchiveExtractor {
    pub fn new() -> Self {
        Self
    }

    fn open(archive_path: &Path) -> Result<ZipArchive<BufReader<File>>> {
        let file = File::open(archive_path).map_err(|e| ExploderError::io(archive_path, e))?;
        ZipArchive::new(BufReader::new(file))
            .map_err(|e| ExploderError::archive(archive_path.display().to_string(), e))
    }

    /// Write every entry of `archive` below `destination`, returning the number of files written.
    ///
    /// A `VERSION` entry at the archive root is not written: the version marker
    /// is owned by the caller and must only appear once extraction has finished.
    fn unpack<R: Read + Seek>(
        label: &str,
        archive: &mut ZipArchive<R>,
        destination: &Path,
    ) -> Result<usize> {
        std::fs::create_dir_all(destination).map_err(|e| ExploderError::io(destination, e))?;

        let mut written = 0;
        for i in 0..archive.len() {
            let mut entry = archive
                .by_index(i)
                .map_err(|e| ExploderError::archive(label, e))?;
            let outpath = match entry.enclosed_name() {
                Some(path) => destination.join(path),
                None => {
                    warn!(archive = %label, entry = %entry.name(), "Skipping entry outside the destination");
                    continue;
                }
            };

            if !entry.is_dir() && outpath == destination.join(VERSION_FILE) {
                debug!(archive = %label, "Leaving root VERSION entry to the version marker");
                continue;
            }

            if entry.is_dir() {
                std::fs::create_dir_all(&outpath).map_err(|e| ExploderError::io(&outpath, e))?;
                continue;
            }

            if let Some(parent) = outpath.parent() {
                std::fs::create_dir_all(parent).map_err(|e| ExploderError::io(parent, e))?;
            }
            let mut outfile = File::create(&outpath).map_err(|e| ExploderError::io(&outpath, e))?;
            std::io::copy(&mut entry, &mut outfile).map_err(|e| ExploderError::io(&outpath, e))?;
            written += 1;
        }

        Ok(written)
    }
}

impl ArchiveExtractor for ZipArchiveExtractor {
    fn extract_to(&self, archive_path: &Path, destination: &Path) -> Result<()> {
        info!(archive = %archive_path.display(), dest = %destination.display(), "Extracting ZIP archive");

        let mut archive = Self::open(archive_path)?;
        let label = archive_path.display().to_string();
        let files = Self::unpack(&label, &mut archive, destination)?;

        info!(archive = %archive_path.display(), dest = %destination.display(), files, "ZIP extraction completed");
        Ok(())
    }

    fn extract_stream(&self, label: &str, source: &mut dyn Read, destination: &Path) -> Result<()> {
        info!(source = %label, dest = %destination.display(), "Extracting ZIP stream");

        // zip needs Seek, embedded streams are small enough to buffer
        let mut buffer = Vec::new();
        source
            .read_to_end(&mut buffer)
            .map_err(|e| ExploderError::io(destination, e))?;

        let mut archive =
            ZipArchive::new(Cursor::new(buffer)).map_err(|e| ExploderError::archive(label, e))?;
        let files = Self::unpack(label, &mut archive, destination)?;

        info!(source = %label, dest = %destination.display(), files, "ZIP extraction completed");
        Ok(())
    }

    fn version(&self, archive_path: &Path) -> Result<String> {
        let mut archive = Self::open(archive_path)?;

        match archive.by_name(VERSION_FILE) {
            Ok(mut entry) => {
                let mut version = String::new();
                entry
                    .read_to_string(&mut version)
                    .map_err(|e| ExploderError::io(archive_path, e))?;
                Ok(version.trim().to_string())
            }
            Err(ZipError::FileNotFound) => {
                debug!(archive = %archive_path.display(), "No VERSION entry, using archive checksum");
                calculate_file_md5(archive_path)
            }
            Err(e) => Err(ExploderError::archive(archive_path.display().to_string(), e)),
        }
    }
}

impl Default for ZipArchiveExtractor {
    fn default() -> Self {
        Self::new()
    }
}
