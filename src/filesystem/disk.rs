// SPDX-License-Identifier: GPL-3.0-only
use glob::Pattern;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ExploderError, Result};
use crate::filesystem::traits::FileSystem;

/// `FileSystem` backed by the local disk
pub struct DiskFileSystem;

impl DiskFileSystem {
    pub fn new() -> Self {
        Self
    }

    /// Entries of `path` that satisfy `keep`, sorted by path
    fn entries_where(
        &self,
        path: &Path,
        keep: impl Fn(&std::fs::FileType, &Path) -> bool,
    ) -> Result<Vec<PathBuf>> {
        let entries = match std::fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ExploderError::io(path, e)),
        };

        let mut found = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ExploderError::io(path, e))?;
            let entry_path = entry.path();
            let file_type = entry
                .file_type()
                .map_err(|e| ExploderError::io(&entry_path, e))?;
            if keep(&file_type, entry_path.as_path()) {
                found.push(entry_path);
            }
        }

        found.sort();
        Ok(found)
    }
}

impl FileSystem for DiskFileSystem {
    fn directory_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn delete_directory(&self, path: &Path) -> Result<()> {
        match std::fs::remove_dir_all(path) {
            Ok(()) => {
                debug!(path = %path.display(), "Deleted directory");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ExploderError::io(path, e)),
        }
    }

    fn create_directory(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|e| ExploderError::io(path, e))
    }

    fn child_directories(&self, path: &Path) -> Result<Vec<PathBuf>> {
        self.entries_where(path, |file_type, _| file_type.is_dir())
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| ExploderError::io(path, e))
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                self.create_directory(parent)?;
            }
        }
        std::fs::write(path, content).map_err(|e| ExploderError::io(path, e))
    }

    fn matching_files(&self, pattern: &str, directory: &Path) -> Result<Vec<PathBuf>> {
        let compiled = Pattern::new(pattern).map_err(|source| ExploderError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        self.entries_where(directory, |file_type, entry_path| {
            file_type.is_file()
                && entry_path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| compiled.matches(name))
        })
    }
}

impl Default for DiskFileSystem {
    fn default() -> Self {
        Self::new()
    }
}
