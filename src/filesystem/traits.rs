// SPDX-License-Identifier: GPL-3.0-only
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Blocking file-system operations the exploder depends on
pub trait FileSystem: Send + Sync {
    fn directory_exists(&self, path: &Path) -> bool;

    /// Recursively delete a directory; succeeds when it is already absent
    fn delete_directory(&self, path: &Path) -> Result<()>;

    /// Recursively create a directory
    fn create_directory(&self, path: &Path) -> Result<()>;

    /// Immediate child directories of `path`, empty when `path` does not exist
    fn child_directories(&self, path: &Path) -> Result<Vec<PathBuf>>;

    fn file_exists(&self, path: &Path) -> bool;

    fn read_text(&self, path: &Path) -> Result<String>;

    /// Create or overwrite a small text file
    fn write_text(&self, path: &Path, content: &str) -> Result<()>;

    /// Files directly under `directory` whose names match the glob `pattern`
    fn matching_files(&self, pattern: &str, directory: &Path) -> Result<Vec<PathBuf>>;
}
