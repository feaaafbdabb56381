// SPDX-License-Identifier: GPL-3.0-only
use glob::Pattern;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use zip::CompressionMethod;
use zip::write::{FileOptions, ZipWriter};

use crate::error::{ExploderError, Result};
use crate::exploder::ExploderLog;
use crate::extractor::ArchiveExtractor;
use crate::filesystem::FileSystem;

/// Create a temporary directory for tests
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().expect("Failed to create temp directory")
}

/// Build an in-memory zip with the given entries
pub fn build_zip(contents: &[(&str, &[u8])]) -> Vec<u8> {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    for (name, data) in contents {
        zip.start_file(*name, FileOptions::default().compression_method(CompressionMethod::Stored))
            .unwrap();
        zip.write_all(data).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

/// Write a zip named `file_name` into `dir` and return its path
pub fn write_zip(dir: &Path, file_name: &str, contents: &[(&str, &[u8])]) -> PathBuf {
    std::fs::create_dir_all(dir).unwrap();
    let path = dir.join(file_name);
    std::fs::write(&path, build_zip(contents)).unwrap();
    path
}

/// Ordered record of side effects shared between fakes, so tests can assert
/// that one call happened before another
#[derive(Debug, Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub fn record(&self, entry: String) {
        self.0.lock().unwrap().push(entry);
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries().iter().any(|e| e == entry)
    }

    /// Index of the first entry equal to `entry`
    pub fn position(&self, entry: &str) -> Option<usize> {
        self.entries().iter().position(|e| e == entry)
    }

    pub fn count_starting_with(&self, prefix: &str) -> usize {
        self.entries().iter().filter(|e| e.starts_with(prefix)).count()
    }
}

#[derive(Default)]
struct FakeDisk {
    directories: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
}

impl FakeDisk {
    fn add_directory(&mut self, path: &Path) {
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                self.directories.insert(ancestor.to_path_buf());
            }
        }
    }
}

/// In-memory `FileSystem` journaling every mutation
pub struct FakeFileSystem {
    disk: Mutex<FakeDisk>,
    journal: Journal,
}

impl FakeFileSystem {
    pub fn new(journal: Journal) -> Self {
        Self {
            disk: Mutex::new(FakeDisk::default()),
            journal,
        }
    }

    /// Seed a directory (and its ancestors) without journaling
    pub fn add_directory(&self, path: impl AsRef<Path>) {
        self.disk.lock().unwrap().add_directory(path.as_ref());
    }

    /// Seed a file without journaling
    pub fn add_file(&self, path: impl Into<PathBuf>, content: &str) {
        let path = path.into();
        let mut disk = self.disk.lock().unwrap();
        if let Some(parent) = path.parent() {
            disk.add_directory(parent);
        }
        disk.files.insert(path, content.to_string());
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.disk.lock().unwrap().files.get(path.as_ref()).cloned()
    }
}

impl FileSystem for FakeFileSystem {
    fn directory_exists(&self, path: &Path) -> bool {
        self.disk.lock().unwrap().directories.contains(path)
    }

    fn delete_directory(&self, path: &Path) -> Result<()> {
        self.journal.record(format!("delete {}", path.display()));
        let mut disk = self.disk.lock().unwrap();
        disk.directories.retain(|d| !d.starts_with(path));
        disk.files.retain(|f, _| !f.starts_with(path));
        Ok(())
    }

    fn create_directory(&self, path: &Path) -> Result<()> {
        self.journal.record(format!("create {}", path.display()));
        self.disk.lock().unwrap().add_directory(path);
        Ok(())
    }

    fn child_directories(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let disk = self.disk.lock().unwrap();
        Ok(disk
            .directories
            .iter()
            .filter(|d| d.parent() == Some(path))
            .cloned()
            .collect())
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.disk.lock().unwrap().files.contains_key(path)
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        self.file(path).ok_or_else(|| {
            ExploderError::io(path, std::io::Error::from(std::io::ErrorKind::NotFound))
        })
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<()> {
        self.journal.record(format!("write {} = {}", path.display(), content));
        self.add_file(path, content);
        Ok(())
    }

    fn matching_files(&self, pattern: &str, directory: &Path) -> Result<Vec<PathBuf>> {
        let compiled = Pattern::new(pattern).map_err(|source| ExploderError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        let disk = self.disk.lock().unwrap();
        Ok(disk
            .files
            .keys()
            .filter(|f| f.parent() == Some(directory))
            .filter(|f| {
                f.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| compiled.matches(n))
            })
            .cloned()
            .collect())
    }
}

/// `ArchiveExtractor` that journals calls and materializes the destination
/// directory in a `FakeFileSystem` instead of unpacking anything
pub struct RecordingExtractor {
    fs: Arc<FakeFileSystem>,
    journal: Journal,
    versions: Mutex<HashMap<PathBuf, String>>,
    failing: Mutex<HashSet<PathBuf>>,
    streams: Mutex<Vec<(String, Vec<u8>)>>,
}

impl RecordingExtractor {
    pub const DEFAULT_VERSION: &'static str = "1.0.0.0";

    pub fn new(fs: Arc<FakeFileSystem>, journal: Journal) -> Self {
        Self {
            fs,
            journal,
            versions: Mutex::new(HashMap::new()),
            failing: Mutex::new(HashSet::new()),
            streams: Mutex::new(Vec::new()),
        }
    }

    pub fn set_version(&self, archive: impl Into<PathBuf>, version: &str) {
        self.versions.lock().unwrap().insert(archive.into(), version.to_string());
    }

    /// Make extraction of `archive` fail as a corrupt archive
    pub fn fail_on(&self, archive: impl Into<PathBuf>) {
        self.failing.lock().unwrap().insert(archive.into());
    }

    /// Labels and bytes of every stream handed to `extract_stream`
    pub fn streams(&self) -> Vec<(String, Vec<u8>)> {
        self.streams.lock().unwrap().clone()
    }
}

impl ArchiveExtractor for RecordingExtractor {
    fn extract_to(&self, archive_path: &Path, destination: &Path) -> Result<()> {
        if self.failing.lock().unwrap().contains(archive_path) {
            return Err(ExploderError::archive(
                archive_path.display().to_string(),
                zip::result::ZipError::InvalidArchive("corrupt test archive"),
            ));
        }
        self.journal.record(format!(
            "extract {} -> {}",
            archive_path.display(),
            destination.display()
        ));
        self.fs.add_directory(destination);
        Ok(())
    }

    fn extract_stream(&self, label: &str, source: &mut dyn Read, destination: &Path) -> Result<()> {
        let mut bytes = Vec::new();
        source
            .read_to_end(&mut bytes)
            .map_err(|e| ExploderError::io(destination, e))?;
        self.journal.record(format!("extract {} -> {}", label, destination.display()));
        self.streams.lock().unwrap().push((label.to_string(), bytes));
        self.fs.add_directory(destination);
        Ok(())
    }

    fn version(&self, archive_path: &Path) -> Result<String> {
        Ok(self
            .versions
            .lock()
            .unwrap()
            .get(archive_path)
            .cloned()
            .unwrap_or_else(|| Self::DEFAULT_VERSION.to_string()))
    }
}

/// `ExploderLog` that journals each notification
pub struct RecordingLog {
    journal: Journal,
}

impl RecordingLog {
    pub fn new(journal: Journal) -> Self {
        Self { journal }
    }
}

impl ExploderLog for RecordingLog {
    fn zip_exploded(&self, zip: &Path, destination: &Path) {
        self.journal.record(format!("log exploded {} -> {}", zip.display(), destination.display()));
    }

    fn directory_deleted(&self, directory: &Path) {
        self.journal.record(format!("log deleted {}", directory.display()));
    }

    fn zip_same_version(&self, zip: &Path) {
        self.journal.record(format!("log same version {}", zip.display()));
    }

    fn module_same_version(&self, module: &str, version: &str) {
        self.journal.record(format!("log module same version {} {}", module, version));
    }

    fn zips_found(&self, application_root: &Path, zips: &[PathBuf]) {
        self.journal.record(format!(
            "log zips found in {}: {}",
            application_root.display(),
            zips.len()
        ));
    }

    fn existing_directories(&self, application_root: &Path, directories: &[PathBuf]) {
        self.journal.record(format!(
            "log directories found in {}: {}",
            application_root.display(),
            directories.len()
        ));
    }
}
