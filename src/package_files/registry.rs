// SPDX-License-Identifier: GPL-3.0-only
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::error::{ExploderError, Result};

/// Opens a fresh stream over one data entry
pub type DataSource = Box<dyn Fn() -> std::io::Result<Box<dyn Read>> + Send + Sync>;

/// Named folders and data entries produced by exploding packages.
///
/// Built up during one exploder run and then handed to the hosting
/// application; registering an existing name replaces the previous entry.
#[derive(Default)]
pub struct PackageFiles {
    folders: HashMap<String, PathBuf>,
    data: HashMap<String, DataSource>,
}

impl PackageFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_folder(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        self.folders.insert(name.into(), path.into());
    }

    pub fn register_data<F>(&mut self, name: impl Into<String>, source: F)
    where
        F: Fn() -> std::io::Result<Box<dyn Read>> + Send + Sync + 'static,
    {
        self.data.insert(name.into(), Box::new(source));
    }

    /// Register a file on disk as a data entry, opened anew on every read
    pub fn register_data_file(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        let path = path.into();
        self.register_data(name, move || {
            let file = File::open(&path)?;
            Ok(Box::new(BufReader::new(file)) as Box<dyn Read>)
        });
    }

    /// Call `callback` with the folder registered as `name`; does nothing when absent
    pub fn for_folder(&self, name: &str, callback: impl FnOnce(&Path)) {
        if let Some(path) = self.folders.get(name) {
            callback(path);
        }
    }

    /// Call `callback` with a newly opened stream over the data entry `name`;
    /// does nothing when absent
    pub fn for_data(&self, name: &str, callback: impl FnOnce(&str, &mut dyn Read)) -> Result<()> {
        let Some(source) = self.data.get(name) else {
            return Ok(());
        };

        let mut stream = source().map_err(|e| ExploderError::io(name, e))?;
        callback(name, stream.as_mut());
        Ok(())
    }

    pub fn folder(&self, name: &str) -> Option<&Path> {
        self.folders.get(name).map(PathBuf::as_path)
    }

    pub fn folder_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.folders.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn data_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.data.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for PackageFiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackageFiles")
            .field("folders", &self.folders)
            .field("data", &self.data_names())
            .finish()
    }
}
